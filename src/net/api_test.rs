use super::*;

// =============================================================
// Error message normalization
// =============================================================

#[test]
fn error_message_prefers_server_body() {
    let msg = error_message("{\"error\":\"Email already registered\"}", "Registration failed");
    assert_eq!(msg, "Email already registered");
}

#[test]
fn error_message_falls_back_on_non_json_body() {
    let msg = error_message("<html>502 Bad Gateway</html>", "Login failed");
    assert_eq!(msg, "Login failed");
}

#[test]
fn error_message_falls_back_on_empty_body() {
    let msg = error_message("", "Could not create job");
    assert_eq!(msg, "Could not create job");
}

#[test]
fn error_message_falls_back_when_error_field_missing() {
    let msg = error_message("{\"message\":\"nope\"}", "Could not load jobs");
    assert_eq!(msg, "Could not load jobs");
}

#[test]
fn api_error_displays_its_message() {
    let err = ApiError("Login failed".to_owned());
    assert_eq!(err.to_string(), "Login failed");
}
