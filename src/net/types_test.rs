use super::*;

// =============================================================
// Role / Currency string forms
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"employer\"");
    assert_eq!(serde_json::to_string(&Role::Worker).unwrap(), "\"worker\"");
}

#[test]
fn role_from_form_value_defaults_to_worker() {
    assert_eq!(Role::from_form_value("employer"), Role::Employer);
    assert_eq!(Role::from_form_value("worker"), Role::Worker);
    assert_eq!(Role::from_form_value("admin"), Role::Worker);
}

#[test]
fn currency_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Currency::Eur).unwrap(), "\"EUR\"");
    assert_eq!(serde_json::to_string(&Currency::Ron).unwrap(), "\"RON\"");
    assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
}

#[test]
fn currency_from_form_value_defaults_to_eur() {
    assert_eq!(Currency::from_form_value("RON"), Currency::Ron);
    assert_eq!(Currency::from_form_value("GBP"), Currency::Eur);
}

// =============================================================
// Job wire format
// =============================================================

#[test]
fn job_parses_camel_case_fields() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "id": "j-1",
        "title": "Clean apartment",
        "description": "Two rooms",
        "location": "Bucuresti",
        "hourlyRate": 50,
        "currency": "EUR",
        "category": "general",
        "status": "open",
        "createdBy": { "id": "u-1", "name": "Ana" }
    }))
    .expect("job");

    assert_eq!(job.hourly_rate, Some(50.0));
    assert_eq!(job.currency, Currency::Eur);
    assert_eq!(job.created_by.as_ref().map(|p| p.name.as_str()), Some("Ana"));
}

#[test]
fn job_accepts_null_hourly_rate_and_missing_optionals() {
    let job: Job = serde_json::from_value(serde_json::json!({
        "id": "j-2",
        "title": "Move boxes",
        "description": "One afternoon",
        "hourlyRate": null
    }))
    .expect("job");

    assert_eq!(job.hourly_rate, None);
    assert_eq!(job.location, "");
    assert!(job.created_by.is_none());
}

#[test]
fn job_payload_serializes_camel_case() {
    let payload = JobPayload {
        title: "Clean apartment".to_owned(),
        description: "Two rooms".to_owned(),
        location: String::new(),
        hourly_rate: None,
        currency: Currency::Eur,
        category: "general".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["hourlyRate"], serde_json::Value::Null);
    assert_eq!(value["currency"], "EUR");
}

// =============================================================
// Session round trip
// =============================================================

#[test]
fn session_round_trips_through_json() {
    let session = Session {
        token: "tok-123".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            role: Role::Employer,
        },
    };
    let json = serde_json::to_string(&session).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back, session);
}
