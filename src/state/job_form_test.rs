use super::*;

fn filled_draft() -> JobDraft {
    JobDraft {
        title: "Clean apartment".to_owned(),
        description: "Two rooms, supplies provided".to_owned(),
        location: "Bucuresti".to_owned(),
        hourly_rate: "50".to_owned(),
        currency: Currency::Eur,
        category: "general".to_owned(),
    }
}

// =============================================================
// Defaults and reset shape
// =============================================================

#[test]
fn default_draft_has_the_reset_shape() {
    let draft = JobDraft::default();
    assert_eq!(draft.title, "");
    assert_eq!(draft.description, "");
    assert_eq!(draft.location, "");
    assert_eq!(draft.hourly_rate, "");
    assert_eq!(draft.currency, Currency::Eur);
    assert_eq!(draft.category, "general");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn title_and_description_are_required() {
    let mut draft = filled_draft();
    draft.title = "  ".to_owned();
    assert!(draft.validate().is_err());

    let mut draft = filled_draft();
    draft.description.clear();
    assert!(draft.validate().is_err());

    assert!(filled_draft().validate().is_ok());
}

#[test]
fn non_numeric_rate_fails_validation() {
    let mut draft = filled_draft();
    draft.hourly_rate = "fifty".to_owned();
    assert!(draft.validate().is_err());
}

#[test]
fn nan_spelled_out_fails_validation() {
    // "NaN".parse::<f64>() succeeds, so the finite check has to catch it.
    let mut draft = filled_draft();
    draft.hourly_rate = "NaN".to_owned();
    assert!(draft.validate().is_err());

    draft.hourly_rate = "inf".to_owned();
    assert!(draft.validate().is_err());
}

#[test]
fn empty_rate_is_valid() {
    let mut draft = filled_draft();
    draft.hourly_rate = String::new();
    assert!(draft.validate().is_ok());
}

// =============================================================
// Payload coercion
// =============================================================

#[test]
fn empty_rate_maps_to_none_not_zero() {
    let mut draft = filled_draft();
    draft.hourly_rate = String::new();
    assert_eq!(draft.to_payload().hourly_rate, None);
}

#[test]
fn numeric_rate_is_coerced() {
    assert_eq!(filled_draft().to_payload().hourly_rate, Some(50.0));

    let mut draft = filled_draft();
    draft.hourly_rate = " 12.5 ".to_owned();
    assert_eq!(draft.to_payload().hourly_rate, Some(12.5));
}

#[test]
fn payload_trims_text_fields() {
    let mut draft = filled_draft();
    draft.title = "  Clean apartment  ".to_owned();
    let payload = draft.to_payload();
    assert_eq!(payload.title, "Clean apartment");
    assert_eq!(payload.category, "general");
}
