use portfolio_core::*;
use pretty_assertions::assert_eq;

fn request() -> ContactRequest {
    ContactRequest {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        event_type: Some(EventType::ClubFestival),
        message: "Saturday night, 300 guests".into(),
    }
}

#[test]
fn request_serializes_with_form_field_names() {
    let body = serde_json::to_value(request()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "event-type": "club-festival",
            "message": "Saturday night, 300 guests",
        })
    );

    let mut no_type = request();
    no_type.event_type = None;
    let body = serde_json::to_value(no_type).unwrap();
    assert!(body.get("event-type").is_none());
}

#[test]
fn event_type_round_trips_option_values() {
    for e in EventType::ALL {
        assert_eq!(EventType::from_form_value(e.form_value()), Some(e));
    }
    assert_eq!(EventType::from_form_value(""), None);
}

#[test]
fn precheck_flags_required_fields() {
    let blank = ContactRequest {
        name: "  ".into(),
        email: "not-an-email".into(),
        event_type: None,
        message: String::new(),
    };
    let errors = blank.precheck().unwrap_err();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "message", "name"]);
    assert_eq!(
        errors.display("email", "Email").as_deref(),
        Some("Email should be an email")
    );
    assert_eq!(
        errors.display("message", "Message").as_deref(),
        Some("Message is required")
    );
    assert!(request().precheck().is_ok());
}

#[test]
fn success_reply_is_accepted() {
    let outcome = interpret(200, r#"{"next":"/thanks","ok":true}"#);
    assert_eq!(outcome.unwrap(), SubmissionOutcome::Accepted);
}

#[test]
fn field_errors_are_grouped() {
    let body = r#"{"error":"Validation errors","errors":[
        {"code":"TYPE_EMAIL","field":"email","message":"should be an email"},
        {"code":"REQUIRED_FIELD_EMPTY","field":"message","message":"is required"},
        {"code":"SPAM","message":"looks like spam"}
    ]}"#;
    match interpret(422, body).unwrap() {
        SubmissionOutcome::Rejected(errors) => {
            assert_eq!(errors.messages("email"), ["should be an email".to_string()]);
            assert_eq!(errors.messages("message"), ["is required".to_string()]);
            assert_eq!(
                errors.messages(FieldErrors::FORM_LEVEL),
                ["looks like spam".to_string()]
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn bare_error_becomes_form_level() {
    match interpret(403, r#"{"error":"Form not found"}"#).unwrap() {
        SubmissionOutcome::Rejected(errors) => {
            assert_eq!(errors.messages(""), ["Form not found".to_string()]);
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(matches!(interpret(500, "{}"), Err(FormError::Status(500))));
    assert!(matches!(interpret(502, "<html>"), Err(FormError::Decode(_))));
}

fn interpret(status: u16, body: &str) -> Result<SubmissionOutcome, FormError> {
    portfolio_core::form::interpret_reply(status, body)
}

#[test]
fn form_lifecycle() {
    let mut form = ContactForm::new();
    assert_eq!(form.state(), &FormSubmissionState::Idle);
    assert_eq!(form.submit_label(), "Send Message");

    let body = form.begin(&request()).unwrap();
    assert!(body.contains("\"event-type\":\"club-festival\""));
    assert!(form.is_submitting());
    assert_eq!(form.submit_label(), "Sending...");
    assert!(matches!(form.begin(&request()), Err(FormError::InFlight)));

    let mut errors = FieldErrors::default();
    errors.push("email", "should be an email");
    form.finish(Ok(SubmissionOutcome::Rejected(errors.clone())));
    assert_eq!(form.state(), &FormSubmissionState::Failed(errors));

    // failures are recoverable
    form.begin(&request()).unwrap();
    form.finish(Ok(SubmissionOutcome::Accepted));
    assert_eq!(form.state(), &FormSubmissionState::Succeeded);
    assert!(matches!(form.begin(&request()), Err(FormError::AlreadySent)));
}

#[test]
fn invalid_request_never_reaches_submitting() {
    let mut form = ContactForm::new();
    let mut bad = request();
    bad.message = "   ".into();
    assert!(matches!(form.begin(&bad), Err(FormError::Invalid(_))));
    match form.state() {
        FormSubmissionState::Failed(errors) => {
            assert_eq!(errors.messages("message"), ["is required".to_string()]);
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn transport_failure_is_reported_form_level() {
    let mut form = ContactForm::new();
    form.begin(&request()).unwrap();
    form.finish(Err(FormError::Transport("offline".into())));
    match form.state() {
        FormSubmissionState::Failed(errors) => {
            assert_eq!(errors.messages(""), ["network error: offline".to_string()]);
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[test]
fn form_level_messages_render_without_prefix() {
    let errors = FieldErrors::form_level("network error: offline");
    assert_eq!(
        errors.display(FieldErrors::FORM_LEVEL, "").as_deref(),
        Some("network error: offline")
    );
    let mut both = FieldErrors::form_level("Validation errors");
    both.push(FieldErrors::FORM_LEVEL, "try again");
    assert_eq!(
        both.display(FieldErrors::FORM_LEVEL, "").as_deref(),
        Some("Validation errors, try again")
    );
}
