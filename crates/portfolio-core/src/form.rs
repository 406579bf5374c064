//! Booking form model and the hosted form backend's reply format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    PrivateEvent,
    Wedding,
    ClubFestival,
    Corporate,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::PrivateEvent,
        EventType::Wedding,
        EventType::ClubFestival,
        EventType::Corporate,
        EventType::Other,
    ];

    /// Value of the `<option>` in the event-type select.
    pub fn form_value(self) -> &'static str {
        match self {
            EventType::PrivateEvent => "private-event",
            EventType::Wedding => "wedding",
            EventType::ClubFestival => "club-festival",
            EventType::Corporate => "corporate",
            EventType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::PrivateEvent => "Private Event",
            EventType::Wedding => "Wedding",
            EventType::ClubFestival => "Club / Festival",
            EventType::Corporate => "Corporate Event",
            EventType::Other => "Other",
        }
    }

    /// Empty string is the "Select event type..." placeholder.
    pub fn from_form_value(value: &str) -> Option<EventType> {
        EventType::ALL.into_iter().find(|e| e.form_value() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "event-type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    pub message: String,
}

impl ContactRequest {
    /// Mirror the form's `required`/`type=email` constraints before a round
    /// trip to the backend.
    pub fn precheck(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push("name", "is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "is required");
        } else if !looks_like_email(email) {
            errors.push("email", "should be an email");
        }
        if self.message.trim().is_empty() {
            errors.push("message", "is required");
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

/// Validation messages grouped by field name. Field-less messages live under
/// the empty key.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub const FORM_LEVEL: &'static str = "";

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn form_level(message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(Self::FORM_LEVEL, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Inline error line under a field, e.g. `"Email should be an email"`.
    /// Form-level lines take an empty prefix.
    pub fn display(&self, field: &str, prefix: &str) -> Option<String> {
        let msgs = self.messages(field);
        if msgs.is_empty() {
            return None;
        }
        Some(
            msgs.iter()
                .map(|m| {
                    if prefix.is_empty() {
                        m.clone()
                    } else {
                        format!("{} {}", prefix, m)
                    }
                })
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormSubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FieldErrors),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected(FieldErrors),
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form was already sent")]
    AlreadySent,
    #[error("form has invalid fields")]
    Invalid(FieldErrors),
    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("could not read backend reply: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("backend replied with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
}

#[derive(Deserialize)]
struct BackendReply {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Vec<BackendFieldError>,
}

#[derive(Deserialize)]
struct BackendFieldError {
    #[serde(default)]
    field: Option<String>,
    message: String,
}

/// Classify a backend reply by HTTP status and JSON body.
pub fn interpret_reply(status: u16, body: &str) -> Result<SubmissionOutcome, FormError> {
    if (200..300).contains(&status) {
        return Ok(SubmissionOutcome::Accepted);
    }
    let reply: BackendReply = serde_json::from_str(body).map_err(FormError::Decode)?;
    let mut errors = FieldErrors::default();
    for e in reply.errors {
        errors.push(e.field.as_deref().unwrap_or(FieldErrors::FORM_LEVEL), e.message);
    }
    if errors.is_empty() {
        match reply.error {
            Some(msg) => errors.push(FieldErrors::FORM_LEVEL, msg),
            None => return Err(FormError::Status(status)),
        }
    }
    Ok(SubmissionOutcome::Rejected(errors))
}

/// Submission lifecycle for the booking form. Failures are recoverable: a
/// failed form accepts a new submission.
#[derive(Debug, Default)]
pub struct ContactForm {
    state: FormSubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormSubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormSubmissionState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Start a submission and return the JSON body to send.
    pub fn begin(&mut self, request: &ContactRequest) -> Result<String, FormError> {
        match self.state {
            FormSubmissionState::Submitting => return Err(FormError::InFlight),
            FormSubmissionState::Succeeded => return Err(FormError::AlreadySent),
            _ => {}
        }
        if let Err(fields) = request.precheck() {
            self.state = FormSubmissionState::Failed(fields.clone());
            return Err(FormError::Invalid(fields));
        }
        let body = serde_json::to_string(request).map_err(FormError::Encode)?;
        self.state = FormSubmissionState::Submitting;
        Ok(body)
    }

    pub fn finish(&mut self, result: Result<SubmissionOutcome, FormError>) -> &FormSubmissionState {
        self.state = match result {
            Ok(SubmissionOutcome::Accepted) => FormSubmissionState::Succeeded,
            Ok(SubmissionOutcome::Rejected(fields)) => FormSubmissionState::Failed(fields),
            Err(e) => {
                log::warn!("[form] submission failed: {}", e);
                FormSubmissionState::Failed(FieldErrors::form_level(e.to_string()))
            }
        };
        &self.state
    }
}
