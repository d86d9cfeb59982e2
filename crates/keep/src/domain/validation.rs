//! Validation Stage
//!
//! Checks client input before anything reaches storage. Every rule is
//! evaluated so a client can fix all problems in one round trip.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{NewNote, NoteDraft};

/// A single field-level problem with a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// (field, predicate, message) - the predicate holds for valid input
struct Rule {
    field: &'static str,
    check: fn(&NoteDraft) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        field: "title",
        check: has_title,
        message: "title is required",
    },
    Rule {
        field: "content",
        check: has_content,
        message: "content is required",
    },
];

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn has_title(draft: &NoteDraft) -> bool {
    is_present(draft.title.as_deref())
}

fn has_content(draft: &NoteDraft) -> bool {
    is_present(draft.content.as_deref())
}

/// Validate a draft, collecting all violations in rule order
pub fn validate(draft: NoteDraft) -> Result<NewNote, Vec<FieldViolation>> {
    let violations: Vec<FieldViolation> = RULES
        .iter()
        .filter(|rule| !(rule.check)(&draft))
        .map(|rule| FieldViolation::new(rule.field, rule.message))
        .collect();

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(NewNote::new(
        draft.title.unwrap_or_default(),
        draft.content.unwrap_or_default(),
    ))
}

/// Parse a note identifier from its textual form
pub fn parse_note_id(raw: &str) -> Result<Uuid, FieldViolation> {
    Uuid::parse_str(raw).map_err(|_| FieldViolation::new("id", "Invalid UUID"))
}
