use chrono::{NaiveDate, NaiveDateTime};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use validator::ValidateEmail;

use super::{EntitySchema, FieldDef, FieldType, HasSchema, Presence};

/// What kind of constraint an [`Issue`] violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    Type,
    Enum,
    Format,
    Length,
    Json,
    /// Rejected query-string parameter.
    Query,
}

/// A single field-level problem. `loc` is the path to the offending value,
/// starting with where it came from (`body` or `query`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(loc: &[String], kind: IssueKind, msg: impl Into<String>) -> Self {
        Self {
            loc: loc.to_vec(),
            msg: msg.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("validation failed with {} issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

impl ValidationError {
    pub fn single(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Finds the issue reported at `loc`, if any.
    pub fn at(&self, loc: &[&str]) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.loc == loc)
    }
}

impl EntitySchema {
    /// Checks a request body against the table, collecting every issue.
    /// Read-only fields are skipped: whatever the client sends for them is
    /// overwritten on insert.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let mut issues = Vec::new();
        let mut loc = vec!["body".to_string()];
        check_object(self, value, &mut loc, &mut issues);

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

/// Validates `value` against the schema of `T`, then decodes it.
pub fn decode<T>(value: Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + HasSchema,
{
    T::schema().validate(&value)?;
    serde_json::from_value(value).map_err(|e| {
        ValidationError::single(Issue::new(&["body".to_string()], IssueKind::Json, e.to_string()))
    })
}

fn check_object(schema: &EntitySchema, value: &Value, loc: &mut Vec<String>, issues: &mut Vec<Issue>) {
    let Some(map) = value.as_object() else {
        issues.push(Issue::new(loc, IssueKind::Type, "value is not a valid object"));
        return;
    };

    for field in schema.fields {
        if field.presence == Presence::ReadOnly {
            continue;
        }
        loc.push(field.name.to_string());
        match map.get(field.name) {
            None | Some(Value::Null) if field.presence == Presence::Optional => {}
            None => issues.push(Issue::new(loc, IssueKind::Missing, "field required")),
            Some(Value::Null) => {
                issues.push(Issue::new(loc, IssueKind::Type, "none is not an allowed value"))
            }
            Some(value) => check_field(field, value, loc, issues),
        }
        loc.pop();
    }
}

fn check_field(field: &FieldDef, value: &Value, loc: &mut Vec<String>, issues: &mut Vec<Issue>) {
    check_value(&field.ty, value, loc, issues);

    let Some(text) = value.as_str() else {
        return;
    };
    let len = text.chars().count();
    if let Some(min) = field.min_length.filter(|min| len < *min) {
        issues.push(Issue::new(
            loc,
            IssueKind::Length,
            format!("ensure this value has at least {min} characters"),
        ));
    }
    if let Some(max) = field.max_length.filter(|max| len > *max) {
        issues.push(Issue::new(
            loc,
            IssueKind::Length,
            format!("ensure this value has at most {max} characters"),
        ));
    }
}

fn check_value(ty: &FieldType, value: &Value, loc: &mut Vec<String>, issues: &mut Vec<Issue>) {
    match ty {
        FieldType::String | FieldType::Id => {
            expect_str(value, loc, issues);
        }
        FieldType::Email => {
            if let Some(text) = expect_str(value, loc, issues) {
                if !is_deliverable_email(text) {
                    issues.push(Issue::new(loc, IssueKind::Format, "value is not a valid email address"));
                }
            }
        }
        FieldType::Date => {
            if let Some(text) = expect_str(value, loc, issues) {
                if text.parse::<NaiveDate>().is_err() {
                    issues.push(Issue::new(loc, IssueKind::Format, "invalid date format"));
                }
            }
        }
        FieldType::DateTime => {
            if let Some(text) = expect_str(value, loc, issues) {
                if text.parse::<NaiveDateTime>().is_err() {
                    issues.push(Issue::new(loc, IssueKind::Format, "invalid datetime format"));
                }
            }
        }
        FieldType::Number => {
            if !value.is_number() {
                issues.push(Issue::new(loc, IssueKind::Type, "value is not a valid number"));
            }
        }
        FieldType::Integer => {
            if !(value.is_i64() || value.is_u64()) {
                issues.push(Issue::new(loc, IssueKind::Type, "value is not a valid integer"));
            }
        }
        FieldType::Enum(choices) => {
            if let Some(text) = expect_str(value, loc, issues) {
                if !choices.iter().any(|choice| *choice == text) {
                    let permitted: Vec<String> = choices.iter().map(|c| format!("'{c}'")).collect();
                    issues.push(Issue::new(
                        loc,
                        IssueKind::Enum,
                        format!(
                            "value is not a valid enumeration member; permitted: {}",
                            permitted.join(", ")
                        ),
                    ));
                }
            }
        }
        FieldType::Object(schema) => check_object(schema, value, loc, issues),
        FieldType::Array(item) => {
            let Some(items) = value.as_array() else {
                issues.push(Issue::new(loc, IssueKind::Type, "value is not a valid list"));
                return;
            };
            for (index, element) in items.iter().enumerate() {
                loc.push(index.to_string());
                if element.is_null() {
                    issues.push(Issue::new(loc, IssueKind::Type, "none is not an allowed value"));
                } else {
                    check_value(item, element, loc, issues);
                }
                loc.pop();
            }
        }
        FieldType::Map => {
            if !value.is_object() {
                issues.push(Issue::new(loc, IssueKind::Type, "value is not a valid dict"));
            }
        }
    }
}

/// RFC-valid and addressed to a dotted domain, so `user@localhost` is refused.
fn is_deliverable_email(text: &str) -> bool {
    let domain = text.rsplit_once('@').map_or("", |(_, domain)| domain);
    text.validate_email()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn expect_str<'v>(value: &'v Value, loc: &[String], issues: &mut Vec<Issue>) -> Option<&'v str> {
    let text = value.as_str();
    if text.is_none() {
        issues.push(Issue::new(loc, IssueKind::Type, "str type expected"));
    }
    text
}
