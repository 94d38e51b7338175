use serde::Deserialize;
use serde_json::Value;

use crate::helpers::time::now_rfc3339_millis;

/// One RSVP form post. Every field is optional on the wire; `name` and
/// `attendance` are required by [`RsvpSubmission::has_required_fields`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RsvpSubmission {
    pub timestamp: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub attendance: Option<String>,
    /// number or string, forwarded as sent
    pub guests: Option<Value>,
    pub dietary: Option<String>,
    pub message: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|v| !v.is_empty())
}

fn cell(field: &Option<String>) -> Value {
    field.clone().map(Value::String).unwrap_or(Value::Null)
}

impl RsvpSubmission {
    pub fn has_required_fields(&self) -> bool {
        present(&self.name) && present(&self.attendance)
    }

    /// Spreadsheet row: timestamp, name, email, phone, attendance, guests,
    /// dietary, message. Missing values become `null`.
    pub fn to_row(&self) -> Vec<Value> {
        let timestamp = self
            .timestamp
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(now_rfc3339_millis);

        vec![
            Value::String(timestamp),
            cell(&self.name),
            cell(&self.email),
            cell(&self.phone),
            cell(&self.attendance),
            self.guests.clone().unwrap_or(Value::Null),
            cell(&self.dietary),
            cell(&self.message),
        ]
    }
}
