//! Contact entity - a contact form submission

use chrono::{DateTime, Utc};

/// Contact form submission. No lifecycle beyond creation and admin deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Values for creating a contact submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}
