use inbox_core_contact_contracts::{SubmissionOutcome, SubmissionReport};
use inbox_models::{
    contact::{ContactField, ContactSubmission},
    email_address::EmailAddress,
    notification::{Notification, NotificationPosition, NotificationStatus},
};
use serde::{Deserialize, Serialize};

/// Absent fields are read as empty, so that they are reported by
/// [`missing_field`](Self::missing_field).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiContactSubmission {
    /// Full name of the user
    pub name: String,
    /// Email address of the user
    pub email: String,
    /// Content of the message
    pub message: String,
}

impl ApiContactSubmission {
    /// Return the first field that is blank.
    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|&field| self.get(field).trim().is_empty())
    }

    pub fn has_valid_email(&self) -> bool {
        self.email.trim().parse::<EmailAddress>().is_ok()
    }

    fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }
}

/// The email is trimmed like the value of an `<input type="email">`.
impl From<ApiContactSubmission> for ContactSubmission {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name,
            email: value.email.trim().into(),
            message: value.message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiSubmissionReport {
    pub outcome: SubmissionOutcome,
    pub notification: ApiNotification,
}

impl From<SubmissionReport> for ApiSubmissionReport {
    fn from(value: SubmissionReport) -> Self {
        Self {
            outcome: value.outcome,
            notification: value.notification.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiNotification {
    pub title: String,
    pub description: String,
    pub status: NotificationStatus,
    /// Milliseconds until the notification is dismissed
    pub duration: u64,
    pub is_closable: bool,
    pub position: NotificationPosition,
}

impl From<Notification> for ApiNotification {
    fn from(value: Notification) -> Self {
        Self {
            title: value.title,
            description: value.description,
            status: value.status,
            duration: value.duration.as_millis().try_into().unwrap_or(u64::MAX),
            is_closable: value.closable,
            position: value.position,
        }
    }
}
