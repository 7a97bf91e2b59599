use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A transient message reporting the result of a submission to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub status: NotificationStatus,
    /// Time after which the notification is dismissed automatically.
    pub duration: Duration,
    /// Whether the user may dismiss the notification manually.
    pub closable: bool,
    pub position: NotificationPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPosition {
    Top,
    #[default]
    TopRight,
    TopLeft,
    Bottom,
    BottomRight,
    BottomLeft,
}
