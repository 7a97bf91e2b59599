use std::{sync::LazyLock, time::Duration};

use inbox_email_contracts::Email;
use inbox_models::{contact::ContactSubmission, notification::NotificationPosition};

use crate::{ContactFeatureConfig, NotificationConfig};

mod submit;

static CONFIG: LazyLock<ContactFeatureConfig> = LazyLock::new(|| ContactFeatureConfig {
    recipient: "recipient@example.com".parse().unwrap(),
    sender: "sender@example.com".parse().unwrap(),
    subject: "New Contact Form Submission".into(),
    notification: NotificationConfig {
        duration: Duration::from_secs(5),
        closable: true,
        position: NotificationPosition::TopRight,
    },
});

fn expected_email(submission: &ContactSubmission) -> Email {
    Email {
        recipient: "recipient@example.com".parse().unwrap(),
        sender: "sender@example.com".parse().unwrap(),
        subject: "New Contact Form Submission".into(),
        body: format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            submission.name, submission.email, submission.message
        ),
        reply_to: submission.email.parse().ok(),
    }
}
