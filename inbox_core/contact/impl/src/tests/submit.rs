use std::time::Duration;

use inbox_core_contact_contracts::{ContactFeatureService, SubmissionOutcome};
use inbox_demo::contact::{ANA, BEN, NO_EMAIL};
use inbox_email_contracts::{Email, MockEmailService};
use inbox_models::notification::{Notification, NotificationPosition, NotificationStatus};
use inbox_persistence_contracts::contact::MockContactSubmissionRepository;
use pretty_assertions::assert_eq;

use super::{expected_email, CONFIG};
use crate::ContactFeatureServiceImpl;

#[tokio::test]
async fn ok() {
    // Arrange
    let store = MockContactSubmissionRepository::new().with_create(ANA.clone());

    let email = MockEmailService::new().with_send(
        Email {
            recipient: "recipient@example.com".parse().unwrap(),
            sender: "sender@example.com".parse().unwrap(),
            subject: "New Contact Form Submission".into(),
            body: "Name: Ana\nEmail: ana@x.com\nMessage: Hi".into(),
            reply_to: Some("ana@x.com".parse().unwrap()),
        },
        true,
    );

    let sut = ContactFeatureServiceImpl::new(store, email, CONFIG.clone());

    // Act
    let result = sut.submit(ANA.clone()).await;

    // Assert
    assert_eq!(result.outcome, SubmissionOutcome::Success);
    assert_eq!(
        result.notification,
        Notification {
            title: "Message sent.".into(),
            description: "We've received your message and will get back to you soon.".into(),
            status: NotificationStatus::Success,
            duration: Duration::from_secs(5),
            closable: true,
            position: NotificationPosition::TopRight,
        }
    );
}

#[tokio::test]
async fn ok_multiline_message() {
    // Arrange
    let store = MockContactSubmissionRepository::new().with_create(BEN.clone());
    let email = MockEmailService::new().with_send(expected_email(&BEN), true);

    let sut = ContactFeatureServiceImpl::new(store, email, CONFIG.clone());

    // Act
    let result = sut.submit(BEN.clone()).await;

    // Assert
    assert_eq!(result.outcome, SubmissionOutcome::Success);
}

#[tokio::test]
async fn ok_no_reply_to_for_invalid_email() {
    // Arrange
    let store = MockContactSubmissionRepository::new().with_create(NO_EMAIL.clone());

    let expected = expected_email(&NO_EMAIL);
    assert_eq!(expected.reply_to, None);
    let email = MockEmailService::new().with_send(expected, true);

    let sut = ContactFeatureServiceImpl::new(store, email, CONFIG.clone());

    // Act
    let result = sut.submit(NO_EMAIL.clone()).await;

    // Assert
    assert_eq!(result.outcome, SubmissionOutcome::Success);
}

#[tokio::test]
async fn store_failed() {
    // Arrange
    let store = MockContactSubmissionRepository::new()
        .with_create_error(ANA.clone(), "relation \"public.contact-form\" does not exist");

    // no expectations: any call to the email service fails the test
    let email = MockEmailService::new();

    let sut = ContactFeatureServiceImpl::new(store, email, CONFIG.clone());

    // Act
    let result = sut.submit(ANA.clone()).await;

    // Assert
    assert_eq!(result.outcome, SubmissionOutcome::StoreFailed);
    assert_eq!(result.notification.status, NotificationStatus::Error);
    assert_eq!(result.notification.title, "Error.");
    assert_eq!(
        result.notification.description,
        "There was an error sending your message."
    );
    assert!(result.notification.description.contains("message"));
}

#[tokio::test]
async fn email_failed() {
    // Arrange
    let store = MockContactSubmissionRepository::new().with_create(ANA.clone());
    let email =
        MockEmailService::new().with_send_error(expected_email(&ANA), "connection refused");

    let sut = ContactFeatureServiceImpl::new(store, email, CONFIG.clone());

    // Act
    let result = sut.submit(ANA.clone()).await;

    // Assert
    assert_eq!(result.outcome, SubmissionOutcome::EmailFailed);
    assert_eq!(result.notification.status, NotificationStatus::Error);
    assert_eq!(
        result.notification.description,
        "There was an error sending your email."
    );
    assert!(result.notification.description.contains("email"));
}

#[tokio::test]
async fn email_rejected() {
    // Arrange
    let store = MockContactSubmissionRepository::new().with_create(ANA.clone());
    let email = MockEmailService::new().with_send(expected_email(&ANA), false);

    let sut = ContactFeatureServiceImpl::new(store, email, CONFIG.clone());

    // Act
    let result = sut.submit(ANA.clone()).await;

    // Assert
    assert_eq!(result.outcome, SubmissionOutcome::EmailFailed);
    assert_eq!(result.notification.status, NotificationStatus::Error);
}
