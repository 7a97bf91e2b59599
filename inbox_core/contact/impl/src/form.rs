use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use inbox_core_contact_contracts::{ContactFeatureService, ContactFormBusyError, SubmissionReport};
use inbox_models::contact::{ContactField, ContactForm, ContactSubmission};
use tracing::{debug, warn};

/// A single user's contact form bound to the submission workflow.
///
/// At most one submission cycle runs at a time: while a cycle is in flight,
/// further calls to [`submit`](Self::submit) are rejected with
/// [`ContactFormBusyError`] without touching the form or calling any
/// collaborator. Fields may still be edited during a cycle; the cycle only
/// ever sees the snapshot taken when it started.
#[derive(Debug)]
pub struct ContactFormSession<Contact> {
    contact: Contact,
    form: Mutex<ContactForm>,
    submitting: AtomicBool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormState {
    Idle,
    Submitting,
}

impl<Contact> ContactFormSession<Contact>
where
    Contact: ContactFeatureService,
{
    pub fn new(contact: Contact) -> Self {
        Self {
            contact,
            form: Default::default(),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn update(&self, field: ContactField, value: impl Into<String>) {
        self.form().update(field, value);
    }

    pub fn reset(&self) {
        self.form().reset();
    }

    pub fn snapshot(&self) -> ContactSubmission {
        self.form().snapshot()
    }

    pub fn state(&self) -> ContactFormState {
        if self.submitting.load(Ordering::Acquire) {
            ContactFormState::Submitting
        } else {
            ContactFormState::Idle
        }
    }

    /// Submit the current contents of the form.
    ///
    /// The form is cleared only if the cycle succeeded, so the user can retry
    /// after a failure without retyping.
    pub async fn submit(&self) -> Result<SubmissionReport, ContactFormBusyError> {
        let Some(_guard) = SubmittingGuard::acquire(&self.submitting) else {
            warn!("Rejected contact form submission while another one is in flight");
            return Err(ContactFormBusyError);
        };

        let snapshot = self.snapshot();
        let report = self.contact.submit(snapshot).await;
        debug!(outcome = ?report.outcome, "contact form submission finished");

        if report.outcome.is_success() {
            self.reset();
        }

        Ok(report)
    }

    fn form(&self) -> MutexGuard<'_, ContactForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks the form as submitting for as long as it is alive.
struct SubmittingGuard<'a>(&'a AtomicBool);

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
