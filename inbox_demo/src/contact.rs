use std::sync::LazyLock;

use inbox_models::contact::ContactSubmission;

pub static ALL_SUBMISSIONS: LazyLock<Vec<&ContactSubmission>> =
    LazyLock::new(|| vec![&ANA, &BEN, &NO_EMAIL]);

pub static ANA: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Ana".into(),
    email: "ana@x.com".into(),
    message: "Hi".into(),
});

pub static BEN: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Ben Example".into(),
    email: "ben.example@example.org".into(),
    message: "Hello!\n\nCould you call me back next week?\nThanks, Ben".into(),
});

/// Email field that is not a valid address.
pub static NO_EMAIL: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Anonymous".into(),
    email: "not an email".into(),
    message: "Guess who".into(),
});
