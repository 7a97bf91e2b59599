use std::io::{BufRead, Write};

use anyhow::{bail, ensure, Context};
use clap::Args;
use inbox_config::Config;
use inbox_core_contact_contracts::{ContactFeatureService, SubmissionReport};
use inbox_core_contact_impl::form::ContactFormSession;
use inbox_models::contact::ContactField;

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name of the sender
    #[arg(long)]
    name: Option<String>,
    /// Email address of the sender
    #[arg(long)]
    email: Option<String>,
    /// Content of the message
    #[arg(long)]
    message: Option<String>,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let provider = Provider::connect(&config)?;
        let session = ContactFormSession::new(provider.contact_feature());

        fill(
            &session,
            self.values(),
            &mut std::io::stdin().lock(),
            &mut std::io::stderr(),
        )?;

        let report = session.submit().await?;
        print_report(&report);

        ensure!(
            report.outcome.is_success(),
            "Contact form submission failed ({:?})",
            report.outcome
        );

        Ok(())
    }

    fn values(self) -> [(ContactField, Option<String>); 3] {
        [
            (ContactField::Name, self.name),
            (ContactField::Email, self.email),
            (ContactField::Message, self.message),
        ]
    }
}

/// Write the given values into the form, prompting for the missing ones.
///
/// A missing message is read until the end of `input`, all other fields are
/// read from a single line.
pub fn fill<Contact: ContactFeatureService>(
    session: &ContactFormSession<Contact>,
    values: impl IntoIterator<Item = (ContactField, Option<String>)>,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> anyhow::Result<()> {
    for (field, value) in values {
        let value = match value {
            Some(value) => value,
            None => read_field(field, input, prompt)?,
        };
        session.update(field, value);
    }
    Ok(())
}

fn read_field(
    field: ContactField,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
) -> anyhow::Result<String> {
    let mut value = String::new();
    match field {
        ContactField::Message => {
            writeln!(prompt, "{field} (end with EOF):")?;
            input
                .read_to_string(&mut value)
                .context("Failed to read message")?;
            let len = value.trim_end_matches(['\r', '\n']).len();
            value.truncate(len);
        }
        ContactField::Name | ContactField::Email => {
            write!(prompt, "{field}: ")?;
            prompt.flush()?;
            if input
                .read_line(&mut value)
                .with_context(|| format!("Failed to read {field}"))?
                == 0
            {
                bail!("Unexpected end of input while reading {field}");
            }
            let len = value.trim_end_matches(['\r', '\n']).len();
            value.truncate(len);
        }
    }
    Ok(value)
}

fn print_report(report: &SubmissionReport) {
    let notification = &report.notification;
    println!("{} {}", notification.title, notification.description);
}
