//! Compose-and-submit command
//!
//! Drives the library's form state machine from the terminal: flags fill
//! fields directly, missing fields are prompted interactively, and the
//! submission status is rendered as a single banner.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};

use mailform::attachment::Attachment;
use mailform::config::MailformConfig;
use mailform::form::{FormEvent, SubmissionController, SubmissionStatus};
use mailform::transport::{EmailTransport, HttpTransport};
use mailform::validate::{is_valid_recipient_list, is_valid_subject};

/// Compose and submit one email batch
#[derive(Debug, Args)]
pub struct SendCommand {
    /// Comma-separated recipient email addresses
    #[arg(long = "to")]
    recipients: Option<String>,

    /// Subject line
    #[arg(long)]
    subject: Option<String>,

    /// Message body (optional)
    #[arg(long)]
    message: Option<String>,

    /// Path to a PDF or DOC/DOCX attachment
    #[arg(long = "attach")]
    attachment: Option<PathBuf>,

    /// Fail on missing fields instead of prompting for them
    #[arg(long)]
    non_interactive: bool,
}

impl SendCommand {
    /// Execute the command
    pub async fn execute(self) -> Result<()> {
        let config = MailformConfig::load()?;
        tracing::debug!(backend = %config.backend_url, "loaded configuration");

        let transport = HttpTransport::new(&config)?;
        let mut controller = SubmissionController::new(transport);

        let interactive = !self.non_interactive;

        let recipients = match self.recipients {
            Some(value) => value,
            None if interactive => prompt_recipients()?,
            None => anyhow::bail!("--to is required with --non-interactive"),
        };
        controller.dispatch(FormEvent::RecipientsChanged(recipients));

        let subject = match self.subject {
            Some(value) => value,
            None if interactive => prompt_subject()?,
            None => anyhow::bail!("--subject is required with --non-interactive"),
        };
        controller.dispatch(FormEvent::SubjectChanged(subject));

        let message = match self.message {
            Some(value) => value,
            None if interactive => Input::<String>::new()
                .with_prompt("Message (optional)")
                .allow_empty(true)
                .interact_text()?,
            None => String::new(),
        };
        controller.dispatch(FormEvent::MessageChanged(message));

        if let Some(path) = self.attachment.as_deref() {
            attach_from_path(&mut controller, path)?;
        } else if interactive {
            prompt_attachment(&mut controller)?;
        }

        println!("{}", style(format!("Server: {}", config.backend_url)).dim());

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Sending...");

        controller.submit().await;
        spinner.finish_and_clear();

        match &controller.state().status {
            SubmissionStatus::Succeeded(message) => {
                println!("{} {message}", style("✓").green().bold());
                Ok(())
            }
            SubmissionStatus::Failed(message) => {
                eprintln!("{} {message}", style("✗").red().bold());
                std::process::exit(1);
            }
            // submit always concludes in a terminal state
            SubmissionStatus::Idle | SubmissionStatus::Sending => Ok(()),
        }
    }
}

/// Prompt for the recipient list, re-asking until it validates
fn prompt_recipients() -> Result<String> {
    println!("{}", style("Enter comma-separated email addresses.").dim());
    let text = Input::<String>::new()
        .with_prompt("Recipients")
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_recipient_list(input) {
                Ok(())
            } else {
                Err("One or more email addresses are invalid.")
            }
        })
        .interact_text()?;
    Ok(text)
}

/// Prompt for the subject, re-asking while it is blank
fn prompt_subject() -> Result<String> {
    let text = Input::<String>::new()
        .with_prompt("Subject")
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_subject(input) {
                Ok(())
            } else {
                Err("Subject cannot be empty.")
            }
        })
        .interact_text()?;
    Ok(text)
}

/// Load the `--attach` file and hand it to the form; a rejected file is a
/// hard error since the operator explicitly asked for it
fn attach_from_path<T: EmailTransport>(
    controller: &mut SubmissionController<T>,
    path: &Path,
) -> Result<()> {
    let candidate = Attachment::from_path(path)
        .with_context(|| format!("failed to read attachment: {}", path.display()))?;
    controller.dispatch(FormEvent::AttachmentSelected(candidate));

    if let Some(reason) = controller.state().attachment_error {
        anyhow::bail!("{reason}");
    }
    echo_selection(controller);
    Ok(())
}

/// Interactive attachment picker with inline rejection feedback and a
/// removal affordance
fn prompt_attachment<T: EmailTransport>(controller: &mut SubmissionController<T>) -> Result<()> {
    loop {
        let wants_file = Confirm::new()
            .with_prompt("Attach a file?")
            .default(false)
            .interact()?;
        if !wants_file {
            return Ok(());
        }

        let path: String = Input::new()
            .with_prompt("Path to PDF or DOC/DOCX")
            .interact_text()?;
        let candidate = match Attachment::from_path(Path::new(&path)) {
            Ok(candidate) => candidate,
            Err(err) => {
                eprintln!("{}", style(format!("Could not read {path}: {err}")).red());
                continue;
            }
        };

        controller.dispatch(FormEvent::AttachmentSelected(candidate));
        if let Some(reason) = controller.state().attachment_error {
            eprintln!("{}", style(reason.to_string()).red());
            continue;
        }

        echo_selection(controller);
        let keep = Confirm::new()
            .with_prompt("Keep this attachment?")
            .default(true)
            .interact()?;
        if keep {
            return Ok(());
        }
        controller.dispatch(FormEvent::AttachmentRemoved);
    }
}

/// Show the held attachment the way the form does: name plus size
fn echo_selection<T: EmailTransport>(controller: &SubmissionController<T>) {
    if let Some(held) = controller.state().attachment.as_ref() {
        println!(
            "{} {} ({} KB)",
            style("Selected:").bold(),
            held.file_name,
            held.size_kib()
        );
    }
}
