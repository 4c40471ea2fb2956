//! Daily digest email
//!
//! Renders collected postings into a plain-text message and hands it to a
//! [`Mailer`].

mod digest;
mod error;
mod mailer;

pub use digest::{
    compose, render_body, render_failure_note, subject_for, OutgoingMail, DIGEST_HEADER,
    NO_POSTINGS_MESSAGE,
};
pub use error::MailError;
pub use mailer::{Mailer, SmtpMailer, SmtpSettings, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
