//! Email delivery module
//!
//! This module defines the `Mailer` capability used by the relay and its
//! SMTP implementation backed by lettre.

mod service;
mod types;

pub use service::{Mailer, SmtpMailer};
pub use types::{EmailMessage, SmtpConfig};
