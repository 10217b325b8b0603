use std::sync::Arc;

use anyhow::Result;

use crate::email::{EmailMessage, Mailer};

pub struct OtpService {
  mailer: Arc<dyn Mailer>,
}

impl OtpService {
  pub fn new(mailer: Arc<dyn Mailer>) -> Self {
    Self { mailer }
  }

  /// Sends the verification code to `email` and returns the delivery
  /// identifier reported by the transport.
  pub async fn send_verification_code(&self, email: &str, otp: &str) -> Result<String> {
    let message = Self::build_verification_email(email, otp);
    let message_id = self.mailer.send(&message).await?;

    Ok(message_id)
  }

  pub fn build_verification_email(to: &str, otp: &str) -> EmailMessage {
    EmailMessage {
      to: to.to_string(),
      subject: "Your verification code".to_string(),
      text_body: format!("Your OTP is {}. It will expire in 5 minutes.", otp),
      html_body: format!("<p>Your OTP is <strong>{}</strong>. It will expire in 5 minutes.</p>", otp),
    }
  }
}
