use crate::email::types::{EmailMessage, SmtpConfig};
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, MultiPart, SinglePart},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

/// Opaque send capability: delivers one message and returns its delivery
/// identifier.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<String>;
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }

  fn next_message_id(&self) -> String {
    let domain = self.smtp_config.from_email.split('@').nth(1).unwrap_or("localhost");

    format!("<{}@{}>", Uuid::new_v4(), domain)
  }

  fn build_message(&self, message: &EmailMessage, message_id: &str) -> Result<Message> {
    let from = format!("{} <{}>", self.smtp_config.from_name, self.smtp_config.from_email);

    let email = Message::builder()
      .from(from.parse()?)
      .to(message.to.parse()?)
      .subject(&message.subject)
      .message_id(Some(message_id.to_string()))
      .multipart(
        MultiPart::alternative()
          .singlepart(
            SinglePart::builder()
              .header(ContentType::TEXT_PLAIN)
              .body(message.text_body.clone()),
          )
          .singlepart(
            SinglePart::builder()
              .header(ContentType::TEXT_HTML)
              .body(message.html_body.clone()),
          ),
      )?;

    Ok(email)
  }
}

#[async_trait]
impl Mailer for SmtpMailer {
  async fn send(&self, message: &EmailMessage) -> Result<String> {
    let message_id = self.next_message_id();
    let email = self.build_message(message, &message_id)?;

    self.transporter.send(email).await?;

    Ok(message_id)
  }
}
