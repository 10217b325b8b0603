use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_name: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 465,
      username: "".to_string(),
      password: "".to_string(),
      from_name: "LivetoTravel".to_string(),
      from_email: "".to_string(),
    }
  }
}

impl SmtpConfig {
  /// Reads the mail account from the environment. Missing credentials do not
  /// abort startup; sends will fail at request time instead.
  pub fn from_env() -> Self {
    use std::env;

    let username = env::var("GMAIL_USER").unwrap_or_default();
    let password = env::var("GMAIL_PASS").unwrap_or_default();

    if username.is_empty() || password.is_empty() {
      tracing::warn!("GMAIL_USER or GMAIL_PASS not set. Emails will fail.");
    }

    SmtpConfig {
      host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
      port: env::var("SMTP_PORT")
        .unwrap_or_else(|_| "465".to_string())
        .parse()
        .unwrap_or(465),
      from_email: username.clone(),
      username,
      password,
      ..SmtpConfig::default()
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: String,
  pub subject: String,
  pub text_body: String,
  pub html_body: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::env;

  fn clear_env() {
    env::remove_var("GMAIL_USER");
    env::remove_var("GMAIL_PASS");
    env::remove_var("SMTP_HOST");
    env::remove_var("SMTP_PORT");
  }

  #[test]
  #[serial]
  fn test_from_env_defaults() {
    clear_env();

    let config = SmtpConfig::from_env();
    assert_eq!(config.host, "smtp.gmail.com");
    assert_eq!(config.port, 465);
    assert_eq!(config.username, "");
    assert_eq!(config.password, "");
    assert_eq!(config.from_email, "");
  }

  #[test]
  #[serial]
  fn test_from_env_account_is_sender_and_login() {
    clear_env();
    env::set_var("GMAIL_USER", "relay@example.com");
    env::set_var("GMAIL_PASS", "app-password");

    let config = SmtpConfig::from_env();
    assert_eq!(config.username, "relay@example.com");
    assert_eq!(config.from_email, "relay@example.com");
    assert_eq!(config.password, "app-password");

    clear_env();
  }

  #[test]
  #[serial]
  fn test_from_env_host_and_port_override() {
    clear_env();
    env::set_var("SMTP_HOST", "mailhog");
    env::set_var("SMTP_PORT", "1025");

    let config = SmtpConfig::from_env();
    assert_eq!(config.host, "mailhog");
    assert_eq!(config.port, 1025);

    clear_env();
  }

  #[test]
  #[serial]
  fn test_from_env_invalid_port_falls_back() {
    clear_env();
    env::set_var("SMTP_PORT", "not-a-port");

    let config = SmtpConfig::from_env();
    assert_eq!(config.port, 465);

    clear_env();
  }
}
