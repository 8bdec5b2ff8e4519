use lettre::transport::smtp::authentication::Credentials;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: Option<String>,
  pub password: Option<String>,
  pub from_email: String,
  pub use_tls: bool,
}

impl SmtpConfig {
  /// Local relays such as MailHog accept plain connections only.
  pub fn is_local_relay(&self) -> bool {
    self.host == "localhost" || self.host == "mailhog"
  }

  pub fn uses_plain_connection(&self) -> bool {
    !self.use_tls || self.is_local_relay()
  }

  /// Login is attempted only when both username and password are configured.
  pub fn credentials(&self) -> Option<Credentials> {
    match (&self.username, &self.password) {
      (Some(username), Some(password)) => Some(Credentials::new(username.clone(), password.clone())),
      _ => None,
    }
  }
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: None,
      password: None,
      from_email: "".to_string(),
      use_tls: true,
    }
  }
}

/// Subject plus both renditions of a templated email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
  pub subject: String,
  pub html_body: String,
  pub text_body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
  pub to: Vec<String>,
  pub content: EmailContent,
}

impl EmailMessage {
  pub fn new(to: Vec<String>, content: EmailContent) -> Self {
    EmailMessage { to, content }
  }
}
