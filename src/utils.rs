use std::env;

use anyhow::Context;

use crate::email::{EmailService, SmtpConfig};

pub fn parse_flag(value: &str) -> bool {
  matches!(value.trim().to_lowercase().as_str(), "true" | "on" | "1")
}

fn non_empty_var(name: &str) -> Option<String> {
  env::var(name).ok().filter(|value| !value.trim().is_empty())
}

pub fn smtp_config_from_env() -> anyhow::Result<SmtpConfig> {
  let defaults = SmtpConfig::default();

  let port = match non_empty_var("MAIL_PORT") {
    Some(port) => port.trim().parse::<u16>().with_context(|| "MAIL_PORT must be a valid port")?,
    None => defaults.port,
  };

  Ok(SmtpConfig {
    host: env::var("MAIL_SERVER").unwrap_or(defaults.host),
    port,
    username: non_empty_var("MAIL_USERNAME"),
    password: non_empty_var("MAIL_PASSWORD"),
    from_email: env::var("MAIL_DEFAULT_SENDER").context("MAIL_DEFAULT_SENDER environment variable must be set.")?,
    use_tls: env::var("MAIL_USE_TLS")
      .map(|value| parse_flag(&value))
      .unwrap_or(defaults.use_tls),
  })
}

pub async fn init_email_service() -> anyhow::Result<EmailService> {
  dotenvy::dotenv().ok();

  let smtp_config = smtp_config_from_env()?;
  let email_service = EmailService::new(smtp_config)?;

  tracing::info!("Email service initialized");
  Ok(email_service)
}
