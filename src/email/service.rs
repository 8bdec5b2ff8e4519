use crate::email::{
  templates,
  types::{EmailMessage, SmtpConfig},
};
use anyhow::Result;
use lettre::{
  message::{Mailbox, MultiPart},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub struct EmailService<T = AsyncSmtpTransport<Tokio1Executor>> {
  smtp_config: SmtpConfig,
  transporter: T,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let mut builder = if smtp_config.uses_plain_connection() {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
    }
    .port(smtp_config.port);

    if let Some(creds) = smtp_config.credentials() {
      builder = builder.credentials(creds);
    }

    let transporter = builder.build();

    Ok(EmailService::with_transport(smtp_config, transporter))
  }
}

impl<T> EmailService<T> {
  pub fn with_transport(smtp_config: SmtpConfig, transporter: T) -> Self {
    EmailService {
      smtp_config,
      transporter,
    }
  }

  pub fn smtp_config(&self) -> &SmtpConfig {
    &self.smtp_config
  }
}

impl<T> EmailService<T>
where
  T: AsyncTransport + Sync,
  T::Error: std::error::Error + Send + Sync + 'static,
{
  /// Sends one `multipart/alternative` message addressed to every recipient.
  pub async fn send_email(&self, message: &EmailMessage) -> Result<()> {
    let mut builder = Message::builder()
      .from(self.smtp_config.from_email.parse::<Mailbox>()?)
      .subject(&message.content.subject);

    for recipient in &message.to {
      builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    let email = builder.multipart(MultiPart::alternative_plain_html(
      message.content.text_body.clone(),
      message.content.html_body.clone(),
    ))?;

    self.transporter.send(email).await?;

    Ok(())
  }

  /// Returns `false` when the email could not be sent; the cause is logged.
  pub async fn send_password_reset_otp(&self, email: &str, user_name: &str, otp: &str) -> bool {
    let message = EmailMessage::new(vec![email.to_string()], templates::password_reset_otp(user_name, otp));

    match self.send_email(&message).await {
      Ok(()) => {
        tracing::debug!("Password reset email sent");
        true
      }
      Err(e) => {
        tracing::error!("Failed to send password reset email: {:?}", e);
        false
      }
    }
  }

  /// Returns `false` when the email could not be sent; the cause is logged.
  pub async fn send_welcome_email(&self, email: &str, user_name: &str) -> bool {
    let message = EmailMessage::new(vec![email.to_string()], templates::welcome(user_name));

    match self.send_email(&message).await {
      Ok(()) => {
        tracing::debug!("Welcome email sent");
        true
      }
      Err(e) => {
        tracing::error!("Failed to send welcome email: {:?}", e);
        false
      }
    }
  }
}
