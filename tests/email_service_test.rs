use lettre::transport::stub::AsyncStubTransport;
use rifleaxis_mailer::email::{templates, EmailService, SmtpConfig};

fn smtp_config() -> SmtpConfig {
  SmtpConfig {
    from_email: "noreply@rifleaxis.com".to_string(),
    ..SmtpConfig::default()
  }
}

#[tokio::test]
async fn password_reset_otp_returns_true_when_transport_succeeds() {
  let email_service = EmailService::with_transport(smtp_config(), AsyncStubTransport::new_ok());

  assert!(
    email_service
      .send_password_reset_otp("shooter@example.com", "Alex Shooter", "9031")
      .await
  );
}

#[tokio::test]
async fn welcome_email_returns_true_when_transport_succeeds() {
  let email_service = EmailService::with_transport(smtp_config(), AsyncStubTransport::new_ok());

  assert!(
    email_service
      .send_welcome_email("shooter@example.com", "Alex Shooter")
      .await
  );
}

#[tokio::test]
async fn both_operations_return_false_when_transport_fails() {
  let email_service = EmailService::with_transport(smtp_config(), AsyncStubTransport::new_error());

  assert!(
    !email_service
      .send_password_reset_otp("shooter@example.com", "Alex Shooter", "9031")
      .await
  );
  assert!(
    !email_service
      .send_welcome_email("shooter@example.com", "Alex Shooter")
      .await
  );
}

#[test]
fn rendered_bodies_contain_name_and_code_verbatim() {
  let reset = templates::password_reset_otp("Alex Shooter", "9031");
  assert!(reset.html_body.contains("Alex Shooter"));
  assert!(reset.html_body.contains("9031"));
  assert!(reset.text_body.contains("Alex Shooter"));
  assert!(reset.text_body.contains("9031"));

  let welcome = templates::welcome("Alex Shooter");
  assert!(welcome.html_body.contains("Alex Shooter"));
  assert!(welcome.text_body.contains("Alex Shooter"));
}
