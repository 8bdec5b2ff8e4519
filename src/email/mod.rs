//! Transactional email module
//!
//! Renders the password reset and welcome emails and sends them through
//! lettre, a popular email library for Rust.

mod service;
pub mod templates;
mod types;

pub use service::EmailService;
pub use types::{EmailContent, EmailMessage, SmtpConfig};
