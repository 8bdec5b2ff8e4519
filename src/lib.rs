pub mod email;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use email::EmailService;
