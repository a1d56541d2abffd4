//! Outbound mail implementations.

mod log;
mod recording;
#[cfg(feature = "smtp")]
mod smtp;

pub use log::LogMailer;
pub use recording::RecordingMailer;
#[cfg(feature = "smtp")]
pub use smtp::{SmtpConfig, SmtpMailer, SmtpSecurity};
