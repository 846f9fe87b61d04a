//! Cookie Config

use clap::Args;

use crate::identity::CookieSettings;

/// Cookie settings.
#[derive(Debug, Args)]
pub struct CookieConfig {
    /// Mark identity cookies `Secure` (enable behind HTTPS in production)
    #[arg(long, env = "SECURE_COOKIES")]
    pub secure: bool,
}

impl CookieConfig {
    /// Request-time cookie settings.
    #[must_use]
    pub fn settings(&self) -> CookieSettings {
        CookieSettings {
            secure: self.secure,
        }
    }
}
