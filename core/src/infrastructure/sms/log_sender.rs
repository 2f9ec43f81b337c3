use tracing::{debug, info};

use crate::domain::{common::entities::app_errors::CoreError, otp::ports::SmsSender};

/// Development-grade delivery: the code goes to the log instead of a
/// gateway. Swap in a real gateway adapter behind the same port for
/// production.
#[derive(Debug, Clone, Default)]
pub struct LogSmsSender;

impl SmsSender for LogSmsSender {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<(), CoreError> {
        info!(phone = %phone, "sending password reset code");
        debug!(code = %code, "one-time code issued");

        Ok(())
    }
}
