use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::mail::transport::{MailError, Mailer};
use crate::models::message::{Notifications, OutboundMessage};

/// Sends composed notifications one after the other, each bounded by a timeout.
pub struct MailDispatcher {
    mailer: Arc<dyn Mailer>,
    timeout: Duration,
}

impl MailDispatcher {
    pub fn new(mailer: Arc<dyn Mailer>, timeout: Duration) -> Self {
        Self { mailer, timeout }
    }

    pub async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        match tokio::time::timeout(self.timeout, self.mailer.send(message)).await {
            Ok(result) => result,
            Err(_) => Err(MailError::Timeout(self.timeout)),
        }
    }

    /// Admin notice first, then the applicant confirmation. The first failure
    /// stops the sequence; nothing already sent is undone.
    pub async fn dispatch(&self, notifications: &Notifications) -> Result<(), MailError> {
        self.send(&notifications.admin).await?;
        debug!(recipient = %notifications.admin.recipient, "admin notice sent");

        self.send(&notifications.applicant).await?;
        info!("registration notifications sent");

        Ok(())
    }
}
