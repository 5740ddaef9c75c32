//! In-memory `Mailer` for tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::mail::transport::{MailError, Mailer};
use crate::models::message::OutboundMessage;

pub const REJECTION: &str =
    "535-5.7.8 Username and Password not accepted for inscriptions@henry-tech.net (pass s3cr3t-app-pass)";

#[derive(Debug, Default)]
enum Behavior {
    #[default]
    Deliver,
    FailFrom(usize),
    Hang,
}

/// Records delivered messages; can be told to fail or hang.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    behavior: Behavior,
    attempts: AtomicUsize,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingMailer {
    /// Fails every attempt starting at the zero-based attempt `index`.
    pub fn failing_from(index: usize) -> Self {
        Self {
            behavior: Behavior::FailFrom(index),
            ..Self::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            behavior: Behavior::Hang,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        match self.behavior {
            Behavior::FailFrom(index) if attempt >= index => {
                return Err(MailError::Rejected(REJECTION.to_string()));
            }
            Behavior::Hang => tokio::time::sleep(Duration::from_secs(3600)).await,
            _ => {}
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
