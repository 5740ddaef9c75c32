use async_trait::async_trait;
use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use thiserror::Error;

use crate::models::message::OutboundMessage;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Mail error, invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Mail error, could not build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("Mail error, SMTP transport failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Mail error, transport rejected the message: {0}")]
    Rejected(String),

    #[error("Mail error, send did not complete within {0:?}")]
    Timeout(Duration),
}

/// Anything able to deliver an `OutboundMessage`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError>;
}

/// SMTP relay authenticated with the service account (implicit TLS).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        username: String,
        password: String,
        timeout: Duration,
    ) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
            .credentials(Credentials::new(username, password))
            .timeout(Some(timeout))
            .build();

        Ok(SmtpMailer { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), MailError> {
        let email = build_message(message)?;
        let response = self.transport.send(email).await?;
        if !response.is_positive() {
            return Err(MailError::Rejected(response.code().to_string()));
        }
        Ok(())
    }
}

fn build_message(message: &OutboundMessage) -> Result<Message, MailError> {
    let email = Message::builder()
        .from(message.sender.parse::<Mailbox>()?)
        .to(message.recipient.parse::<Mailbox>()?)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(message.body_html.clone())?;

    Ok(email)
}
