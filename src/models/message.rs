/// An email ready to hand to the mail transport.
///
/// Addresses are kept as RFC 5322 strings (`addr@host` or
/// `"Display Name" <addr@host>`) and parsed by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub sender: String,
    pub recipient: String,
    pub subject: String,
    pub body_html: String,
}

/// The pair of messages produced for every accepted registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifications {
    pub admin: OutboundMessage,
    pub applicant: OutboundMessage,
}
