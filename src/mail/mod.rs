pub mod compose;
pub mod constants;
pub mod dispatch;
#[cfg(test)]
pub mod mock;
pub mod transport;

pub use compose::{Contacts, compose};
pub use dispatch::MailDispatcher;
pub use transport::{MailError, Mailer, SmtpMailer};
