use std::sync::Arc;

use crate::config::Config;
use crate::mail::{Contacts, MailDispatcher, Mailer};
use crate::rate_limit::RateLimiter;

/// Shared by every worker; built once before the server starts.
pub struct AppState {
    pub limiter: RateLimiter,
    pub dispatcher: MailDispatcher,
    pub contacts: Contacts,
    pub trust_proxy: bool,
}

impl AppState {
    pub fn new(config: &Config, mailer: Arc<dyn Mailer>) -> Self {
        AppState {
            limiter: RateLimiter::new(
                config.rate_limit_max,
                config.rate_limit_window,
                config.rate_limit_max_clients,
            ),
            dispatcher: MailDispatcher::new(mailer, config.mail_timeout),
            contacts: Contacts {
                account: config.email_user.clone(),
                operator: config.admin_email.clone(),
            },
            trust_proxy: config.trust_proxy,
        }
    }
}
