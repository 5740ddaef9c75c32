use anyhow::{Context, Result, bail};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::mail::constants::DEFAULT_OPERATOR_EMAIL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub static_dir: String,
    pub trust_proxy: bool,
    pub smtp_host: String,
    pub email_user: String,
    pub email_pass: String,
    pub admin_email: String,
    pub mail_timeout: Duration,
    pub rate_limit_max: u32,
    pub rate_limit_window: Duration,
    pub rate_limit_max_clients: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("environment", &self.environment)
            .field("static_dir", &self.static_dir)
            .field("trust_proxy", &self.trust_proxy)
            .field("smtp_host", &self.smtp_host)
            .field("email_user", &self.email_user)
            .field("email_pass", &"<redacted>")
            .field("admin_email", &self.admin_email)
            .field("mail_timeout", &self.mail_timeout)
            .field("rate_limit_max", &self.rate_limit_max)
            .field("rate_limit_window", &self.rate_limit_window)
            .field("rate_limit_max_clients", &self.rate_limit_max_clients)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match get("NODE_ENV").as_deref() {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        let email_user = get("EMAIL_USER").context("EMAIL_USER must be set")?;
        let email_pass = get("EMAIL_PASS").context("EMAIL_PASS must be set")?;

        let rate_limit_max: u32 = parse_or(&get, "RATE_LIMIT_MAX", 5)?;
        if rate_limit_max == 0 {
            bail!("RATE_LIMIT_MAX must be at least 1");
        }
        let rate_limit_max_clients: u64 = parse_or(&get, "RATE_LIMIT_MAX_CLIENTS", 10_000)?;
        if rate_limit_max_clients == 0 {
            bail!("RATE_LIMIT_MAX_CLIENTS must be at least 1");
        }

        Ok(Config {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 3000)?,
            environment,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "public".to_string()),
            trust_proxy: parse_or(&get, "TRUST_PROXY", false)?,
            smtp_host: get("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            email_user,
            email_pass,
            admin_email: get("ADMIN_EMAIL").unwrap_or_else(|| DEFAULT_OPERATOR_EMAIL.to_string()),
            mail_timeout: Duration::from_secs(parse_or(&get, "MAIL_TIMEOUT_SECS", 10)?),
            rate_limit_max,
            rate_limit_window: Duration::from_secs(parse_or(&get, "RATE_LIMIT_WINDOW_SECS", 3600)?),
            rate_limit_max_clients,
        })
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const CREDENTIALS: [(&str, &str); 2] = [
        ("EMAIL_USER", "inscriptions@henry-tech.net"),
        ("EMAIL_PASS", "s3cr3t-app-pass"),
    ];

    #[test]
    fn defaults_apply_when_only_credentials_are_set() {
        let config = config_from(&CREDENTIALS).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.admin_email, DEFAULT_OPERATOR_EMAIL);
        assert_eq!(config.static_dir, "public");
        assert!(!config.trust_proxy);
        assert_eq!(config.mail_timeout, Duration::from_secs(10));
        assert_eq!(config.rate_limit_max, 5);
        assert_eq!(config.rate_limit_window, Duration::from_secs(3600));
        assert_eq!(config.rate_limit_max_clients, 10_000);
    }

    #[test]
    fn overrides_are_read() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.extend([
            ("PORT", "8080"),
            ("NODE_ENV", "production"),
            ("RATE_LIMIT_MAX", "10"),
            ("RATE_LIMIT_MAX_CLIENTS", "250000"),
            ("TRUST_PROXY", "true"),
            ("ADMIN_EMAIL", "operateur@henry-tech.net"),
        ]);
        let config = config_from(&pairs).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.rate_limit_max, 10);
        assert_eq!(config.rate_limit_max_clients, 250_000);
        assert!(config.trust_proxy);
        assert_eq!(config.admin_email, "operateur@henry-tech.net");
    }

    #[test]
    fn any_other_node_env_is_development() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("NODE_ENV", "staging"));
        assert_eq!(config_from(&pairs).unwrap().environment, Environment::Development);
    }

    #[test]
    fn missing_credentials_are_an_error() {
        let err = config_from(&[("EMAIL_USER", "inscriptions@henry-tech.net")]).unwrap_err();
        assert!(err.to_string().contains("EMAIL_PASS"));

        let err = config_from(&[("EMAIL_USER", "  "), ("EMAIL_PASS", "x")]).unwrap_err();
        assert!(err.to_string().contains("EMAIL_USER"));
    }

    #[test]
    fn invalid_numbers_are_an_error() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("PORT", "eighty"));
        assert!(config_from(&pairs).unwrap_err().to_string().contains("PORT"));

        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("RATE_LIMIT_MAX", "0"));
        assert!(config_from(&pairs).is_err());

        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("RATE_LIMIT_MAX_CLIENTS", "0"));
        assert!(config_from(&pairs).unwrap_err().to_string().contains("RATE_LIMIT_MAX_CLIENTS"));
    }

    #[test]
    fn debug_output_hides_the_password() {
        let config = config_from(&CREDENTIALS).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cr3t-app-pass"));
        assert!(rendered.contains("<redacted>"));
    }
}
