//! Application configuration loaded from environment variables.

use std::env;

use leumas_core::services::MailSettings;
use leumas_infra::RateLimitConfig;

#[cfg(feature = "postgres")]
use leumas_infra::DatabaseConfig;
#[cfg(feature = "smtp")]
use leumas_infra::{SmtpConfig, SmtpSecurity};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
    pub mail: MailConfig,
    pub rate_limit: RateLimitSettings,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    /// `None` logs outbound mail instead of sending it.
    #[cfg(feature = "smtp")]
    pub smtp: Option<SmtpConfig>,
    pub from: String,
    /// Where contact form notifications go.
    pub recipient: String,
}

impl MailConfig {
    pub fn settings(&self) -> MailSettings {
        MailSettings {
            from: self.from.clone(),
            operator: self.recipient.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub enabled: bool,
    pub contact: RateLimitConfig,
    pub newsletter: RateLimitConfig,
    /// Identify clients by `Forwarded` / `X-Forwarded-For`. Enable only
    /// behind a reverse proxy that sets them.
    pub trust_proxy_headers: bool,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            contact: RateLimitConfig::per_minute(5),
            newsletter: RateLimitConfig::per_minute(10),
            trust_proxy_headers: false,
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name).ok().and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"))
        .unwrap_or(default)
}

fn rate_or(name: &str, default: RateLimitConfig) -> RateLimitConfig {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(variable = name, error = %e, "Ignoring invalid rate limit");
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parsed_or("DB_MAX_CONNECTIONS", 20),
                min_connections: parsed_or("DB_MIN_CONNECTIONS", 2),
            });

        let user = env::var("EMAIL_HOST_USER").ok().filter(|u| !u.is_empty());

        #[cfg(feature = "smtp")]
        let smtp = env::var("EMAIL_HOST")
            .ok()
            .filter(|host| !host.trim().is_empty())
            .map(|host| {
                let port = parsed_or("EMAIL_PORT", 587);
                SmtpConfig {
                    host,
                    port,
                    username: user.clone(),
                    password: env::var("EMAIL_HOST_PASSWORD").ok(),
                    security: SmtpSecurity::for_port(port),
                }
            });

        let from = env::var("DEFAULT_FROM_EMAIL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| user.clone())
            .unwrap_or_else(|| "webmaster@localhost".to_string());

        let defaults = RateLimitSettings::default();

        Self {
            host: var_or("HOST", "127.0.0.1"),
            port: parsed_or("PORT", 8080),
            #[cfg(feature = "postgres")]
            database,
            run_migrations: flag("RUN_MIGRATIONS", true),
            mail: MailConfig {
                #[cfg(feature = "smtp")]
                smtp,
                recipient: env::var("RECIPIENT_ADDRESS")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| from.clone()),
                from,
            },
            rate_limit: RateLimitSettings {
                enabled: flag("RATE_LIMIT_ENABLED", defaults.enabled),
                contact: rate_or("CONTACT_RATE_LIMIT", defaults.contact),
                newsletter: rate_or("NEWSLETTER_RATE_LIMIT", defaults.newsletter),
                trust_proxy_headers: flag("TRUST_PROXY_HEADERS", defaults.trust_proxy_headers),
            },
        }
    }
}
