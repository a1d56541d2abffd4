//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use leumas_core::ContentCatalog;
use leumas_core::ports::{ContactRepository, Mailer, NewsletterRepository, RateLimiter, ViewCounter};
use leumas_core::services::{ContactService, MailSettings, NewsletterService, Notifier};
use leumas_infra::{
    AllowAllRateLimiter, InMemoryContactRepository, InMemoryNewsletterRepository, InMemoryViewCounter,
    LogMailer,
};

#[cfg(feature = "postgres")]
use leumas_infra::{
    DatabaseConnections, PostgresContactRepository, PostgresNewsletterRepository, PostgresViewCounter,
};
#[cfg(feature = "rate-limit")]
use leumas_infra::InMemoryRateLimiter;

use crate::config::{AppConfig, MailConfig, RateLimitSettings};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ContentCatalog>,
    pub views: Arc<dyn ViewCounter>,
    pub contact: Arc<ContactService>,
    pub newsletter: Arc<NewsletterService>,
    pub limiters: RateLimiters,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

/// Storage behind the form services and the view counter.
pub struct Repositories {
    pub newsletter: Arc<dyn NewsletterRepository>,
    pub contact: Arc<dyn ContactRepository>,
    pub views: Arc<dyn ViewCounter>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            newsletter: Arc::new(InMemoryNewsletterRepository::new()),
            contact: Arc::new(InMemoryContactRepository::new()),
            views: Arc::new(InMemoryViewCounter::new()),
        }
    }

    #[cfg(feature = "postgres")]
    pub fn postgres(connections: &DatabaseConnections) -> Self {
        Self {
            newsletter: Arc::new(PostgresNewsletterRepository::new(Arc::clone(&connections.main))),
            contact: Arc::new(PostgresContactRepository::new(Arc::clone(&connections.main))),
            views: Arc::new(PostgresViewCounter::new(Arc::clone(&connections.main))),
        }
    }
}

/// One limiter per form scope.
#[derive(Clone)]
pub struct RateLimiters {
    pub contact: Arc<dyn RateLimiter>,
    pub newsletter: Arc<dyn RateLimiter>,
    pub trust_proxy_headers: bool,
    /// Handles kept for periodic cleanup.
    #[cfg(feature = "rate-limit")]
    pub(crate) governed: Vec<Arc<InMemoryRateLimiter>>,
}

impl RateLimiters {
    pub fn allow_all() -> Self {
        Self {
            contact: Arc::new(AllowAllRateLimiter),
            newsletter: Arc::new(AllowAllRateLimiter),
            trust_proxy_headers: false,
            #[cfg(feature = "rate-limit")]
            governed: Vec::new(),
        }
    }

    #[cfg(feature = "rate-limit")]
    pub fn from_settings(settings: &RateLimitSettings) -> Self {
        if !settings.enabled {
            tracing::warn!("Rate limiting disabled");
            return Self::allow_all();
        }

        let contact = Arc::new(InMemoryRateLimiter::new(settings.contact));
        let newsletter = Arc::new(InMemoryRateLimiter::new(settings.newsletter));
        tracing::info!(
            contact = settings.contact.max_requests,
            newsletter = settings.newsletter.max_requests,
            trust_proxy_headers = settings.trust_proxy_headers,
            "Rate limiting enabled"
        );

        Self {
            contact: contact.clone(),
            newsletter: newsletter.clone(),
            trust_proxy_headers: settings.trust_proxy_headers,
            governed: vec![contact, newsletter],
        }
    }

    #[cfg(not(feature = "rate-limit"))]
    pub fn from_settings(_settings: &RateLimitSettings) -> Self {
        tracing::info!("Running without rate-limit feature - all requests allowed");
        Self::allow_all()
    }

    /// Forget clients whose quota has fully replenished.
    pub fn retain_recent(&self) {
        #[cfg(feature = "rate-limit")]
        {
            for limiter in &self.governed {
                limiter.retain_recent();
            }
        }
    }
}

fn build_mailer(config: &MailConfig) -> Arc<dyn Mailer> {
    #[cfg(feature = "smtp")]
    if let Some(smtp) = &config.smtp {
        match leumas_infra::SmtpMailer::new(smtp) {
            Ok(mailer) => {
                tracing::info!(host = %smtp.host, port = smtp.port, "SMTP mailer configured");
                return Arc::new(mailer);
            }
            Err(e) => tracing::error!("Failed to configure SMTP: {}. Logging mail instead.", e),
        }
    }

    tracing::warn!(from = %config.from, "EMAIL_HOST not set. Outbound mail will only be logged.");
    Arc::new(LogMailer)
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        let catalog = leumas_infra::embedded_catalog().map_err(io::Error::other)?;
        tracing::info!(
            blog_posts = catalog.blog_posts(chrono::Utc::now()).len(),
            projects = catalog.projects().len(),
            services = catalog.services().len(),
            skills = catalog.skills().len(),
            "Content catalog loaded"
        );

        #[cfg(feature = "postgres")]
        let (db, repos) = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(connections) => {
                    if config.run_migrations {
                        use migration::MigratorTrait;
                        migration::Migrator::up(&*connections.main, None)
                            .await
                            .map_err(io::Error::other)?;
                        tracing::info!("Database migrations applied");
                    }
                    let repos = Repositories::postgres(&connections);
                    (Some(Arc::new(connections)), repos)
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database: {}. Using in-memory fallback.", e);
                    (None, Repositories::in_memory())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Repositories::in_memory())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repos = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Repositories::in_memory()
        };

        let state = Self::from_parts(
            catalog,
            repos,
            build_mailer(&config.mail),
            config.mail.settings(),
            RateLimiters::from_settings(&config.rate_limit),
        );

        tracing::info!("Application state initialized");

        #[cfg(feature = "postgres")]
        let state = Self { db, ..state };

        Ok(state)
    }

    /// Wire services over already built collaborators.
    pub fn from_parts(
        catalog: ContentCatalog,
        repos: Repositories,
        mailer: Arc<dyn Mailer>,
        mail: MailSettings,
        limiters: RateLimiters,
    ) -> Self {
        let from = mail.from.clone();
        Self {
            catalog: Arc::new(catalog),
            views: repos.views,
            contact: Arc::new(ContactService::new(repos.contact, Notifier::new(mailer.clone()), mail)),
            newsletter: Arc::new(NewsletterService::new(repos.newsletter, Notifier::new(mailer), from)),
            limiters,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}
