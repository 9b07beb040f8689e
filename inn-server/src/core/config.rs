/// SMTP credentials for the outbound mailer
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// From address, e.g. "Guesthouse Yado <stay@example.com>"
    pub from_address: String,
}

/// Server configuration
///
/// # Environment variables
///
/// All values can be overridden via environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/yado | Working directory (database, logs) |
/// | ENVIRONMENT | development | Runtime environment |
/// | SMTP_HOST | localhost | SMTP relay host |
/// | SMTP_PORT | 587 | SMTP relay port |
/// | SMTP_USERNAME | (empty) | SMTP username |
/// | SMTP_PASSWORD | (empty) | SMTP password |
/// | MAIL_FROM | stay@localhost | From address for guest emails |
/// | CHECKOUT_BASE_URL | http://localhost:3000/checkout | Hosted checkout base URL |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database files and logs
    pub work_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Outbound email settings
    pub smtp: SmtpConfig,
    /// Base URL of the hosted payment checkout redirect
    pub checkout_base_url: String,
}

impl Config {
    /// Load configuration from environment variables (with `.env` support).
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/yado".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            smtp: SmtpConfig {
                host: std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".into()),
                port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(587),
                username: std::env::var("SMTP_USERNAME").unwrap_or_default(),
                password: std::env::var("SMTP_PASSWORD").unwrap_or_default(),
                from_address: std::env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "stay@localhost".into()),
            },
            checkout_base_url: std::env::var("CHECKOUT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/checkout".into()),
        }
    }

    /// Is this a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Is this a development deployment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
