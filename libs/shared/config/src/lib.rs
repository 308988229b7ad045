use std::env;
use tracing::warn;

pub const DEFAULT_APPOINTMENT_MINUTES: i64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub api_timeout_secs: u64,
    pub default_appointment_minutes: i64,
    pub demo_email: String,
    pub demo_password: String,
    pub session_file: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("CLINIC_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_BASE_URL not set, using empty value");
                    String::new()
                }),
            api_key: env::var("CLINIC_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("CLINIC_API_KEY not set, requests will be sent without an API key");
                    String::new()
                }),
            api_timeout_secs: parse_or_default("CLINIC_API_TIMEOUT_SECS", 15),
            default_appointment_minutes: parse_or_default(
                "DEFAULT_APPOINTMENT_MINUTES",
                DEFAULT_APPOINTMENT_MINUTES,
            ),
            demo_email: env::var("DEMO_EMAIL")
                .unwrap_or_else(|_| {
                    warn!("DEMO_EMAIL not set, using default demo account");
                    "demo@clinic.local".to_string()
                }),
            demo_password: env::var("DEMO_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("DEMO_PASSWORD not set, using default demo password");
                    "demo1234".to_string()
                }),
            session_file: env::var("SESSION_FILE")
                .unwrap_or_else(|_| ".clinic-session.json".to_string()),
            port: parse_or_default("PORT", 3000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing CLINIC_API_BASE_URL");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }

    pub fn api_key(&self) -> Option<&str> {
        if self.api_key.is_empty() {
            None
        } else {
            Some(&self.api_key)
        }
    }
}

fn parse_or_default<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
