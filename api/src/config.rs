use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context};

use crate::app::ShipmentPolicy;

#[derive(Clone, Debug)]
pub struct Config {
    /// `sqlite://...` for the embedded engine, `postgres://...` for a server
    pub database_url: String,
    /// Pool size; in-memory SQLite is always clamped to a single connection
    pub database_max_connections: u32,
    /// Echo executed SQL statements to the log
    pub sql_logging: bool,
    pub port: u16,
    /// Reject submissions without a destination instead of randomizing one
    pub require_destination: bool,
    /// Days added to creation time for the delivery estimate (0 disables)
    pub delivery_estimate_days: i64,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config = Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://shipments.db?mode=rwc".to_string()),
            database_max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            sql_logging: parse_flag(&lookup, "SQL_LOG", false)?,
            port: parse_var(&lookup, "PORT", 8080)?,
            require_destination: parse_flag(&lookup, "REQUIRE_DESTINATION", true)?,
            delivery_estimate_days: parse_var(&lookup, "DELIVERY_ESTIMATE_DAYS", 3)?,
            rate_limit_per_second: parse_var(&lookup, "RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_var(&lookup, "RATE_LIMIT_BURST", 20)?,
        };

        if !(0..=365).contains(&config.delivery_estimate_days) {
            return Err(anyhow!("DELIVERY_ESTIMATE_DAYS must be between 0 and 365"));
        }
        if config.rate_limit_per_second == 0 || config.rate_limit_burst == 0 {
            return Err(anyhow!("rate limit settings must be greater than zero"));
        }

        Ok(config)
    }

    /// Default-value policy applied to new shipments
    pub fn shipment_policy(&self) -> ShipmentPolicy {
        ShipmentPolicy {
            require_destination: self.require_destination,
            delivery_estimate_days: (self.delivery_estimate_days > 0)
                .then_some(self.delivery_estimate_days),
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: bool,
) -> anyhow::Result<bool> {
    match lookup(key) {
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(anyhow!("invalid value for {}: {:?}", key, raw)),
        },
        None => Ok(default),
    }
}
