use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgConnectOptions;
use std::{env, net::SocketAddr, str::FromStr};

const DEFAULT_PORT: u16 = 9000;
const DEFAULT_TIME_ZONE: &str = "America/Sao_Paulo";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
    pub time_zone: Tz,
    pub cors_allow_origins: Vec<String>,
    pub scope: PlantScope,
}

/// Connection settings for the inspection database.
///
/// `url` wins when present; otherwise the connection is assembled from the
/// individual parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// Fixed values restricting every query to one plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantScope {
    /// `fabrica` value of inspection records and operators.
    pub site: String,
    /// `planta` value of order metadata.
    pub plant: String,
    pub sector: String,
    pub leader_role: String,
    pub defect_block: String,
    pub defect_status: String,
}

impl Default for PlantScope {
    fn default() -> Self {
        Self {
            site: "Graffeno - Jarinu".into(),
            plant: "Jarinu".into(),
            sector: "Inspeção Final".into(),
            leader_role: "Líder".into(),
            defect_block: "Bloco Blindado".into(),
            defect_status: "Baixa".into(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").ok().filter(|v| !v.trim().is_empty()),
            host: env_or("DB_HOST", "localhost"),
            port: parse_env("DB_PORT", 5432)?,
            user: env_or("DB_USER", "postgres"),
            password: env_or("DB_PSW", ""),
            name: env_or("DB_NAME", "postgres"),
            max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            acquire_timeout_secs: parse_env("DB_ACQUIRE_TIMEOUT_SECS", 30)?,
        };

        let time_zone_name = env_or("APP_TIMEZONE", DEFAULT_TIME_ZONE);
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let defaults = PlantScope::default();
        let scope = PlantScope {
            site: env_or("PLANT_SITE", &defaults.site),
            plant: env_or("PLANT_NAME", &defaults.plant),
            sector: env_or("INSPECTION_SECTOR", &defaults.sector),
            leader_role: env_or("LEADER_ROLE", &defaults.leader_role),
            defect_block: env_or("DEFECT_BLOCK", &defaults.defect_block),
            defect_status: env_or("DEFECT_STATUS", &defaults.defect_status),
        };

        Ok(Config {
            database,
            host: env_or("APP_HOST", "0.0.0.0"),
            port: parse_env("APP_PORT", DEFAULT_PORT)?,
            time_zone,
            cors_allow_origins: parse_list(&env_or("CORS_ALLOW_ORIGINS", "")),
            scope,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

impl DatabaseConfig {
    /// Builds connect options. The plant time zone is applied per connection
    /// by `db::connection::create_pool`, since sqlx sends `TimeZone=UTC` at
    /// startup.
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url).context("Invalid DATABASE_URL")?,
            None => PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name),
        };
        Ok(options)
    }

    /// Connection target for logs, without credentials.
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(url) => match url.rsplit_once('@') {
                Some((_, target)) => format!("postgres://***@{}", target),
                None => url.clone(),
            },
            None => format!("{}:{}/{}", self.host, self.port, self.name),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> anyhow::Result<T> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid {} value: {}", key, raw)),
        _ => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
