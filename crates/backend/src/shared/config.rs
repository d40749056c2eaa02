use chrono::{FixedOffset, NaiveDate};
use once_cell::sync::OnceCell;
use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Seed periods, loaded into the store at startup
    #[serde(default)]
    pub periods: Vec<PeriodSeed>,
    #[serde(default)]
    pub clubs: Vec<ClubSeed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    pub utc_offset_hours: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: -3,
        }
    }
}

impl CalendarConfig {
    pub fn offset(&self) -> anyhow::Result<FixedOffset> {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            anyhow::anyhow!("Invalid utc_offset_hours: {}", self.utc_offset_hours)
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PeriodSeed {
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClubSeed {
    pub number: u32,
    pub name: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[calendar]
utc_offset_hours = -3
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (copied there by build.rs)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    config.calendar.offset()?;
    Ok(config)
}

/// Makes the loaded configuration available to handlers
pub fn set_config(config: Config) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("Config already initialized"))
}

pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.calendar.utc_offset_hours, -3);
        assert!(config.periods.is_empty());
        assert!(config.clubs.is_empty());
    }

    #[test]
    fn test_seeds_are_parsed() {
        let config = parse_config(
            r#"
            [server]
            port = 8080

            [[periods]]
            year = 2025
            start_date = "2025-02-03"
            end_date = "2025-11-28"

            [[clubs]]
            number = 4
            name = "Clubinho Sul"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.utc_offset_hours, -3);
        assert_eq!(config.periods[0].year, 2025);
        assert_eq!(
            config.periods[0].start_date,
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap()
        );
        assert_eq!(config.clubs[0].number, 4);
    }

    #[test]
    fn test_invalid_offset_is_rejected() {
        let result = parse_config(
            r#"
            [server]
            port = 3000

            [calendar]
            utc_offset_hours = 30
            "#,
        );
        assert!(result.is_err());
    }
}
