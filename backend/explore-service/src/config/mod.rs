use anyhow::{Context, Result};
use explore_layout::{Breakpoints, TileGroupingEngine, DEFAULT_PAIR_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub explore: ExploreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

/// Layout tuning, read from `EXPLORE_*` variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    #[serde(default = "default_pair_threshold")]
    pub pair_threshold: u64,
    #[serde(default = "default_breakpoint_sm")]
    pub breakpoint_sm: u32,
    #[serde(default = "default_breakpoint_lg")]
    pub breakpoint_lg: u32,
    #[serde(default = "default_max_posts")]
    pub max_posts: usize,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            pair_threshold: default_pair_threshold(),
            breakpoint_sm: default_breakpoint_sm(),
            breakpoint_lg: default_breakpoint_lg(),
            max_posts: default_max_posts(),
        }
    }
}

impl ExploreConfig {
    pub fn engine(&self) -> TileGroupingEngine {
        TileGroupingEngine::new(self.pair_threshold)
    }

    pub fn breakpoints(&self) -> Result<Breakpoints> {
        Breakpoints::new(self.breakpoint_sm, self.breakpoint_lg)
            .context("EXPLORE_BREAKPOINT_SM must be below EXPLORE_BREAKPOINT_LG")
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let explore: ExploreConfig = envy::prefixed("EXPLORE_")
            .from_env()
            .context("Invalid EXPLORE_* configuration")?;
        explore.breakpoints()?;

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                host: env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("APP_PORT")
                    .unwrap_or_else(|_| "8090".to_string())
                    .parse()
                    .context("APP_PORT must be a valid u16")?,
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            explore,
        })
    }

    pub fn is_production(&self) -> bool {
        matches!(
            self.app.env.to_ascii_lowercase().as_str(),
            "production" | "staging"
        )
    }
}

fn default_pair_threshold() -> u64 {
    DEFAULT_PAIR_THRESHOLD
}

fn default_breakpoint_sm() -> u32 {
    Breakpoints::DEFAULT_SMALL
}

fn default_breakpoint_lg() -> u32 {
    Breakpoints::DEFAULT_LARGE
}

fn default_max_posts() -> usize {
    500
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "APP_ENV",
        "APP_HOST",
        "APP_PORT",
        "LOG_LEVEL",
        "EXPLORE_PAIR_THRESHOLD",
        "EXPLORE_BREAKPOINT_SM",
        "EXPLORE_BREAKPOINT_LG",
        "EXPLORE_MAX_POSTS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.port, 8090);
        assert_eq!(config.explore.pair_threshold, 10);
        assert_eq!(config.explore.breakpoint_sm, 640);
        assert_eq!(config.explore.breakpoint_lg, 1024);
        assert_eq!(config.explore.max_posts, 500);
        assert!(!config.is_production());
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        clear_env();
        env::set_var("APP_ENV", "production");
        env::set_var("APP_PORT", "9100");
        env::set_var("EXPLORE_PAIR_THRESHOLD", "5");
        env::set_var("EXPLORE_MAX_POSTS", "50");

        let config = Config::from_env().unwrap();
        assert_eq!(config.app.port, 9100);
        assert_eq!(config.explore.pair_threshold, 5);
        assert_eq!(config.explore.max_posts, 50);
        assert_eq!(config.explore.engine().pair_threshold(), 5);
        assert!(config.is_production());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_rejects_invalid_values() {
        clear_env();
        env::set_var("APP_PORT", "not-a-port");
        assert!(Config::from_env().is_err());

        clear_env();
        env::set_var("EXPLORE_PAIR_THRESHOLD", "-3");
        assert!(Config::from_env().is_err());

        clear_env();
        env::set_var("EXPLORE_BREAKPOINT_SM", "1200");
        assert!(Config::from_env().is_err());

        clear_env();
    }
}
