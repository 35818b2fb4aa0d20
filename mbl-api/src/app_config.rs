use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Comma-separated chat ids, matching the original deployment's env shape.
    #[serde(default)]
    pub chat_ids: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BookingConfig {
    /// Optional comma-separated allow-list narrowing the destination catalog.
    #[serde(default)]
    pub accepted_keys: String,
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl TelegramConfig {
    pub fn recipients(&self) -> Vec<String> {
        split_csv(&self.chat_ids)
    }
}

impl BookingConfig {
    pub fn allow_list(&self) -> Vec<String> {
        split_csv(&self.accepted_keys)
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `MBL_TELEGRAM__BOT_TOKEN` sets `telegram.bot_token`
            .add_source(config::Environment::with_prefix("MBL").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_fields_are_trimmed_and_filtered() {
        let tg = TelegramConfig {
            bot_token: "t".into(),
            chat_ids: " 1, 2 ,, 3 ".into(),
        };
        assert_eq!(tg.recipients(), vec!["1", "2", "3"]);

        let booking = BookingConfig::default();
        assert!(booking.allow_list().is_empty());
    }
}
