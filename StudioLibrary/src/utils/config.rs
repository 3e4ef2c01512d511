use std::fs;
use tokio::sync::RwLock;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use crate::utils::logging::{logging_console, LogEntry, LogLevel};

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::new());
}

#[derive(Debug, Deserialize)]
struct ConfigTable {
    #[serde(rename = "Config")]
    config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub http_server_bind_port: u16, //port
    pub bind_retry_duration: u64, //seconds
    pub font_path: String, //path
    pub font_size: f32, //points
    pub border_width: u32, //pixels
    pub border_color: [u8; 3], //RGB
    pub text_color: [u8; 3], //RGB
}

impl Config {
    pub fn new() -> Self {
        //Seriously, the program must be terminated.
        match fs::read_to_string("./studio.toml") {
            Ok(toml_string) => {
                match toml::from_str::<ConfigTable>(&toml_string) {
                    Ok(config_table) => {
                        let config = config_table.config;
                        if !Self::validate(&config) {
                            logging_console(LogEntry::new(LogLevel::Emergency, "Config", "Invalid configuration file", ""));
                            panic!("Invalid configuration file");
                        }
                        config
                    },
                    Err(err) => {
                        logging_console(LogEntry::new(LogLevel::Emergency, "Config", "Unable to parse configuration file", format!("Err: {err}")));
                        panic!("Unable to parse configuration file");
                    },
                }
            },
            Err(err) => {
                logging_console(LogEntry::new(LogLevel::Emergency, "Config", "Configuration file not found", format!("Err: {err}")));
                panic!("Configuration file not found");
            },
        }
    }

    pub async fn now() -> Config {
        CONFIG.read().await.clone()
    }

    pub async fn update(config: Config) {
        *CONFIG.write().await = config
    }

    pub fn validate(config: &Config) -> bool {
        Config::validate_second(config.bind_retry_duration)
            && Config::validate_font_size(config.font_size)
            && Config::validate_border_width(config.border_width)
    }

    fn validate_second(second: u64) -> bool {
        second <= 3600
    }

    fn validate_border_width(width: u32) -> bool {
        width > 0_u32
    }

    fn validate_font_size(size: f32) -> bool {
        size > 0_f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            http_server_bind_port: 8080,
            bind_retry_duration: 5,
            font_path: "font.ttf".to_string(),
            font_size: 24.0,
            border_width: 3,
            border_color: [0, 255, 255],
            text_color: [0, 255, 255],
        }
    }

    #[test]
    fn accepts_valid_configuration() {
        assert!(Config::validate(&base_config()));
    }

    #[test]
    fn rejects_zero_border_width() {
        let mut config = base_config();
        config.border_width = 0;
        assert!(!Config::validate(&config));
    }

    #[test]
    fn rejects_non_positive_font_size() {
        let mut config = base_config();
        config.font_size = 0.0;
        assert!(!Config::validate(&config));
    }

    #[test]
    fn rejects_oversized_retry_duration() {
        let mut config = base_config();
        config.bind_retry_duration = 3601;
        assert!(!Config::validate(&config));
    }

    #[test]
    fn parses_config_table() {
        let toml_string = r#"
            [Config]
            http_server_bind_port = 8080
            bind_retry_duration = 5
            font_path = "font.ttf"
            font_size = 24.0
            border_width = 3
            border_color = [0, 255, 255]
            text_color = [255, 255, 255]
        "#;
        let config_table = toml::from_str::<ConfigTable>(toml_string).unwrap();
        assert_eq!(config_table.config.http_server_bind_port, 8080);
        assert_eq!(config_table.config.border_color, [0, 255, 255]);
        assert!(Config::validate(&config_table.config));
    }
}
