// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::crypto::RandomSource;
use crate::models::{GenerationConfig, DEFAULT_LENGTH};

// Configuration for the generator front ends
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub default_include_uppercase: bool,
    pub default_include_numbers: bool,
    pub default_include_symbols: bool,
    pub random_source: RandomSource,

    // Copy notice
    pub copy_notice_duration: Duration,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_length: DEFAULT_LENGTH,
            default_include_uppercase: true,
            default_include_numbers: true,
            default_include_symbols: true,
            random_source: RandomSource::Os,

            // Copy notice
            copy_notice_duration: Duration::from_millis(2000),

            // Web Interface
            web_port: 5000,
            web_address: "127.0.0.1".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and the default is kept.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) => config.default_length = length,
                Err(_) => warn_invalid("DEFAULT_PASSWORD_LENGTH", &val),
            }
        }

        parse_flag(&lookup, "DEFAULT_INCLUDE_UPPERCASE", &mut config.default_include_uppercase);
        parse_flag(&lookup, "DEFAULT_INCLUDE_NUMBERS", &mut config.default_include_numbers);
        parse_flag(&lookup, "DEFAULT_INCLUDE_SYMBOLS", &mut config.default_include_symbols);

        if let Some(val) = lookup("RANDOM_SOURCE") {
            match val.parse() {
                Ok(source) => config.random_source = source,
                Err(e) => log::warn!("{}, using '{}'", e, config.random_source),
            }
        }

        // Copy notice
        if let Some(val) = lookup("COPY_NOTICE_MS") {
            match val.parse::<u64>() {
                Ok(ms) => config.copy_notice_duration = Duration::from_millis(ms),
                Err(_) => warn_invalid("COPY_NOTICE_MS", &val),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => warn_invalid("WEB_PORT", &val),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warn_invalid("LOG_LEVEL", &level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Starting generator state; the length is clamped to the slider bounds.
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig::new(
            self.default_length,
            self.default_include_uppercase,
            self.default_include_numbers,
            self.default_include_symbols,
        )
    }
}

fn parse_flag<F>(lookup: &F, key: &str, target: &mut bool)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(key) {
        match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => *target = true,
            "false" | "0" | "no" | "off" => *target = false,
            _ => warn_invalid(key, &val),
        }
    }
}

fn warn_invalid(key: &str, value: &str) {
    log::warn!("Ignoring invalid value '{}' for {}", value, key);
}
