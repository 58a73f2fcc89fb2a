use std::str::FromStr;

use paths::PathContext;
use ratatui::style::Color;
use serde::Deserialize;
use tracing::{info, warn};

pub const ENV_PREFIX: &str = "WARDEN";

const DEFAULT_TICK_RATE: f64 = 4.0;
const DEFAULT_FRAME_RATE: f64 = 30.0;
const DEFAULT_ERROR_COLOR: &str = "#FFA07A";

const CONFIG_FILES: [(&str, config::FileFormat); 2] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.toml", config::FileFormat::Toml),
];

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Ticks per second.
    pub tick_rate: f64,
    /// Frames per second.
    pub frame_rate: f64,
    /// Colour of the inline field errors, any ratatui colour name or `#rrggbb`.
    pub error_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            frame_rate: DEFAULT_FRAME_RATE,
            error_color: DEFAULT_ERROR_COLOR.to_owned(),
        }
    }
}

impl Config {
    /// Layers, last wins: built-in defaults, `config.json5` / `config.toml` in
    /// the config dir, `WARDEN_*` environment variables.
    pub fn new(paths: &PathContext) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("tick_rate", DEFAULT_TICK_RATE)?
            .set_default("frame_rate", DEFAULT_FRAME_RATE)?
            .set_default("error_color", DEFAULT_ERROR_COLOR)?;

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = paths.config_file(file);
            found_config |= path.exists();
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            info!(
                dir = %paths.config_dir().display(),
                "no configuration file found, using defaults"
            );
        }

        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.tick_rate = positive_rate("tick_rate", cfg.tick_rate, DEFAULT_TICK_RATE);
        cfg.frame_rate = positive_rate("frame_rate", cfg.frame_rate, DEFAULT_FRAME_RATE);
        Ok(cfg)
    }

    pub fn error_color(&self) -> Color {
        Color::from_str(&self.error_color).unwrap_or_else(|_| {
            warn!(value = %self.error_color, "unknown error_color, falling back to light red");
            Color::LightRed
        })
    }
}

/// Rates become timer periods (`1 / rate`), so anything not strictly positive
/// and finite falls back to the default.
fn positive_rate(key: &str, value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        warn!(key, value, default, "rate must be a positive number, using default");
        default
    }
}
