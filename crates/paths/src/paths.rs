//! Path context for runtime environment detection and per-application paths.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies the runtime environment where the application is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnvironment {
    /// Running via `cargo run` or from a `target/` directory
    Development,
    /// Running as an installed binary
    Production,
}

/// Where an application keeps its configuration, data and logs.
///
/// Both roots can be overridden with `<APP_ID>_CONFIG` and `<APP_ID>_DATA`
/// (upper-cased app id).
#[derive(Debug, Clone)]
pub struct PathContext {
    environment: RuntimeEnvironment,
    config_root: Arc<Path>,
    data_root: Arc<Path>,
    app_id: &'static str,
}

impl PathContext {
    /// Creates a new PathContext with automatic environment detection.
    pub fn new(app_id: &'static str) -> Self {
        let environment = Self::detect_environment();
        let (config_default, data_default) = Self::default_roots(environment, app_id);
        let prefix = app_id.to_uppercase();

        Self {
            environment,
            config_root: env_override(&format!("{prefix}_CONFIG"))
                .unwrap_or(config_default)
                .into(),
            data_root: env_override(&format!("{prefix}_DATA"))
                .unwrap_or(data_default)
                .into(),
            app_id,
        }
    }

    /// Creates a PathContext rooted at one explicit directory (useful for testing).
    pub fn with_base_path(base_path: PathBuf, app_id: &'static str) -> Self {
        Self {
            environment: Self::detect_environment(),
            config_root: base_path.join("config").into(),
            data_root: base_path.join("data").into(),
            app_id,
        }
    }

    /// Detects the runtime environment based on executable location.
    fn detect_environment() -> RuntimeEnvironment {
        if let Ok(exe_path) = std::env::current_exe() {
            if exe_path.components().any(|c| c.as_os_str() == "target") {
                return RuntimeEnvironment::Development;
            }
        }

        if std::env::var("CARGO").is_ok() || std::env::var("CARGO_MANIFEST_DIR").is_ok() {
            return RuntimeEnvironment::Development;
        }

        RuntimeEnvironment::Production
    }

    /// Default (config, data) roots for the environment.
    fn default_roots(environment: RuntimeEnvironment, app_id: &str) -> (PathBuf, PathBuf) {
        match environment {
            RuntimeEnvironment::Development => {
                let base = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(".out")
                    .join(app_id);
                (base.join("config"), base.join("data"))
            }
            RuntimeEnvironment::Production => {
                let local = PathBuf::from(".").join(format!(".{app_id}"));
                let config = dirs::config_dir()
                    .map(|d| d.join(app_id))
                    .unwrap_or_else(|| local.join("config"));
                let data = dirs::data_local_dir()
                    .map(|d| d.join(app_id))
                    .unwrap_or_else(|| local.join("data"));
                (config, data)
            }
        }
    }

    pub fn environment(&self) -> RuntimeEnvironment {
        self.environment
    }

    pub fn app_id(&self) -> &str {
        self.app_id
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_root
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_root
    }

    /// `<config_dir>/<file_name>`
    pub fn config_file(&self, file_name: &str) -> PathBuf {
        self.config_root.join(file_name)
    }

    /// `<data_dir>/logs/`
    pub fn logs_dir(&self) -> PathBuf {
        self.data_root.join("logs")
    }

    /// `<data_dir>/logs/<app_id>.<timestamp>.log`
    pub fn log_file(&self, timestamp: &str) -> PathBuf {
        self.logs_dir()
            .join(format!("{}.{}.log", self.app_id, timestamp))
    }

    /// Returns a log file path with current timestamp.
    pub fn log_file_now(&self) -> PathBuf {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S").to_string();
        self.log_file(&timestamp)
    }

    /// Ensures config, data and log directories exist.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        for dir in [
            self.config_root.to_path_buf(),
            self.data_root.to_path_buf(),
            self.logs_dir(),
        ] {
            if !dir.exists() {
                std::fs::create_dir_all(&dir)?;
            }
        }
        Ok(())
    }
}

fn env_override(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
