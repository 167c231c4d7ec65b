use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::sheet::ScheduleColumns;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) no_rename: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) prefix: Option<String>,
    #[serde(default)]
    pub(crate) session_labels: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) time_format: Option<String>,
    #[serde(default)]
    pub(crate) columns: ScheduleColumns,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/postersort/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("postersort").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/postersort/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("postersort").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.postersort.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".postersort.toml"));
        }

        paths
    }
}
