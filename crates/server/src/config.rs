use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub records_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            records_path: "./data/records.json".into(),
        }
    }
}

/// Defaults, then an optional `server.toml` next to the binary, then
/// environment overrides. The `APP__*` aliases win over the short names.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Ok(v) = std::env::var("RECORDS_PATH") {
        settings.records_path = v;
    }
    if let Ok(v) = std::env::var("APP__RECORDS_PATH") {
        settings.records_path = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.server_bind = v.clone();
        }
        if let Some(v) = file_cfg.get("records_path") {
            settings.records_path = v.clone();
        }
    }
}
