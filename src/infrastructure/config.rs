// Configuration - Layered file and environment settings
use crate::domain::color::{builtin_palette, OVERLAID_DEFAULT_COLOR, STACKED_DEFAULT_COLOR};
use crate::domain::filter::RenderMode;
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub graphql: GraphQlSettings,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphQlSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GraphQlSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Colors applied when the department master has none
#[derive(Debug, Deserialize, Clone)]
pub struct PaletteConfig {
    #[serde(default = "default_stacked")]
    pub stacked_default: String,
    #[serde(default = "default_overlaid")]
    pub overlaid_default: String,
    #[serde(default = "builtin_palette")]
    pub departments: HashMap<String, String>,
}

impl PaletteConfig {
    pub fn default_for(&self, mode: RenderMode) -> &str {
        match mode {
            RenderMode::Stacked => &self.stacked_default,
            RenderMode::Overlaid => &self.overlaid_default,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            stacked_default: default_stacked(),
            overlaid_default: default_overlaid(),
            departments: builtin_palette(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_endpoint() -> String {
    "http://localhost:5260/graphql".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_stacked() -> String {
    STACKED_DEFAULT_COLOR.to_string()
}

fn default_overlaid() -> String {
    OVERLAID_DEFAULT_COLOR.to_string()
}

/// Load `config/dashboard.toml` if present, then `DASHBOARD__*` environment overrides
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_any_source() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.graphql.endpoint, "http://localhost:5260/graphql");
        assert_eq!(config.graphql.timeout_secs, 10);
        assert_eq!(config.palette.default_for(RenderMode::Stacked), "#8b5cf6");
        assert_eq!(config.palette.default_for(RenderMode::Overlaid), "#ec4899");
        assert_eq!(
            config.palette.departments.get("内科").map(String::as_str),
            Some("#ef4444")
        );
    }

    #[test]
    fn test_file_overrides() {
        let raw = r##"
            [server]
            port = 9000

            [graphql]
            endpoint = "http://backend:5260/graphql"

            [palette]
            overlaid_default = "#111111"

            [palette.departments]
            "皮膚科" = "#10b981"
        "##;

        let config: AppConfig = toml::from_str(raw).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.socket_addr().unwrap().port(), 9000);
        assert_eq!(config.graphql.endpoint, "http://backend:5260/graphql");
        assert_eq!(config.palette.default_for(RenderMode::Overlaid), "#111111");
        assert_eq!(config.palette.default_for(RenderMode::Stacked), "#8b5cf6");
        assert_eq!(config.palette.departments.len(), 1);
    }

    #[test]
    fn test_config_builder_source() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[graphql]\ntimeout_secs = 3\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let config: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.graphql.timeout_secs, 3);
        assert_eq!(config.server.port, 8080);
    }
}
