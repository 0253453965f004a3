use serde::Deserialize;
use config::{Config as ConfigLoader, ConfigError, File};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default = "default_server_address")]
    pub server_address: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    // Répertoire des fixtures JSON; sinon copie embarquée dans le binaire
    #[serde(default)]
    pub fixtures_path: Option<String>,
}

impl Config {
    /// Charge la configuration depuis un fichier TOML, avec valeurs par défaut.
    pub fn from_file(file: &str) -> Result<Self, ConfigError> {
        let settings = ConfigLoader::builder()
            .add_source(File::with_name(file).required(false))
            .build()?;
        settings.try_deserialize::<Self>()
    }
}

/// Valeurs par défaut
fn default_server_address() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8550
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "server.log".to_string()
}
