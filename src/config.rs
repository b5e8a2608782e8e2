// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RecommendationError, Result};
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const DEFAULT_DATASET_LOCATION: &str = "./travel_recommendation_api.json";
pub const DEFAULT_IMAGE_BASE_PATH: &str = "./images/";
pub const DEFAULT_FALLBACK_IMAGE_URL: &str =
    "https://placehold.co/300x200/4F46E5/ffffff?text=Image+Missing";

const ENV_PREFIX: &str = "TRAVEL_RECOMMENDATION";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub source: SourceConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Filesystem path or http(s) URL of the dataset document
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub image_base_path: String,
    pub fallback_image_url: String,
    pub heading: String,
    pub prompt_message: String,
    pub no_results_message: String,
    pub error_title: String,
    pub error_detail: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            image_base_path: DEFAULT_IMAGE_BASE_PATH.to_string(),
            fallback_image_url: DEFAULT_FALLBACK_IMAGE_URL.to_string(),
            heading: "Le Nostre Raccomandazioni".to_string(),
            prompt_message:
                "Per favore, inserisci una parola chiave (es. \"tempio\", \"spiaggia\", \"Australia\")."
                    .to_string(),
            no_results_message: "Nessuna raccomandazione trovata per questa ricerca.".to_string(),
            error_title: "Errore nel caricamento dei dati di viaggio.".to_string(),
            error_detail: Self::error_detail_for(DEFAULT_DATASET_LOCATION),
        }
    }
}

impl DisplayConfig {
    /// Error hint pointing at the dataset location actually in use.
    pub fn error_detail_for(location: &str) -> String {
        format!(
            "Controlla il percorso del file JSON (dovrebbe essere: {}).",
            location
        )
    }
}

impl Config {
    /// Layers the TOML file (when given) and `TRAVEL_RECOMMENDATION_*`
    /// environment variables over the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default_config();
        let mut builder = config::Config::builder()
            .set_default("source.location", defaults.source.location)
            .and_then(|b| b.set_default("display.image_base_path", defaults.display.image_base_path))
            .and_then(|b| {
                b.set_default("display.fallback_image_url", defaults.display.fallback_image_url)
            })
            .and_then(|b| b.set_default("display.heading", defaults.display.heading))
            .and_then(|b| b.set_default("display.prompt_message", defaults.display.prompt_message))
            .and_then(|b| {
                b.set_default("display.no_results_message", defaults.display.no_results_message)
            })
            .and_then(|b| b.set_default("display.error_title", defaults.display.error_title))
            // Left blank so the hint can follow the resolved source.location.
            .and_then(|b| b.set_default("display.error_detail", ""))
            .map_err(|e| RecommendationError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RecommendationError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| RecommendationError::Config(e.to_string()))?;

        if config.display.error_detail.trim().is_empty() {
            config.display.error_detail = DisplayConfig::error_detail_for(&config.source.location);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            source: SourceConfig {
                location: DEFAULT_DATASET_LOCATION.to_string(),
            },
            display: DisplayConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.source.location.trim().is_empty() {
            return Err(RecommendationError::Config(
                "source.location must not be empty".to_string(),
            ));
        }

        if self.display.fallback_image_url.trim().is_empty() {
            return Err(RecommendationError::Config(
                "display.fallback_image_url must not be empty".to_string(),
            ));
        }

        Validator::validate_url(&self.display.fallback_image_url)
            .map_err(|e| RecommendationError::Config(e.to_string()))?;

        // The URL is embedded in a single-quoted script string in the HTML output.
        if self.display.fallback_image_url.contains(['\'', '\\']) {
            return Err(RecommendationError::Config(
                "display.fallback_image_url must not contain quotes or backslashes".to_string(),
            ));
        }

        Ok(())
    }
}
