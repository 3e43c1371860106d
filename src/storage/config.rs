//! JSON Configuration Management
//!
//! Handles reading and writing the gene expression configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::{GeneExpressionConfig, GeneExpressionConfigUpdate};
use crate::utils::error::{AppError, AppResult};

/// Configuration service for managing gene expression settings
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: GeneExpressionConfig,
}

impl ConfigService {
    /// Open the config file at `path`, writing defaults if it does not exist
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let config_path = path.into();
        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            if let Some(parent) = config_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let default_config = GeneExpressionConfig::default();
            Self::save_to_file(&config_path, &default_config)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            default_config
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Load configuration from a file
    fn load_from_file(path: &Path) -> AppResult<GeneExpressionConfig> {
        let content = fs::read_to_string(path)?;
        let config: GeneExpressionConfig = serde_json::from_str(&content)?;
        config.validate().map_err(AppError::validation)?;
        Ok(config)
    }

    /// Save configuration to a file with pretty formatting
    fn save_to_file(path: &Path, config: &GeneExpressionConfig) -> AppResult<()> {
        config.validate().map_err(AppError::validation)?;
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &GeneExpressionConfig {
        &self.config
    }

    /// Update the configuration with a partial update.
    ///
    /// The update is validated before anything is written; an invalid
    /// update leaves both memory and disk untouched.
    pub fn update_config(
        &mut self,
        update: GeneExpressionConfigUpdate,
    ) -> AppResult<GeneExpressionConfig> {
        let mut candidate = self.config.clone();
        candidate.apply_update(update);
        Self::save_to_file(&self.config_path, &candidate)?;
        self.config = candidate;
        Ok(self.config.clone())
    }

    /// Reload configuration from disk
    pub fn reload(&mut self) -> AppResult<()> {
        self.config = Self::load_from_file(&self.config_path)?;
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) -> AppResult<()> {
        self.config = GeneExpressionConfig::default();
        Self::save_to_file(&self.config_path, &self.config)
    }
}
