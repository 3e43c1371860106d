//! Settings Models
//!
//! Configuration for gene resolution and the add-gene flow.

use serde::{Deserialize, Serialize};

/// Upper bound accepted by `validate` for the selection limit.
const MAX_ALLOWED_LIMIT: usize = 1000;

/// Gene expression configuration stored in a JSON file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneExpressionConfig {
    /// Maximum size of the user-defined gene set
    #[serde(default = "default_max_user_defined_genes")]
    pub max_user_defined_genes: usize,
    /// Post bulk-add rejections as sticky warnings
    #[serde(default = "default_bulk_warnings_sticky")]
    pub bulk_warnings_sticky: bool,
    /// Post single-add rejections as sticky warnings
    #[serde(default)]
    pub single_warnings_sticky: bool,
    /// Apply the selection limit to bulk adds as well
    #[serde(default)]
    pub bulk_add_enforces_limit: bool,
}

fn default_max_user_defined_genes() -> usize {
    16
}

fn default_bulk_warnings_sticky() -> bool {
    true
}

impl Default for GeneExpressionConfig {
    fn default() -> Self {
        Self {
            max_user_defined_genes: default_max_user_defined_genes(),
            bulk_warnings_sticky: default_bulk_warnings_sticky(),
            single_warnings_sticky: false,
            bulk_add_enforces_limit: false,
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneExpressionConfigUpdate {
    pub max_user_defined_genes: Option<usize>,
    pub bulk_warnings_sticky: Option<bool>,
    pub single_warnings_sticky: Option<bool>,
    pub bulk_add_enforces_limit: Option<bool>,
}

impl GeneExpressionConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: GeneExpressionConfigUpdate) {
        if let Some(limit) = update.max_user_defined_genes {
            self.max_user_defined_genes = limit;
        }
        if let Some(sticky) = update.bulk_warnings_sticky {
            self.bulk_warnings_sticky = sticky;
        }
        if let Some(sticky) = update.single_warnings_sticky {
            self.single_warnings_sticky = sticky;
        }
        if let Some(enforce) = update.bulk_add_enforces_limit {
            self.bulk_add_enforces_limit = enforce;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_user_defined_genes == 0 {
            return Err("max_user_defined_genes must be at least 1".to_string());
        }
        if self.max_user_defined_genes > MAX_ALLOWED_LIMIT {
            return Err(format!(
                "max_user_defined_genes cannot exceed {}",
                MAX_ALLOWED_LIMIT
            ));
        }
        Ok(())
    }
}
