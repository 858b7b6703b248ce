//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::HubConfig;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration against the source names a resolver knows.
    ///
    /// An empty `known_sources` skips the source checks.
    pub fn validate(
        config: &HubConfig,
        known_sources: &[&str],
    ) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_aliases(config, known_sources, &mut result);
        Self::validate_providers(config, known_sources, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_aliases(config: &HubConfig, known_sources: &[&str], result: &mut ValidationResult) {
        for (name, source) in &config.aliases {
            if name.trim().is_empty() {
                result.add_error(ValidationError::new("aliases", "Alias name cannot be empty"));
            }

            if source.trim().is_empty() {
                result.add_error(ValidationError::new(
                    format!("aliases.{}", name),
                    "Alias source cannot be empty",
                ));
            } else if !known_sources.is_empty() && !known_sources.contains(&source.as_str()) {
                result.add_warning(ValidationWarning::new(
                    format!("aliases.{}", name),
                    format!("Unknown provider source '{}', known: {:?}", source, known_sources),
                ));
            }
        }
    }

    fn validate_providers(
        config: &HubConfig,
        known_sources: &[&str],
        result: &mut ValidationResult,
    ) {
        for name in config.providers.keys() {
            if name.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "providers",
                    "Provider key cannot be empty",
                ));
                continue;
            }

            let aliased = config.aliases.contains_key(name);
            if !aliased && !known_sources.is_empty() && !known_sources.contains(&name.as_str()) {
                result.add_warning(ValidationWarning::new(
                    format!("providers.{}", name),
                    "Provider is neither an alias nor a known provider source",
                ));
            }
        }
    }

    fn validate_logging(config: &HubConfig, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "Log level cannot be empty",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
