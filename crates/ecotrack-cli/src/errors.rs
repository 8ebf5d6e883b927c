use console::style;
use ecotrack_core::EcotrackError;
use std::fmt;

/// Error with context and suggested fixes
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }

    pub fn display_json(&self) {
        let output = serde_json::json!({
            "status": "error",
            "message": self.message,
            "context": self.context,
            "suggestions": self.suggestions,
        });
        eprintln!("{}", output);
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Translate a domain error into a CLI error with remediation hints
pub fn from_core(error: EcotrackError) -> CliError {
    match error {
        EcotrackError::LocationUnavailable => location_unavailable(),
        EcotrackError::LocationDenied { reason } => CliError::new("Location request was denied")
            .with_context(reason)
            .with_suggestion("Pass a coordinate explicitly: ecotrack aqi --lat 28.61 --lon 77.21"),
        EcotrackError::LocationTimeout { timeout_ms } => {
            CliError::new("Timed out waiting for a position")
                .with_context(format!("No position within {} ms.", timeout_ms))
                .with_suggestion("Raise ECOTRACK_LOCATION_TIMEOUT_MS")
                .with_suggestion("Or pass --lat and --lon")
        }
        EcotrackError::Fetch { reason } => CliError::new("Failed to fetch air quality")
            .with_context(reason)
            .with_suggestion("Check your network connection")
            .with_suggestion("Check aqi_endpoint: ecotrack config")
            .with_help("Run: ecotrack aqi --help"),
        EcotrackError::InvalidAqi { value } => CliError::new("Invalid AQI value")
            .with_context(format!("AQI must be a finite, non-negative number. Got: {}", value))
            .with_help("Run: ecotrack classify --help"),
        EcotrackError::InvalidInput { field, reason } => {
            CliError::new(format!("Invalid value for {}", field))
                .with_context(reason)
                .with_help("Run: ecotrack estimate --help")
        }
        EcotrackError::ConfigMissing { key } => {
            CliError::new(format!("Missing configuration value: {}", key))
                .with_context("Latitude and longitude must be set together.")
                .with_suggestion("Set both ECOTRACK_LATITUDE and ECOTRACK_LONGITUDE")
                .with_suggestion("Or set latitude and longitude in config.toml")
                .with_help("Run: ecotrack config")
        }
        EcotrackError::ConfigInvalid { key, reason } => {
            CliError::new(format!("Invalid configuration: {}", key))
                .with_context(reason)
                .with_help("Run: ecotrack config")
        }
        other => CliError::new(other.to_string()),
    }
}

/// No coordinate was configured or passed
pub fn location_unavailable() -> CliError {
    CliError::new("Location is not available")
        .with_context("No coordinate was given and none is configured.")
        .with_suggestion("Pass a coordinate: ecotrack aqi --lat 28.61 --lon 77.21")
        .with_suggestion("Or set ECOTRACK_LATITUDE and ECOTRACK_LONGITUDE")
        .with_suggestion("Or add latitude and longitude to config.toml")
        .with_help("Run: ecotrack aqi --help")
}

/// Requested city is not in the dataset
pub fn city_not_found(name: &str) -> CliError {
    CliError::new("City not found")
        .with_context(format!("'{}' is not in the dataset.", name))
        .with_suggestion("List available cities: ecotrack cities --all")
        .with_help("Run: ecotrack cities --help")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_errors_carry_suggestions() {
        let error = from_core(EcotrackError::LocationUnavailable);
        assert_eq!(error.message, "Location is not available");
        assert!(!error.suggestions.is_empty());
    }

    #[test]
    fn test_invalid_input_names_field() {
        let error = from_core(EcotrackError::InvalidInput {
            field: "carKmPerYear".to_string(),
            reason: "must not be negative, got -1".to_string(),
        });
        assert_eq!(error.to_string(), "Invalid value for carKmPerYear");
        assert_eq!(error.context.as_deref(), Some("must not be negative, got -1"));
    }

    #[test]
    fn test_other_errors_keep_message() {
        let error = from_core(EcotrackError::Serialization("bad".to_string()));
        assert!(error.message.contains("bad"));
    }
}
