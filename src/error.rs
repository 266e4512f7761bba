use thiserror::Error;

/// Errors raised while checking a normalized alarm
///
/// Rules are checked in a fixed order and the first violation is reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Threshold must be a positive number")]
    NegativeThreshold,

    #[error("Period must be at least 60 seconds")]
    PeriodTooShort,

    #[error("Evaluation periods and datapoints to alarm must be at least 1")]
    TooFewPeriods,

    #[error("Datapoints to alarm cannot be greater than evaluation periods")]
    DatapointsExceedPeriods,

    #[error("Invalid value for field: {0}")]
    InvalidValue(&'static str),

    #[error("Dimensions must be an array")]
    DimensionsNotArray,

    #[error("Each dimension must have Name and Value properties")]
    MalformedDimension,
}

/// Errors surfaced by the translation entry point
///
/// The cause is already part of the message, so it is not exposed as a
/// `source()` and error-chain printers show it once.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslationError {
    #[error("Translation failed: {0}")]
    Validation(ValidationError),
}

impl From<ValidationError> for TranslationError {
    fn from(err: ValidationError) -> Self {
        TranslationError::Validation(err)
    }
}

/// Errors from the free-text dimension parser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidDimensionsError {
    #[error("Invalid dimensions JSON: {0}")]
    Syntax(String),

    #[error("Invalid dimensions JSON: Dimensions must be an array")]
    NotAnArray,

    #[error("Invalid dimensions JSON: Each dimension must have Name and Value properties")]
    MissingProperties,
}

/// Errors that can occur while reading raw alarm text
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Please enter CloudWatch alarm JSON")]
    Empty,

    #[error("Invalid JSON format: {0}")]
    InvalidJson(String),
}

/// Errors that can occur during configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Invalid configuration value: {0}")]
    ValidationError(String),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}
