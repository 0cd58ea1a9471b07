//! Format parsers for configuration files.
//!
//! A parser turns raw file bytes into a nested mapping. Anything that
//! implements [`Parser`] can be handed to the loader, including plain
//! closures of the right shape.

use serde_json::{Map, Value};
use thiserror::Error;

/// Nested configuration mapping produced by parsers and owned by the loader.
pub type Mapping = Map<String, Value>;

/// Error returned when a configuration document cannot be decoded.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level document must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("non-finite number {value} at '{path}' has no representation")]
    NonFinite { path: String, value: String },

    #[error("unrepresentable value: {0}")]
    Unrepresentable(String),

    #[error("{0}")]
    Other(String),
}

impl ParseError {
    /// Build a free-form parse error, for parsers outside this crate.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Decodes raw bytes into a configuration mapping.
pub trait Parser {
    fn parse(&self, raw: &[u8]) -> Result<Mapping, ParseError>;
}

impl<F> Parser for F
where
    F: Fn(&[u8]) -> Result<Mapping, ParseError>,
{
    fn parse(&self, raw: &[u8]) -> Result<Mapping, ParseError> {
        self(raw)
    }
}

/// YAML parser backed by `serde_yaml`.
///
/// Merge keys (`<<: *anchor`) are expanded before conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl Parser for YamlParser {
    fn parse(&self, raw: &[u8]) -> Result<Mapping, ParseError> {
        // An empty document decodes to null, which we treat as an empty mapping
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Mapping::new());
        }
        let mut document: serde_yaml::Value = serde_yaml::from_slice(raw)?;
        document.apply_merge()?;

        // JSON numbers cannot hold .inf/.nan; they would turn into null
        check_finite(&document, &mut Vec::new())?;

        let value = serde_json::to_value(&document)
            .map_err(|err| ParseError::Unrepresentable(err.to_string()))?;
        into_mapping(value)
    }
}

fn check_finite(value: &serde_yaml::Value, path: &mut Vec<String>) -> Result<(), ParseError> {
    match value {
        serde_yaml::Value::Number(number) if number.is_nan() || number.is_infinite() => {
            Err(ParseError::NonFinite {
                path: path.join("."),
                value: number.to_string(),
            })
        }
        serde_yaml::Value::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(index.to_string());
                check_finite(item, path)?;
                path.pop();
            }
            Ok(())
        }
        serde_yaml::Value::Mapping(map) => {
            for (key, item) in map {
                path.push(key_name(key));
                check_finite(item, path)?;
                path.pop();
            }
            Ok(())
        }
        serde_yaml::Value::Tagged(tagged) => check_finite(&tagged.value, path),
        _ => Ok(()),
    }
}

fn key_name(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "?".to_string()),
    }
}

/// JSON parser backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, raw: &[u8]) -> Result<Mapping, ParseError> {
        let value: Value = serde_json::from_slice(raw)?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(ParseError::NotAMapping {
                found: kind_name(&other),
            }),
        }
    }
}

/// Built-in formats, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// Boxed parser for this format.
    pub fn parser(self) -> Box<dyn Parser> {
        match self {
            Format::Yaml => Box::new(YamlParser),
            Format::Json => Box::new(JsonParser),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Yaml => write!(f, "yaml"),
            Format::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{}', expected yaml or json", other)),
        }
    }
}

fn into_mapping(value: Value) -> Result<Mapping, ParseError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(ParseError::NotAMapping {
            found: kind_name(&other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
