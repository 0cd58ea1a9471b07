//! Deep merge functionality for layered configurations.
//!
//! Nested mappings present on both sides are merged key by key. Everything
//! else (sequences, strings, numbers, booleans) is resolved by [`Precedence`]:
//! the winning side replaces the other entirely. Arrays are never concatenated.

use serde_json::{Map, Value};

/// Which side wins when both layers define the same non-mapping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// Values already in the aggregate are kept; later sources only fill
    /// keys that are missing or null.
    #[default]
    FirstWins,
    /// Later sources override earlier ones. A null in the later source
    /// leaves the earlier value in place.
    LastWins,
}

impl std::fmt::Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precedence::FirstWins => write!(f, "first-wins"),
            Precedence::LastWins => write!(f, "last-wins"),
        }
    }
}

/// Deep merge `incoming` into `current` under the given precedence.
///
/// # Example
/// ```
/// use serde_json::json;
/// use multiconf::config::{deep_merge, Precedence};
///
/// let current = json!({ "db": { "host": "h1", "port": 1 } });
/// let incoming = json!({ "db": { "port": 2, "user": "admin" } });
///
/// let merged = deep_merge(current.clone(), incoming.clone(), Precedence::FirstWins);
/// assert_eq!(merged, json!({ "db": { "host": "h1", "port": 1, "user": "admin" } }));
///
/// let merged = deep_merge(current, incoming, Precedence::LastWins);
/// assert_eq!(merged, json!({ "db": { "host": "h1", "port": 2, "user": "admin" } }));
/// ```
pub fn deep_merge(current: Value, incoming: Value, precedence: Precedence) -> Value {
    match (current, incoming) {
        // Both are objects: merge recursively
        (Value::Object(mut current_map), Value::Object(incoming_map)) => {
            merge_into(&mut current_map, incoming_map, precedence);
            Value::Object(current_map)
        }
        // Null never shadows a real value, whichever side it is on
        (Value::Null, incoming) => incoming,
        (current, Value::Null) => current,
        (current, incoming) => match precedence {
            Precedence::FirstWins => current,
            Precedence::LastWins => incoming,
        },
    }
}

/// Merge every key of `incoming` into the `aggregate` mapping in place.
pub fn merge_into(aggregate: &mut Map<String, Value>, incoming: Map<String, Value>, precedence: Precedence) {
    for (key, incoming_value) in incoming {
        let merged_value = match aggregate.remove(&key) {
            Some(current_value) => deep_merge(current_value, incoming_value, precedence),
            None => incoming_value,
        };
        aggregate.insert(key, merged_value);
    }
}
