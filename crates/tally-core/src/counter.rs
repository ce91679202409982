//! The counter model.
//!
//! A counter is a named integer persisted in the external store. This type
//! is a thin view over one store key, never a cache: every read and write
//! round-trips to the store, and the store remains the source of truth.
//!
//! On the wire the value field is named `counter`, matching the public
//! JSON contract: `{"name": "hits", "counter": 3}`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Unique name; doubles as the store key.
    pub name: String,
    /// Current integer value.
    #[serde(rename = "counter")]
    pub value: i64,
}

impl Counter {
    /// A freshly created counter starts at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 0,
        }
    }

    pub fn with_value(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn new_counter_starts_at_zero() {
        let counter = Counter::new("hits");
        assert_eq!(counter.name, "hits");
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn value_serializes_as_counter_field() {
        let json = serde_json::to_value(Counter::with_value("foo", 3)).expect("serialize");
        assert_eq!(json, serde_json::json!({"name": "foo", "counter": 3}));
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let counter: Counter =
            serde_json::from_str(r#"{"name":"foo","counter":7}"#).expect("deserialize");
        assert_eq!(counter, Counter::with_value("foo", 7));
    }
}
