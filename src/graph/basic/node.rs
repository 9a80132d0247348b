//! Default per-vertex payload.
//!
//! Graph algorithms never look inside a node; they only clone and forward it.
//! `GraphNode` is the payload used when callers do not bring their own type:
//! a small attribute record with integer, floating point and string fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// A typed attribute record attached to a vertex.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    ints: BTreeMap<String, i64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    doubles: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    strs: BTreeMap<String, String>,
}

impl GraphNode {
    /// Creates a node with no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style integer attribute.
    pub fn with_int(mut self, key: impl Into<String>, value: i64) -> Self {
        self.set_int(key, value);
        self
    }

    /// Builder-style floating point attribute.
    pub fn with_double(mut self, key: impl Into<String>, value: f64) -> Self {
        self.set_double(key, value);
        self
    }

    /// Builder-style string attribute.
    pub fn with_str(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_str(key, value);
        self
    }

    /// Sets an integer attribute, replacing any previous value.
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.ints.insert(key.into(), value);
    }

    /// Sets a floating point attribute, replacing any previous value.
    pub fn set_double(&mut self, key: impl Into<String>, value: f64) {
        self.doubles.insert(key.into(), value);
    }

    /// Sets a string attribute, replacing any previous value.
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strs.insert(key.into(), value.into());
    }

    /// Reads an integer attribute.
    pub fn int(&self, key: &str) -> Result<i64> {
        self.ints.get(key).copied().ok_or_else(|| missing("int", key))
    }

    /// Reads a floating point attribute.
    pub fn double(&self, key: &str) -> Result<f64> {
        self.doubles
            .get(key)
            .copied()
            .ok_or_else(|| missing("double", key))
    }

    /// Reads a string attribute.
    pub fn str(&self, key: &str) -> Result<&str> {
        self.strs
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| missing("str", key))
    }

    /// Returns `true` if no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.ints.is_empty() && self.doubles.is_empty() && self.strs.is_empty()
    }

    /// A deterministic textual key built from every attribute.
    ///
    /// Attributes are rendered as `name=value` in name order, integers first,
    /// then doubles, then strings. Two nodes with equal attributes always
    /// produce the same key.
    pub fn string_id(&self) -> String {
        let ints = self.ints.iter().map(|(k, v)| format!("{k}={v}"));
        let doubles = self.doubles.iter().map(|(k, v)| format!("{k}={v}"));
        let strs = self.strs.iter().map(|(k, v)| format!("{k}={v}"));
        ints.chain(doubles).chain(strs).collect::<Vec<_>>().join(";")
    }
}

fn missing(kind: &'static str, key: &str) -> GraphError {
    GraphError::AttributeNotFound {
        kind,
        key: key.to_owned(),
    }
}
