//! Host JSON documents with a typed view
//!
//! The typed tables only know the fields the patches touch and write them
//! in declaration order. A `JsonDocument` keeps the parsed source next to
//! the typed view and writes changes back into it, so the host gets its own
//! key order back and new entries land at the end of their object.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument<T> {
    source: Value,
    pub data: T,
}

impl<T: Serialize + DeserializeOwned> JsonDocument<T> {
    pub fn parse(json: &str) -> Result<Self> {
        let source: Value = serde_json::from_str(json)?;
        let data = T::deserialize(&source)?;
        Ok(Self { source, data })
    }

    /// Serialize `data`, keeping the source layout
    pub fn to_json(&self) -> Result<String> {
        let mut merged = self.source.clone();
        write_back(&mut merged, serde_json::to_value(&self.data)?);
        Ok(serde_json::to_string(&merged)?)
    }
}

/// Write `patched` into `target`: object keys are updated in place and new
/// keys appended, arrays are updated element by element.
fn write_back(target: &mut Value, patched: Value) {
    match (target, patched) {
        (Value::Object(target), Value::Object(patched)) => {
            for (key, value) in patched {
                if let Some(slot) = target.get_mut(&key) {
                    write_back(slot, value);
                } else {
                    target.insert(key, value);
                }
            }
        }
        (Value::Array(target), Value::Array(patched)) => {
            target.truncate(patched.len());
            for (index, value) in patched.into_iter().enumerate() {
                if index < target.len() {
                    write_back(&mut target[index], value);
                } else {
                    target.push(value);
                }
            }
        }
        (target, patched) => *target = patched,
    }
}
