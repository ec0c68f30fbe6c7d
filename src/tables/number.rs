//! Number output matching the host's JSON writer
//!
//! The host stores every number as a double and writes integral values
//! without a fraction (`8640`, not `8640.0`). Typed `f64` fields go through
//! these serializers so that untouched values come back as they went in.

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Largest integer a double holds exactly (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// An `f64` written the way the host writes numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostNumber(pub f64);

impl Serialize for HostNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    HostNumber(*value).serialize(serializer)
}

pub fn serialize_option<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    value.map(HostNumber).serialize(serializer)
}

pub fn serialize_map<S: Serializer>(
    map: &BTreeMap<String, f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(map.iter().map(|(key, value)| (key, HostNumber(*value))))
}
