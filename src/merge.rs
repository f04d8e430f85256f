//! Null-fill deep merge
//!
//! Fills a target value tree from one or more default sources:
//! - Absent or null target keys: take the source value whole
//! - Objects on both sides: fill recursively by key
//! - Anything else (populated scalars, arrays): target wins

use serde_json::{Map, Value};

/// One source, or many applied in order.
#[derive(Debug, Clone, Copy)]
pub enum Sources<'a> {
    One(&'a Value),
    Many(&'a [Value]),
}

impl<'a> From<&'a Value> for Sources<'a> {
    fn from(value: &'a Value) -> Self {
        Sources::One(value)
    }
}

impl<'a> From<&'a [Value]> for Sources<'a> {
    fn from(values: &'a [Value]) -> Self {
        Sources::Many(values)
    }
}

impl<'a> From<&'a Vec<Value>> for Sources<'a> {
    fn from(values: &'a Vec<Value>) -> Self {
        Sources::Many(values.as_slice())
    }
}

/// Stateless entry point mirroring `defaultsDeep(object, sources)`.
pub struct DeepDefaultsMerger;

impl DeepDefaultsMerger {
    /// Fill `target` from `sources` and hand it back.
    pub fn merge<'t, 's>(target: &'t mut Value, sources: impl Into<Sources<'s>>) -> &'t mut Value {
        match sources.into() {
            Sources::One(source) => defaults_deep(target, source),
            Sources::Many(sources) => defaults_deep_all(target, sources),
        }
    }
}

/// Null-fill `target` from a single source.
///
/// Merge semantics:
/// - Target key absent or null: replaced by a clone of the source value
/// - Both objects: merged recursively
/// - Target populated (scalar or array): left unchanged
/// - Source null: only lands where the target key was absent
///
/// At the root, a null target only takes an object or array source, and
/// mismatched kinds (object vs array, scalars) leave the target unchanged.
pub fn defaults_deep<'t>(target: &'t mut Value, source: &Value) -> &'t mut Value {
    if target.is_null() {
        if source.is_object() || source.is_array() {
            *target = source.clone();
        }
        return target;
    }

    match (&mut *target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            fill_object(target_map, source_map);
        }
        (Value::Array(target_items), Value::Array(source_items)) => {
            fill_array(target_items, source_items);
        }
        _ => {}
    }
    target
}

/// Null-fill `target` from several sources; earlier sources win.
pub fn defaults_deep_all<'t, 'a, I>(target: &'t mut Value, sources: I) -> &'t mut Value
where
    I: IntoIterator<Item = &'a Value>,
{
    for source in sources {
        defaults_deep(target, source);
    }
    target
}

/// Dynamic form: an array of sources is spread, anything else is one source.
pub fn defaults_deep_value<'t>(target: &'t mut Value, sources: &Value) -> &'t mut Value {
    match sources {
        Value::Array(many) => defaults_deep_all(target, many),
        one => defaults_deep(target, one),
    }
}

fn fill_object(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, source_value) in source {
        match target.get_mut(key) {
            Some(existing) => fill_slot(existing, source_value),
            None => {
                target.insert(key.clone(), source_value.clone());
            }
        }
    }
}

fn fill_array(target: &mut Vec<Value>, source: &[Value]) {
    for (i, source_value) in source.iter().enumerate() {
        match target.get_mut(i) {
            Some(existing) => fill_slot(existing, source_value),
            None => target.push(source_value.clone()),
        }
    }
}

// Per-key rule. Nested arrays are never merged into.
fn fill_slot(existing: &mut Value, source_value: &Value) {
    if existing.is_null() {
        *existing = source_value.clone();
    } else if let (Value::Object(target_map), Value::Object(source_map)) = (existing, source_value) {
        fill_object(target_map, source_map);
    }
}
