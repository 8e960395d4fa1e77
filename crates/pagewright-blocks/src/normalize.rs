//! Legacy Block Normalization
//!
//! Page saves have drifted across schema versions: some records are flat
//! canonical blocks, others are `{type, order, data}` envelopes, and some
//! envelopes wrap further envelopes whose outer layers were saved empty.
//! [`normalize`] recovers one canonical record from any of these shapes.
//!
//! Resolution order:
//!
//! 1. Canonical record (`type` and `id`, no `data`): returned as is.
//! 2. Envelope (`type`, `order`, object `data`): the deepest nested node with
//!    real content wins; if no layer has content, the shallowest payload is
//!    used with the envelope's `id`/`type` patched in.
//! 3. Anything else: unwrap `data` up to [`MAX_UNWRAP_DEPTH`] times and accept
//!    the result only if it carries both `type` and `id`.
//!
//! Every accepted record leaves with a non-null `id`, `type` and a boolean
//! `visible`. Nothing here panics or mutates its input.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::block::Block;

/// Maximum number of `data` layers descended into
pub const MAX_UNWRAP_DEPTH: usize = 5;

const TEXT_FIELDS: [&str; 6] = ["headline", "title", "content", "quote", "subcopy", "eyebrow"];
const LIST_FIELDS: [&str; 4] = ["items", "features", "badges", "brands"];
const CTA_FIELDS: [&str; 2] = ["cta", "primaryCTA"];

/// A canonical block with the position it was stored at
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    /// Stored `order`, 0 when absent
    pub order: i64,
    /// Recovered block
    pub block: Block,
}

/// Check whether a node carries anything worth rendering
///
/// True if any known text field is a non-blank string, any known list field
/// is a non-empty array, or a CTA has a non-blank label.
#[must_use]
pub fn has_non_empty_content(node: &Value) -> bool {
    let Some(obj) = node.as_object() else {
        return false;
    };

    TEXT_FIELDS.iter().any(|field| is_non_blank(obj.get(*field)))
        || LIST_FIELDS.iter().any(|field| {
            obj.get(*field)
                .and_then(Value::as_array)
                .is_some_and(|items| !items.is_empty())
        })
        || CTA_FIELDS
            .iter()
            .any(|field| is_non_blank(obj.get(*field).and_then(|cta| cta.get("label"))))
}

/// Find the node inside an envelope payload that should be rendered
///
/// A node with content and its own `type` or `id` is taken as is. Otherwise
/// the nested `data` is searched, and used only if it has content; failing
/// that the current node is returned with the fallback identity filled in.
#[must_use]
pub fn extract_deepest_valid_content(
    node: &Value,
    fallback_id: Option<&Value>,
    fallback_type: Option<&Value>,
) -> Value {
    extract_at(node, fallback_id, fallback_type, 0)
}

fn extract_at(
    node: &Value,
    fallback_id: Option<&Value>,
    fallback_type: Option<&Value>,
    depth: usize,
) -> Value {
    let Some(obj) = node.as_object() else {
        return node.clone();
    };

    if has_non_empty_content(node) && (has_key(obj, "type") || has_key(obj, "id")) {
        return node.clone();
    }

    if depth < MAX_UNWRAP_DEPTH {
        if let Some(inner) = obj.get("data").filter(|data| data.is_object()) {
            let candidate = extract_at(inner, fallback_id, fallback_type, depth + 1);
            if has_non_empty_content(&candidate) {
                return candidate;
            }
        }
    }

    let mut patched = obj.clone();
    patch_identity(&mut patched, fallback_id, fallback_type);
    Value::Object(patched)
}

/// Recover a canonical block record, `None` if the record is unrecoverable
#[must_use]
pub fn normalize(record: &Value) -> Option<Value> {
    let Some(obj) = record.as_object() else {
        warn!("block record is not an object");
        return None;
    };

    if has_key(obj, "type") && has_key(obj, "id") && !has_key(obj, "data") {
        return complete(obj.clone());
    }

    if has_key(obj, "type")
        && obj.contains_key("order")
        && obj.get("data").is_some_and(Value::is_object)
    {
        let fallback_id = obj.get("id").filter(|v| !v.is_null());
        let fallback_type = obj.get("type");
        return match extract_deepest_valid_content(&obj["data"], fallback_id, fallback_type) {
            Value::Object(mut content) => {
                patch_identity(&mut content, fallback_id, fallback_type);
                complete(content)
            }
            _ => None,
        };
    }

    let mut current = obj;
    let mut unwraps = 0;
    while unwraps < MAX_UNWRAP_DEPTH {
        match current.get("data") {
            Some(Value::Object(inner)) => {
                current = inner;
                unwraps += 1;
            }
            _ => break,
        }
    }

    if has_key(current, "type") && has_key(current, "id") {
        debug!(unwraps, "recovered block from unrecognised shape");
        complete(current.clone())
    } else {
        debug!(unwraps, "no block identity found");
        None
    }
}

/// Normalize a stored block list into render order
///
/// Unrecoverable records are skipped with a warning. Records whose fields
/// drifted from the typed shape are kept with those fields verbatim. The
/// blocks are stably sorted by their stored `order`.
#[must_use]
pub fn normalize_page(records: &[Value]) -> Vec<PlacedBlock> {
    let mut placed: Vec<PlacedBlock> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let order = stored_order(record);
            let Some(canonical) = normalize(record) else {
                warn!(index, "skipping unrecoverable block record");
                return None;
            };
            match Block::try_from(canonical) {
                Ok(block) => Some(PlacedBlock { order, block }),
                Err(e) => {
                    warn!(index, error = %e, "skipping block without identity");
                    None
                }
            }
        })
        .collect();

    placed.sort_by_key(|p| p.order);
    placed
}

/// Stored `order` of a record, 0 when absent or not numeric
#[must_use]
pub fn stored_order(record: &Value) -> i64 {
    record
        .get("order")
        .and_then(|order| order.as_i64().or_else(|| order.as_f64().map(|f| f as i64)))
        .unwrap_or(0)
}

fn has_key(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).is_some_and(|v| !v.is_null())
}

fn is_non_blank(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty())
}

fn patch_identity(
    obj: &mut Map<String, Value>,
    fallback_id: Option<&Value>,
    fallback_type: Option<&Value>,
) {
    for (key, fallback) in [("id", fallback_id), ("type", fallback_type)] {
        if has_key(obj, key) {
            continue;
        }
        if let Some(value) = fallback.filter(|v| !v.is_null()) {
            obj.insert(key.to_string(), value.clone());
        }
    }
}

fn complete(mut obj: Map<String, Value>) -> Option<Value> {
    if !has_key(&obj, "id") || !has_key(&obj, "type") {
        warn!("recovered block has no identity");
        return None;
    }
    if !obj.get("visible").is_some_and(Value::is_boolean) {
        obj.insert("visible".to_string(), Value::Bool(true));
    }
    Some(Value::Object(obj))
}
