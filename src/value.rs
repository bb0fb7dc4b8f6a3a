//! Scalar value semantics for the table pipeline.
//!
//! The global filter, column filters, and sort comparator all reduce to two
//! primitives over field values: a canonical text form and a total ordering.

use serde_json::Value;
use std::cmp::Ordering;

/// Canonical text form of a field value, used for substring and equality
/// matching.
///
/// Strings are used verbatim (no surrounding quotes); every other value uses
/// its JSON text, so numbers render as `42` or `1.5`, booleans as
/// `true`/`false`, null as `null`, and compound values as their JSON
/// serialization.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Case-insensitive substring containment against a value's text form.
///
/// `needle` must already be lowercased; callers lowercase the query once per
/// recomputation, not once per cell.
pub fn contains(value: &Value, needle: &str) -> bool {
    text(value).to_lowercase().contains(needle)
}

/// Case-insensitive equality against a value's text form.
///
/// `filter` must already be lowercased.
pub fn equals(value: &Value, filter: &str) -> bool {
    text(value).to_lowercase() == filter
}

/// Total ordering over field values.
///
/// Numbers compare numerically, strings lexically, booleans with
/// `false < true`. Values of different types compare by type rank
/// (null < bool < number < string < array < object) so the order stays total
/// and deterministic for collections with mixed-type columns. Null ordering
/// in sorted output is handled by the view layer before this comparator
/// runs; the rank exists so the comparator is total regardless.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (x, y) if type_rank(x) != type_rank(y) => type_rank(x).cmp(&type_rank(y)),
        // Same-rank compound values: JSON text keeps the order total.
        (x, y) => x.to_string().cmp(&y.to_string()),
    }
}

fn compare_numbers(x: &serde_json::Number, y: &serde_json::Number) -> Ordering {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x.cmp(&y);
    }
    let x = x.as_f64().unwrap_or(0.0);
    let y = y.as_f64().unwrap_or(0.0);
    // JSON numbers are never NaN, so partial_cmp only fails on the
    // unreachable path.
    x.partial_cmp(&y).unwrap_or(Ordering::Equal)
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
