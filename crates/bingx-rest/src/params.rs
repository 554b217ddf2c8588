//! Canonical request parameter encoding.
//!
//! BingX signs requests over a deterministic serialization of the query
//! parameters: keys sorted byte-wise, values formatted to a canonical
//! string, pairs joined with `&`. The string that is *signed* is never
//! percent-encoded; the string that is *transmitted* percent-encodes only
//! values carrying an embedded JSON fragment. Getting either side of that
//! asymmetry wrong makes the server reject every request with a signature
//! mismatch, so all the rules live in this one module.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::BTreeMap;

/// Escape set for transmitted complex values: every byte except ASCII
/// alphanumerics and `-_.~`. Space becomes `%20`; the server does not
/// accept `+` as a space in this position.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Magnitude above which an integral f64 would need scientific notation
/// to stay exact; such values go through the fixed-precision path.
const MAX_PLAIN_INTEGRAL: f64 = 1e15;

/// A single request parameter value.
///
/// Closed set of the value kinds the API carries, so formatting is
/// exhaustive and total by construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Plain string, passed through verbatim.
    Str(String),
    /// Integer, formatted as plain decimal digits.
    Int(i64),
    /// Floating-point number, formatted via the canonical precision rules.
    Float(f64),
    /// Boolean, formatted as `true`/`false`.
    Bool(bool),
    /// Pre-serialized JSON fragment (e.g. stop-loss/take-profit
    /// sub-parameters), passed through verbatim when signing and
    /// percent-encoded when transmitted.
    Json(String),
}

impl ParamValue {
    /// Format the value to its canonical string form.
    ///
    /// Identical for the signed and transmitted serializations; only the
    /// escaping step differs between the two.
    pub fn format(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format_float(*f),
            Self::Bool(b) => b.to_string(),
            Self::Json(s) => s.clone(),
        }
    }
}

/// Canonical float formatting.
///
/// Zero is `0`. Integral values below the scientific-notation bound keep
/// zero decimal places. Fractional values round to a fixed precision band
/// (8 digits, or 10 for magnitudes under 0.0001) *before* trailing zeros
/// are stripped, so binary noise like 19.999999999999996 comes out as
/// `20` rather than a value the server would treat as different.
fn format_float(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < MAX_PLAIN_INTEGRAL {
        return format!("{value:.0}");
    }

    let precision: usize = if value.abs() >= 0.0001 { 8 } else { 10 };
    let formatted = format!("{value:.precision$}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Whether a formatted value carries an embedded structured sub-document.
///
/// `[` or `{` anywhere in the value marks it as complex; only complex
/// values are percent-encoded in the transmitted query.
fn is_complex(formatted: &str) -> bool {
    formatted.contains('[') || formatted.contains('{')
}

/// An ordered set of request parameters.
///
/// Keys are unique; iteration order is byte-wise lexicographic by
/// construction, so serialization is deterministic regardless of
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unconditionally.
    pub fn insert(&mut self, key: &str, value: ParamValue) {
        self.0.insert(key.to_string(), value);
    }

    /// Insert a string parameter, skipping the empty string.
    ///
    /// The wire convention represents "not provided" as the field's zero
    /// value; such fields must be excluded from the canonical string
    /// entirely or the signature changes.
    pub fn push_str(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.insert(key, ParamValue::Str(value.to_string()));
        }
    }

    /// Insert an integer parameter, skipping zero.
    pub fn push_int(&mut self, key: &str, value: i64) {
        if value != 0 {
            self.insert(key, ParamValue::Int(value));
        }
    }

    /// Insert a float parameter, skipping zero.
    pub fn push_float(&mut self, key: &str, value: f64) {
        if value != 0.0 {
            self.insert(key, ParamValue::Float(value));
        }
    }

    /// Insert a pre-serialized JSON fragment, skipping the empty string.
    pub fn push_json(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.insert(key, ParamValue::Json(value.to_string()));
        }
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any formatted value contains an embedded JSON fragment.
    pub fn has_complex_values(&self) -> bool {
        self.0.values().any(|v| is_complex(&v.format()))
    }

    /// Serialize to the canonical `key=value&key=value` form.
    ///
    /// With `encode` set, complex values are percent-encoded for
    /// transmission; everything else is byte-identical to the unencoded
    /// form. The signature must always be computed over the unencoded
    /// serialization.
    pub fn to_query(&self, encode: bool) -> String {
        let mut parts = Vec::with_capacity(self.0.len());

        for (key, value) in &self.0 {
            let mut formatted = value.format();
            if encode && is_complex(&formatted) {
                formatted = utf8_percent_encode(&formatted, QUERY_ESCAPE).to_string();
            }
            parts.push(format!("{key}={formatted}"));
        }

        parts.join("&")
    }
}
