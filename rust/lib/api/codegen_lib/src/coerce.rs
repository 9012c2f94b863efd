//! Body-parameter coercion: raw form input → typed [`Value`].
//!
//! Order of rules:
//! 1. `{...}` / `[...]` (after trimming) is decoded as a structured literal,
//!    whatever the declared type.
//! 2. `number` → JavaScript `parseFloat` semantics (invalid → NaN).
//! 3. `boolean` → true iff the trimmed input is `true`, ignoring case.
//! 4. anything else → the raw string.
//!
//! Path parameters are never coerced.

use explorer_ir::{ParamType, ParameterSpec};
use thiserror::Error;
use tracing::debug;

use crate::value::Value;

/// A structured literal that could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parameter '{param}': invalid structured literal: {message}")]
pub struct DecodeError {
    pub param: String,
    pub message: String,
}

/// Coerce a raw body-parameter value. Never fails: an undecodable
/// structured literal falls back to the raw string.
pub fn coerce_body_value(spec: &ParameterSpec, raw: &str) -> Value {
    match try_coerce_body_value(spec, raw) {
        Ok(value) => value,
        Err(e) => {
            debug!("coerce: {}; keeping raw string", e);
            Value::String(raw.to_string())
        }
    }
}

/// Coerce a raw body-parameter value, reporting undecodable structured literals.
pub fn try_coerce_body_value(spec: &ParameterSpec, raw: &str) -> Result<Value, DecodeError> {
    if looks_structured(raw) {
        return serde_json::from_str::<serde_json::Value>(raw.trim())
            .map(Value::from)
            .map_err(|e| DecodeError {
                param: spec.name.clone(),
                message: e.to_string(),
            });
    }
    Ok(coerce_scalar(spec.ty, raw))
}

/// True when the trimmed input is bracketed like an object or array literal.
pub fn looks_structured(raw: &str) -> bool {
    let t = raw.trim();
    (t.starts_with('{') && t.ends_with('}')) || (t.starts_with('[') && t.ends_with(']'))
}

fn coerce_scalar(ty: ParamType, raw: &str) -> Value {
    match ty {
        ParamType::Number => Value::Number(parse_float(raw)),
        ParamType::Boolean => Value::Bool(raw.trim().eq_ignore_ascii_case("true")),
        ParamType::String | ParamType::Array | ParamType::Object => Value::String(raw.to_string()),
    }
}

/// JavaScript `parseFloat`: skip leading whitespace, take the longest valid
/// decimal prefix (or a signed `Infinity`), NaN if there is none.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let b = s.as_bytes();
    let mut i = 0;

    let negative = matches!(b.first(), Some(b'-'));
    if matches!(b.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < b.len() && b[i] == b'.' {
        let mut j = i + 1;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - (i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(ty: ParamType) -> ParameterSpec {
        ParameterSpec::new("field", ty)
    }

    #[test]
    fn boolean_true_ignores_case() {
        for raw in ["true", "True", "TRUE", " true "] {
            assert_eq!(coerce_body_value(&spec(ParamType::Boolean), raw), Value::Bool(true), "{raw}");
        }
        for raw in ["", "false", "yes", "1", "truthy"] {
            assert_eq!(coerce_body_value(&spec(ParamType::Boolean), raw), Value::Bool(false), "{raw}");
        }
    }

    #[test]
    fn number_parsing() {
        assert_eq!(coerce_body_value(&spec(ParamType::Number), "42"), Value::Number(42.0));
        let nan = coerce_body_value(&spec(ParamType::Number), "abc");
        assert!(nan.as_f64().unwrap().is_nan());
    }

    #[test]
    fn parse_float_prefixes() {
        assert_eq!(parse_float("  3.25kg"), 3.25);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("-7"), -7.0);
        assert_eq!(parse_float("+2.5E-1x"), 0.25);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("inf").is_nan());
        assert!(parse_float("NaN").is_nan());
    }

    #[test]
    fn structured_literal_wins_over_declared_type() {
        let v = coerce_body_value(&spec(ParamType::String), r#"{"a": 1}"#);
        assert_eq!(v.get("a"), Some(&Value::Number(1.0)));

        let v = coerce_body_value(&spec(ParamType::Number), "[1, 2]");
        assert_eq!(v, Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]));

        let v = coerce_body_value(&spec(ParamType::Boolean), "  [true]  ");
        assert_eq!(v, Value::Array(vec![Value::Bool(true)]));
    }

    #[test]
    fn out_of_range_number_in_literal_is_infinite() {
        let expected = Value::Array(vec![Value::Number(f64::INFINITY)]);
        assert_eq!(coerce_body_value(&spec(ParamType::Array), "[1e400]"), expected);
        assert_eq!(try_coerce_body_value(&spec(ParamType::Array), "[1e400]"), Ok(expected));

        let v = coerce_body_value(&spec(ParamType::Object), r#"{"big": -1E999}"#);
        assert_eq!(v.get("big"), Some(&Value::Number(f64::NEG_INFINITY)));
    }

    #[test]
    fn broken_literal_falls_back_to_raw_string() {
        let raw = "{not json}";
        assert_eq!(
            coerce_body_value(&spec(ParamType::Number), raw),
            Value::String(raw.to_string())
        );

        let err = try_coerce_body_value(&spec(ParamType::Object), raw).unwrap_err();
        assert_eq!(err.param, "field");
    }

    #[test]
    fn strings_are_untouched() {
        assert_eq!(
            coerce_body_value(&spec(ParamType::String), " 1 Main St "),
            Value::String(" 1 Main St ".into())
        );
        // Array/object typed fields without brackets stay strings too.
        assert_eq!(
            coerce_body_value(&spec(ParamType::Array), "a,b"),
            Value::String("a,b".into())
        );
    }

    #[test]
    fn half_bracketed_is_not_structured() {
        assert!(!looks_structured("[1, 2"));
        assert!(!looks_structured("{]"));
        assert!(looks_structured(" {} "));
    }
}
