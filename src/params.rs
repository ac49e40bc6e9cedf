//! Translation parameters and `{placeholder}` substitution.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Parameter consulted for plural selection.
pub const COUNT_PARAM: &str = "count";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// A substitution value: text or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl ParamValue {
    /// Numeric reading of the value.
    ///
    /// Text is trimmed and parsed; blank text reads as `0` and anything
    /// unparsable is not a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Int(n) => Some(*n as f64),
            ParamValue::Float(n) if n.is_nan() => None,
            ParamValue::Float(n) => Some(*n),
            ParamValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Some(0.0)
                } else {
                    text.parse::<f64>().ok().filter(|n| !n.is_nan())
                }
            }
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            ParamValue::Float(n) => write_float(f, *n),
        }
    }
}

/// Plain decimals in `[1e-6, 1e21)`, exponent notation outside it, and no
/// sign on zero.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 {
        return f.write_str("0");
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", n);
    }
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        ParamValue::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(n) => ParamValue::Int(n),
                        Err(_) => ParamValue::Float(value as f64),
                    }
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Ordered parameter list. Setting a name twice replaces the first value
/// in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((name, value)),
        }
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Numeric value of the `count` parameter, if present and numeric.
    pub fn count(&self) -> Option<f64> {
        self.get(COUNT_PARAM).and_then(ParamValue::as_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.set(name, value);
        }
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Replace every `{name}` in `text` with the matching parameter.
///
/// Parameters are applied one after another in list order. Placeholders
/// without a parameter stay as written; unused parameters are ignored.
pub fn interpolate(text: &str, params: &Params) -> String {
    let mut result = text.to_string();
    for (name, value) in params.iter() {
        let token = format!("{{{}}}", name);
        if result.contains(&token) {
            result = result.replace(&token, &value.to_string());
        }
    }
    result
}

/// Placeholder names used by `text`, in first-appearance order.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in PLACEHOLDER_REGEX.captures_iter(text) {
        let name = &cap[1];
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}
