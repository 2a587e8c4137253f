use serde::{Deserialize, Serialize};
use url::Url;

/// A value as it is persisted in a [`Store`](crate::Store).
///
/// Stores only know about these shapes. Typed access on top of them is provided by the `prefwrap`
/// crate, which decides how a Rust type maps onto one of the variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum StoredValue {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float. Non-finite values persist as `"inf"`, `"-inf"` and `"NaN"`.
    Float(#[serde(with = "float")] f64),
    /// A UTF-8 string.
    String(String),
    /// A boolean.
    Bool(bool),
    /// An opaque byte sequence.
    Data(Vec<u8>),
    /// A URL, persisted as its string form.
    Url(Url),
}

impl StoredValue {
    /// Name of the shape, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            StoredValue::Integer(_) => "integer",
            StoredValue::Float(_) => "float",
            StoredValue::String(_) => "string",
            StoredValue::Bool(_) => "bool",
            StoredValue::Data(_) => "data",
            StoredValue::Url(_) => "url",
        }
    }
}

// JSON has no representation for non-finite numbers, so those are written as strings.
mod float {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    const INFINITY: &str = "inf";
    const NEG_INFINITY: &str = "-inf";
    const NAN: &str = "NaN";

    pub(super) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if *value == f64::INFINITY {
            serializer.serialize_str(INFINITY)
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str(NEG_INFINITY)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                other => Err(D::Error::custom(format!("invalid float \"{other}\""))),
            },
        }
    }
}
