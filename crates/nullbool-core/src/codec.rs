//! Structured (serde / JSON) and text encoding for `NullBool`.
//!
//! The write side has exactly two forms, `true` and `false`. A null and a valid
//! `false` both write as `false`, so encode-after-decode is deliberately lossy:
//!
//! | input                             | decoded          | re-encoded |
//! |-----------------------------------|------------------|------------|
//! | `true`                            | valid `true`     | `true`     |
//! | `false`                           | null             | `false`    |
//! | `null`                            | null             | `false`    |
//! | `{"Bool": true, "Valid": true}`   | valid `true`     | `true`     |
//! | `{"Bool": false, "Valid": true}`  | null             | `false`    |
//! | `42`, `"x"`, `[..]`               | `TypeMismatch`   |            |
//!
//! The read side collapses the same way: after a successful bool or object
//! decode, `valid` is set to the decoded value, so the `Valid` member of the
//! object shape never survives on its own.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, EnumAccess, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{NullBoolError, Result};
use crate::value::NullBool;

/// Member names of the nullable-column object shape, matched case-insensitively.
const BOOL_FIELD: &str = "bool";
const VALID_FIELD: &str = "valid";

impl NullBool {
    /// `"true"` when valid and true, `"false"` otherwise.
    pub const fn to_text(&self) -> &'static str {
        if self.get() {
            "true"
        } else {
            "false"
        }
    }

    /// The structured form: always a JSON bool, never `null`.
    pub fn to_json(&self) -> Value {
        Value::Bool(self.get())
    }

    /// Decode a text literal into this value.
    ///
    /// `""` and `"null"` clear `valid` and leave `value` alone. `"true"` and
    /// `"false"` set `value`, then `valid` follows `value`. Anything else clears
    /// `valid` and fails with [`NullBoolError::InvalidInput`].
    pub fn decode_text(&mut self, text: &str) -> Result<()> {
        match text {
            "" | "null" => {
                self.valid = false;
                return Ok(());
            }
            "true" => self.value = true,
            "false" => self.value = false,
            other => {
                self.valid = false;
                return Err(NullBoolError::InvalidInput(other.to_string()));
            }
        }
        self.valid = self.value;
        Ok(())
    }

    /// Decode a JSON node into this value.
    ///
    /// A bool sets `value`. An object is read as `{"Bool": .., "Valid": ..}`.
    /// `null` clears `valid` and returns immediately. Any other node fails with
    /// [`NullBoolError::TypeMismatch`]. Afterwards `valid` is `true` only if the
    /// decode succeeded and `value` is `true`.
    pub fn decode_json_value(&mut self, node: &Value) -> Result<()> {
        let decoded = match node {
            Value::Null => {
                self.valid = false;
                return Ok(());
            }
            Value::Bool(b) => {
                self.value = *b;
                Ok(())
            }
            Value::Object(map) => self.decode_object(map),
            other => Err(type_mismatch(other)),
        };
        self.valid = decoded.is_ok() && self.value;
        decoded
    }

    /// Decode a fresh `NullBool` from a JSON node. See [`NullBool::decode_json_value`].
    pub fn from_json_value(node: &Value) -> Result<Self> {
        let mut b = Self::null();
        b.decode_json_value(node)?;
        Ok(b)
    }

    fn decode_object(&mut self, map: &Map<String, Value>) -> Result<()> {
        for (key, field) in map {
            if key.eq_ignore_ascii_case(BOOL_FIELD) {
                if let Some(b) = member_bool(field)? {
                    self.value = b;
                }
            } else if key.eq_ignore_ascii_case(VALID_FIELD) {
                // Type-checked, then superseded by the value rule.
                member_bool(field)?;
            }
        }
        Ok(())
    }
}

/// A `Bool`/`Valid` member: a bool, or `null` to leave the field alone.
fn member_bool(field: &Value) -> Result<Option<bool>> {
    match field {
        Value::Bool(b) => Ok(Some(*b)),
        Value::Null => Ok(None),
        other => Err(type_mismatch(other)),
    }
}

/// Kind name reported by [`NullBoolError::TypeMismatch`].
fn kind_of(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_mismatch(node: &Value) -> NullBoolError {
    NullBoolError::TypeMismatch {
        kind: kind_of(node).to_string(),
    }
}

fn mismatch<E: de::Error>(kind: &str) -> E {
    E::custom(NullBoolError::TypeMismatch {
        kind: kind.to_string(),
    })
}

impl fmt::Display for NullBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_text())
    }
}

impl FromStr for NullBool {
    type Err = NullBoolError;

    /// Text decode into a null receiver. See [`NullBool::decode_text`].
    fn from_str(s: &str) -> Result<Self> {
        let mut b = Self::null();
        b.decode_text(s)?;
        Ok(b)
    }
}

impl Serialize for NullBool {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.get())
    }
}

impl<'de> Deserialize<'de> for NullBool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(NullBoolVisitor)
    }
}

/// Serde counterpart of [`NullBool::decode_json_value`] for any self-describing format.
struct NullBoolVisitor;

impl<'de> Visitor<'de> for NullBoolVisitor {
    type Value = NullBool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a bool, null, or an object with `Bool` and `Valid` members")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<NullBool, E> {
        Ok(NullBool::new(v, v))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<NullBool, E> {
        Ok(NullBool::null())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<NullBool, E> {
        Ok(NullBool::null())
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<NullBool, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<NullBool, A::Error> {
        let mut value = false;
        while let Some(key) = map.next_key::<String>()? {
            let is_bool = key.eq_ignore_ascii_case(BOOL_FIELD);
            if !is_bool && !key.eq_ignore_ascii_case(VALID_FIELD) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            let field = map.next_value::<Value>()?;
            let member = member_bool(&field).map_err(de::Error::custom)?;
            if let (true, Some(b)) = (is_bool, member) {
                value = b;
            }
        }
        Ok(NullBool::new(value, value))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<NullBool, E> {
        Err(mismatch("integer"))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<NullBool, E> {
        Err(mismatch("integer"))
    }

    fn visit_i128<E: de::Error>(self, _: i128) -> std::result::Result<NullBool, E> {
        Err(mismatch("integer"))
    }

    fn visit_u128<E: de::Error>(self, _: u128) -> std::result::Result<NullBool, E> {
        Err(mismatch("integer"))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<NullBool, E> {
        Err(mismatch("float"))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<NullBool, E> {
        Err(mismatch("string"))
    }

    fn visit_char<E: de::Error>(self, _: char) -> std::result::Result<NullBool, E> {
        Err(mismatch("string"))
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> std::result::Result<NullBool, E> {
        Err(mismatch("bytes"))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _: A) -> std::result::Result<NullBool, A::Error> {
        Err(mismatch("array"))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, _: A) -> std::result::Result<NullBool, A::Error> {
        Err(mismatch("enum"))
    }

    fn visit_newtype_struct<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<NullBool, D::Error> {
        deserializer.deserialize_any(self)
    }
}
