//! Bidirectional conversion between configuration values and their form
//! representation.
//!
//! A `null` value stands for "not present in the configuration"; every
//! converter accepts it in [`Converter::to_form`].

use std::marker::PhantomData;

use serde_json::{Number, Value};

use crate::{error::ConvertError, markup::form_text, option::DropdownEnum};

/// Stateless mapping between a domain value and its form representation.
pub trait Converter: Send + Sync {
    /// Converts a stored value into what the input renders.
    fn to_form(&self, value: &Value) -> Value;

    /// Converts a submitted string back into a stored value.
    fn from_form(&self, raw: &str) -> Result<Value, ConvertError>;
}

/// Passes values through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullConverter;

impl Converter for NullConverter {
    fn to_form(&self, value: &Value) -> Value {
        value.clone()
    }

    fn from_form(&self, raw: &str) -> Result<Value, ConvertError> {
        Ok(Value::String(raw.to_string()))
    }
}

/// Maps an absent value to the empty string and back.
///
/// Non-empty input is handed to the wrapped converter, so
/// `OptionalConverter::new(IntConverter)` is an optional integer.
pub struct OptionalConverter {
    inner: Box<dyn Converter>,
}

impl OptionalConverter {
    pub fn new(inner: impl Converter + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Default for OptionalConverter {
    fn default() -> Self {
        Self::new(NullConverter)
    }
}

impl Converter for OptionalConverter {
    fn to_form(&self, value: &Value) -> Value {
        match value {
            Value::Null => Value::String(String::new()),
            v => self.inner.to_form(v),
        }
    }

    fn from_form(&self, raw: &str) -> Result<Value, ConvertError> {
        if raw.is_empty() {
            Ok(Value::Null)
        } else {
            self.inner.from_form(raw)
        }
    }
}

/// Integer values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntConverter;

impl Converter for IntConverter {
    fn to_form(&self, value: &Value) -> Value {
        Value::String(form_text(value))
    }

    fn from_form(&self, raw: &str) -> Result<Value, ConvertError> {
        raw.trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| ConvertError::invalid("integer", raw))
    }
}

/// Floating point values.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatConverter;

impl Converter for FloatConverter {
    fn to_form(&self, value: &Value) -> Value {
        Value::String(form_text(value))
    }

    fn from_form(&self, raw: &str) -> Result<Value, ConvertError> {
        raw.trim()
            .parse::<f64>()
            .ok()
            // NaN and infinities have no JSON representation
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| ConvertError::invalid("number", raw))
    }
}

/// Stores the value of an enum member, submits the member's name.
pub struct EnumConverter<E> {
    _enum: PhantomData<fn() -> E>,
}

impl<E: DropdownEnum> EnumConverter<E> {
    pub fn new() -> Self {
        Self {
            _enum: PhantomData,
        }
    }
}

impl<E: DropdownEnum> Default for EnumConverter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DropdownEnum> Converter for EnumConverter<E> {
    fn to_form(&self, value: &Value) -> Value {
        if value.is_null() {
            return Value::Null;
        }
        match E::from_value(value) {
            Some(member) => Value::String(member.name().to_string()),
            None => {
                warn!("stored value {value} is not a member of {}", E::TYPE_NAME);
                Value::Null
            }
        }
    }

    fn from_form(&self, raw: &str) -> Result<Value, ConvertError> {
        E::from_name(raw)
            .map(|member| member.value())
            .ok_or_else(|| ConvertError::UnknownVariant {
                enum_name: E::TYPE_NAME,
                name: raw.to_string(),
            })
    }
}

/// A list of keys edited as one key per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiverKeysConverter;

impl Converter for ReceiverKeysConverter {
    fn to_form(&self, value: &Value) -> Value {
        let text = match value {
            Value::Array(keys) => keys.iter().map(form_text).collect::<Vec<_>>().join("\n"),
            other => form_text(other),
        };
        Value::String(text)
    }

    fn from_form(&self, raw: &str) -> Result<Value, ConvertError> {
        // browsers submit textarea line breaks as \r\n
        let keys = raw
            .split('\n')
            .map(|line| line.trim_matches(['\r', ' ']))
            .filter(|line| !line.is_empty())
            .map(Value::from)
            .collect();
        Ok(Value::Array(keys))
    }
}
