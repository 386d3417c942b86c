//! Selectable choices and enum-backed choice sets.

use std::fmt;

use serde_json::Value;
use strum::IntoEnumIterator;

/// One selectable choice, used by dropdowns and checkbox sets.
///
/// Two options are equal when their values are equal; the text is only a
/// label.
#[derive(Debug, Clone)]
pub struct FormOption {
    value: Value,
    text: String,
}

impl FormOption {
    /// Creates an option with the given value and display text.
    pub fn new(value: impl Into<Value>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
        }
    }

    /// The value stored in the configuration when this option is chosen.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The human readable label.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl PartialEq for FormOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A closed set of named domain values that can be offered in a dropdown.
///
/// Members are identified by name in forms and by [`DropdownEnum::value`] in
/// the configuration. The `Display` implementation is the description shown
/// to the user.
///
/// Implementors derive [`strum::EnumIter`] and [`strum::IntoStaticStr`]:
///
/// ```rust
/// use formbind::option::DropdownEnum;
/// use serde_json::{Value, json};
/// use strum::{EnumIter, IntoStaticStr};
///
/// #[derive(Debug, Clone, Copy, PartialEq, EnumIter, IntoStaticStr)]
/// enum Band {
///     Short,
///     Long,
/// }
///
/// impl std::fmt::Display for Band {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{} wave", self.name().to_lowercase())
///     }
/// }
///
/// impl DropdownEnum for Band {
///     const TYPE_NAME: &'static str = "Band";
///
///     fn value(&self) -> Value {
///         match self {
///             Band::Short => json!("sw"),
///             Band::Long => json!("lw"),
///         }
///     }
/// }
///
/// assert_eq!(Band::from_name("Long"), Some(Band::Long));
/// assert_eq!(Band::Short.to_option().text(), "short wave");
/// ```
pub trait DropdownEnum:
    IntoEnumIterator + Copy + PartialEq + fmt::Display + Into<&'static str> + Send + Sync + 'static
{
    /// Type name used in error messages.
    const TYPE_NAME: &'static str;

    /// The value stored in the configuration for this member.
    fn value(&self) -> Value;

    /// Member name, used as the form representation.
    fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Projects the member into a dropdown option `(name, description)`.
    fn to_option(&self) -> FormOption {
        FormOption::new(self.name(), self.to_string())
    }

    /// Looks up a member by name.
    fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|m| m.name() == name)
    }

    /// Looks up the member holding `value`.
    fn from_value(value: &Value) -> Option<Self> {
        Self::iter().find(|m| m.value() == *value)
    }

    /// Options for every member, in declaration order.
    fn options() -> Vec<FormOption> {
        Self::iter().map(|m| m.to_option()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_identity_is_value() {
        assert_eq!(FormOption::new("a", "first"), FormOption::new("a", "other"));
        assert_ne!(FormOption::new("a", "x"), FormOption::new("b", "x"));
        assert_ne!(FormOption::new(1, "x"), FormOption::new("1", "x"));
    }

    #[test]
    fn test_option_accessors() {
        let o = FormOption::new(json!(48000), "48 kHz");
        assert_eq!(o.value(), &json!(48000));
        assert_eq!(o.text(), "48 kHz");
    }
}
