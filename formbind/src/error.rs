//! Error types for value conversion and form parsing.

use thiserror::Error;

/// Failure while turning a submitted string back into a domain value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The submitted text is not a valid value of the expected kind.
    #[error("expected {expected}, got {actual:?}")]
    InvalidValue {
        /// Kind of value the converter produces (e.g. "integer").
        expected: &'static str,
        /// The submitted text.
        actual: String,
    },

    /// The submitted name does not match any member of the enum.
    #[error("{name:?} is not a member of {enum_name}")]
    UnknownVariant {
        /// Name of the enum type.
        enum_name: &'static str,
        /// The submitted member name.
        name: String,
    },
}

impl ConvertError {
    pub(crate) fn invalid(expected: &'static str, actual: impl Into<String>) -> Self {
        ConvertError::InvalidValue {
            expected,
            actual: actual.into(),
        }
    }
}

/// Failure while parsing a submitted form into a configuration update.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    /// A field's converter rejected the submitted value.
    #[error("invalid value for field `{id}`: {source}")]
    Convert {
        /// Field id.
        id: String,
        /// Underlying conversion failure.
        #[source]
        source: ConvertError,
    },

    /// A composite field was only partially submitted.
    #[error("field `{id}` is missing form key `{key}`")]
    MissingField {
        /// Field id.
        id: String,
        /// The submitted key that was expected but absent.
        key: String,
    },
}

impl FormError {
    pub(crate) fn convert(id: &str, source: ConvertError) -> Self {
        FormError::Convert {
            id: id.to_string(),
            source,
        }
    }
}

/// Result type for form parsing.
pub type Result<T> = std::result::Result<T, FormError>;
