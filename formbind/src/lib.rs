//! # formbind
//!
//! Typed form field binding for configuration web interfaces.
//!
//! formbind renders configuration values into editable form markup and parses
//! submitted form payloads back into typed values, so that a value keeps its
//! type (integer, float, boolean, list, enum member, location, ...) across a
//! render/submit round trip.
//!
//! ## Features
//!
//! - Field descriptors for text, numbers, text areas, checkboxes, checkbox
//!   sets, dropdowns, locations and a mode/interval matrix
//! - Bidirectional converters between stored values and form values
//! - Enum-backed dropdowns via [`option::DropdownEnum`]
//! - Correct handling of unchecked checkboxes (never submitted by browsers)
//! - Composite fields spanning several submitted keys
//!
//! ## Quick Start
//!
//! ```rust
//! use formbind::{FormData, Section};
//! use formbind::enums::WfmTauValues;
//! use formbind::input::{CheckboxInput, DropdownInput, NumberInput};
//! use serde_json::json;
//!
//! let section = Section::new("Demodulation")
//!     .with_input(NumberInput::new("squelch", "Squelch").with_append("dB"))
//!     .with_input(CheckboxInput::new("auto_squelch", "Auto squelch", "Enable"))
//!     .with_input(DropdownInput::from_enum::<WfmTauValues>("wfm_tau", "De-emphasis"));
//!
//! let config = json!({"squelch": -150, "wfm_tau": 50e-6});
//! let html = section.render(config.as_object().unwrap());
//! assert!(html.contains(r#"value="-150""#));
//!
//! let data = FormData::from_urlencoded("squelch=-140&wfm_tau=Tau75Micro");
//! let update = section.parse(&data).unwrap();
//! assert_eq!(update["squelch"], json!(-140));
//! assert_eq!(update["auto_squelch"], json!(false));
//! assert_eq!(update["wfm_tau"], json!(75e-6));
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Config snapshots, submitted form data and updates
//! - [`converter`] - Value/form converters
//! - [`input`] - Field descriptors
//! - [`option`] - Choices and enum-backed choice sets
//! - [`enums`] - Built-in choice sets
//! - [`section`] - Groups of fields

#[macro_use]
extern crate log;

/// Config snapshots, submitted form data and update fragments.
pub mod config;

/// Bidirectional converters between stored and form values.
pub mod converter;

/// Built-in dropdown enums.
pub mod enums;

/// Error types.
pub mod error;

/// Field descriptors.
pub mod input;

/// Markup helpers.
pub mod markup;

/// Choices and enum-backed choice sets.
pub mod option;

/// Groups of fields rendered and parsed together.
pub mod section;

pub use config::{ConfigSource, FormData, Update, merge_update};
pub use error::{ConvertError, FormError, Result};
pub use section::Section;
pub use serde_json::Value;
