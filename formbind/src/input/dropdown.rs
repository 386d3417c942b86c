use serde_json::Value;

use super::{Input, InputBase, input_builders};
use crate::{
    converter::{EnumConverter, NullConverter},
    markup::{escape, form_text},
    option::{DropdownEnum, FormOption},
};

/// Single-select dropdown.
///
/// Built either from an explicit option list or from a [`DropdownEnum`]. An
/// enum-backed dropdown lists every member and converts between the stored
/// member value and the submitted member name; a converter set afterwards
/// with `with_converter` takes precedence.
pub struct DropdownInput {
    base: InputBase,
    options: Vec<FormOption>,
}

impl DropdownInput {
    /// Dropdown over a fixed option list, values passed through unchanged.
    pub fn from_options(
        id: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FormOption>,
    ) -> Self {
        Self {
            base: InputBase::new(id, label, NullConverter),
            options,
        }
    }

    /// Dropdown over all members of `E`.
    pub fn from_enum<E: DropdownEnum>(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label, EnumConverter::<E>::new()),
            options: E::options(),
        }
    }

    pub fn options(&self) -> &[FormOption] {
        &self.options
    }

    fn render_options(&self, value: &Value) -> String {
        let current = form_text(value);
        self.options
            .iter()
            .map(|option| {
                let option_value = form_text(option.value());
                let selected = if option_value == current { " selected" } else { "" };
                format!(
                    r#"<option value="{value}"{selected}>{text}</option>"#,
                    value = escape(&option_value),
                    text = escape(option.text()),
                )
            })
            .collect()
    }
}

impl Input for DropdownInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn render_input(&self, value: &Value) -> String {
        format!(
            r#"<select class="{classes}" id="{id}" name="{id}">{options}</select>"#,
            classes = self.input_classes(),
            id = self.base.info.id(),
            options = self.render_options(value),
        )
    }
}

input_builders!(DropdownInput);
