use serde_json::Value;

use super::{CHECK_CLASSES, Input, InputBase, input_builders};
use crate::{
    config::{FormData, Update},
    converter::NullConverter,
    error::Result,
    markup::{checked_attr, escape, form_text, is_truthy},
    option::FormOption,
};

fn render_checkbox(classes: &str, id: &str, checked: bool, text: &str) -> String {
    format!(
        r#"<div class="{classes}">
    <input class="form-check-input" type="checkbox" id="{id}" name="{id}" {checked}>
    <label class="form-check-label" for="{id}">{text}</label>
</div>"#,
        id = escape(id),
        checked = checked_attr(checked),
    )
}

/// Boolean field rendered as a single checkbox.
///
/// Browsers leave unchecked boxes out of the submission, so a missing key
/// parses as `false` instead of "unchanged".
pub struct CheckboxInput {
    base: InputBase,
    checkbox_text: String,
}

impl CheckboxInput {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        checkbox_text: impl Into<String>,
    ) -> Self {
        Self {
            base: InputBase::new(id, label, NullConverter),
            checkbox_text: checkbox_text.into(),
        }
    }
}

impl Input for CheckboxInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn input_classes(&self) -> &'static str {
        CHECK_CLASSES
    }

    fn render_input(&self, value: &Value) -> String {
        render_checkbox(
            self.input_classes(),
            self.base.info.id(),
            is_truthy(value),
            &self.checkbox_text,
        )
    }

    fn parse(&self, data: &FormData) -> Result<Update> {
        let id = self.base.info.id();
        let checked = data.is_checked(id);
        debug!("parsed checkbox {id}: {checked}");
        let mut update = Update::new();
        update.insert(id.to_string(), Value::Bool(checked));
        Ok(update)
    }
}

/// A processing service offered by the receiver, e.g. a digital decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Identifier stored in the configuration.
    pub modulation: String,
    /// Display name.
    pub name: String,
}

impl Service {
    pub fn new(modulation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modulation: modulation.into(),
            name: name.into(),
        }
    }
}

/// A set of checkboxes whose value is the list of checked option values.
///
/// Each option is submitted under `"{id}-{option value}"`. The parsed list
/// follows the declared option order, not the submission order.
pub struct MultiCheckboxInput {
    base: InputBase,
    options: Vec<FormOption>,
}

impl MultiCheckboxInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>, options: Vec<FormOption>) -> Self {
        Self {
            base: InputBase::new(id, label, NullConverter),
            options,
        }
    }

    /// Checkbox set over the services currently available on the receiver.
    pub fn services(
        id: impl Into<String>,
        label: impl Into<String>,
        services: impl IntoIterator<Item = Service>,
    ) -> Self {
        let options = services
            .into_iter()
            .map(|s| FormOption::new(s.modulation, s.name))
            .collect();
        Self::new(id, label, options)
    }

    /// Checkbox set over the JS8Call speed profiles.
    pub fn js8_profiles(id: impl Into<String>, label: impl Into<String>) -> Self {
        let profiles = vec![
            FormOption::new("normal", "Normal (15s, 50Hz, ~16WPM)"),
            FormOption::new("slow", "Slow (30s, 25Hz, ~8WPM)"),
            FormOption::new("fast", "Fast (10s, 80Hz, ~24WPM)"),
            FormOption::new("turbo", "Turbo (6s, 160Hz, ~40WPM)"),
        ];
        Self::new(id, label, profiles)
    }

    pub fn options(&self) -> &[FormOption] {
        &self.options
    }

    /// Form key of the checkbox for `option`.
    pub fn checkbox_id(&self, option: &FormOption) -> String {
        format!("{}-{}", self.base.info.id(), form_text(option.value()))
    }
}

impl Input for MultiCheckboxInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn input_classes(&self) -> &'static str {
        CHECK_CLASSES
    }

    fn render_input(&self, value: &Value) -> String {
        let selected = value.as_array().map(Vec::as_slice).unwrap_or_default();
        self.options
            .iter()
            .map(|option| {
                render_checkbox(
                    self.input_classes(),
                    &self.checkbox_id(option),
                    selected.contains(option.value()),
                    &escape(option.text()),
                )
            })
            .collect()
    }

    fn parse(&self, data: &FormData) -> Result<Update> {
        let checked: Vec<Value> = self
            .options
            .iter()
            .filter(|option| data.is_checked(&self.checkbox_id(option)))
            .map(|option| option.value().clone())
            .collect();
        debug!("parsed checkbox set {}: {checked:?}", self.base.info.id());
        let mut update = Update::new();
        update.insert(self.base.info.id().to_string(), Value::Array(checked));
        Ok(update)
    }
}

input_builders!(CheckboxInput, MultiCheckboxInput);
