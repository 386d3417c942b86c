//! Form field descriptors.
//!
//! Two capabilities describe a field:
//!
//! - [`Input`] for fields bound to a single submitted key, with a
//!   [`Converter`] between the stored value and the form value.
//! - [`CompositeInput`] for fields whose value spans several submitted keys
//!   (a location, a selection matrix). These bypass the converter.
//!
//! [`Field`] holds either kind so that a [`Section`](crate::section::Section)
//! can render and parse them uniformly.

use serde_json::Value;

use crate::{
    config::{ConfigSource, FormData, Update},
    converter::Converter,
    error::{FormError, Result},
};

/// Builder methods shared by inputs holding an `InputBase` in `self.base`.
macro_rules! input_builders {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $ty {
                /// Sets the help text shown below the control.
                pub fn with_infotext(mut self, infotext: impl Into<String>) -> Self {
                    self.base.info.set_infotext(infotext);
                    self
                }

                /// Replaces the default converter.
                pub fn with_converter(
                    mut self,
                    converter: impl $crate::converter::Converter + 'static,
                ) -> Self {
                    self.base.converter = Box::new(converter);
                    self
                }
            }
        )*
    };
}

pub(crate) use input_builders;

/// Single-line text, integer and float inputs, multi-line text.
pub mod text;

/// Boolean checkbox and checkbox sets.
pub mod checkbox;

/// Single-select dropdown.
pub mod dropdown;

/// Latitude/longitude pair.
pub mod location;

/// Q65 mode/interval selection matrix.
pub mod matrix;

pub use checkbox::{CheckboxInput, MultiCheckboxInput, Service};
pub use dropdown::DropdownInput;
pub use location::{Location, LocationInput};
pub use matrix::Q65ModeMatrix;
pub use text::{FloatInput, NumberInput, TextAreaInput, TextInput};

/// CSS classes of regular form controls.
pub const CONTROL_CLASSES: &str = "form-control form-control-sm";

/// CSS classes of checkbox wrappers.
pub const CHECK_CLASSES: &str = "form-check form-control-sm";

/// Identity and labelling shared by every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    id: String,
    label: String,
    infotext: Option<String>,
}

impl FieldInfo {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            infotext: None,
        }
    }

    /// Key used both in the configuration and in submitted data.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional help text shown below the control.
    pub fn infotext(&self) -> Option<&str> {
        self.infotext.as_deref()
    }

    pub(crate) fn set_infotext(&mut self, infotext: impl Into<String>) {
        self.infotext = Some(infotext.into());
    }

    /// Wraps a control with its label and help text.
    pub fn decorate(&self, input: &str) -> String {
        let infotext = self
            .infotext
            .as_deref()
            .map(|text| format!("<small>{text}</small>"))
            .unwrap_or_default();
        format!(
            r#"<div class="form-group row">
    <label class="col-form-label col-form-label-sm col-3" for="{id}">{label}</label>
    <div class="col-9 p-0">
        {input}
        {infotext}
    </div>
</div>"#,
            id = self.id,
            label = self.label,
        )
    }
}

/// Id, label and converter of a single-key input.
pub struct InputBase {
    pub info: FieldInfo,
    pub converter: Box<dyn Converter>,
}

impl InputBase {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        converter: impl Converter + 'static,
    ) -> Self {
        Self {
            info: FieldInfo::new(id, label),
            converter: Box::new(converter),
        }
    }
}

/// A field bound to one submitted key.
///
/// Implementors provide [`Input::base`] and [`Input::render_input`]; the
/// provided `render` and `parse` handle config lookup, conversion and
/// decoration.
pub trait Input: Send + Sync {
    fn base(&self) -> &InputBase;

    /// Renders the bare control for an already converted value.
    fn render_input(&self, value: &Value) -> String;

    fn input_classes(&self) -> &'static str {
        CONTROL_CLASSES
    }

    fn id(&self) -> &str {
        self.base().info.id()
    }

    /// Renders the decorated control for the field's current value.
    fn render(&self, config: &dyn ConfigSource) -> String {
        let base = self.base();
        let value = config.get_value(base.info.id()).unwrap_or(&Value::Null);
        let control = self.render_input(&base.converter.to_form(value));
        trace!("rendered field {}", base.info.id());
        base.info.decorate(&control)
    }

    /// Parses the first value submitted for the field's id.
    ///
    /// A field that was not submitted yields an empty update so the stored
    /// value stays untouched.
    fn parse(&self, data: &FormData) -> Result<Update> {
        let base = self.base();
        let id = base.info.id();
        let mut update = Update::new();
        if let Some(raw) = data.first(id) {
            let value = base
                .converter
                .from_form(raw)
                .map_err(|e| FormError::convert(id, e))?;
            debug!("parsed field {id}: {value}");
            update.insert(id.to_string(), value);
        }
        Ok(update)
    }
}

/// A field whose value spans several submitted keys.
pub trait CompositeInput: Send + Sync {
    fn info(&self) -> &FieldInfo;

    /// Form keys the field reads on submission.
    fn keys(&self) -> Vec<String>;

    /// Renders the bare controls for the stored value.
    ///
    /// The whole snapshot is passed along for settings the controls depend on.
    fn render_inputs(&self, value: &Value, config: &dyn ConfigSource) -> String;

    /// Rebuilds the field's value, `None` when the field was not submitted.
    fn parse_value(&self, data: &FormData) -> Result<Option<Value>>;

    fn input_classes(&self) -> &'static str {
        CONTROL_CLASSES
    }

    fn id(&self) -> &str {
        self.info().id()
    }

    fn render(&self, config: &dyn ConfigSource) -> String {
        let info = self.info();
        let value = config.get_value(info.id()).unwrap_or(&Value::Null);
        let controls = self.render_inputs(value, config);
        trace!("rendered composite field {}", info.id());
        info.decorate(&controls)
    }

    fn parse(&self, data: &FormData) -> Result<Update> {
        let mut update = Update::new();
        if let Some(value) = self.parse_value(data)? {
            debug!("parsed composite field {}: {value}", self.id());
            update.insert(self.id().to_string(), value);
        }
        Ok(update)
    }
}

/// Any field that can appear in a form.
pub enum Field {
    Input(Box<dyn Input>),
    Composite(Box<dyn CompositeInput>),
}

impl Field {
    pub fn input(input: impl Input + 'static) -> Self {
        Field::Input(Box::new(input))
    }

    pub fn composite(input: impl CompositeInput + 'static) -> Self {
        Field::Composite(Box::new(input))
    }

    pub fn id(&self) -> &str {
        match self {
            Field::Input(i) => i.id(),
            Field::Composite(c) => c.id(),
        }
    }

    pub fn render(&self, config: &dyn ConfigSource) -> String {
        match self {
            Field::Input(i) => i.render(config),
            Field::Composite(c) => c.render(config),
        }
    }

    pub fn parse(&self, data: &FormData) -> Result<Update> {
        match self {
            Field::Input(i) => i.parse(data),
            Field::Composite(c) => c.parse(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decorate_with_infotext() {
        let mut info = FieldInfo::new("receiver_name", "Receiver name");
        let bare = info.decorate("<input>");
        assert!(bare.contains(r#"for="receiver_name">Receiver name</label>"#));
        assert!(!bare.contains("<small>"));

        info.set_infotext("Shown in the page title");
        let decorated = info.decorate("<input>");
        assert!(decorated.contains("<input>"));
        assert!(decorated.contains("<small>Shown in the page title</small>"));
    }

    #[test]
    fn test_field_dispatch() {
        let fields = [
            Field::input(TextInput::new("name", "Name")),
            Field::composite(LocationInput::new("loc", "Location")),
        ];
        let config = json!({"name": "x"}).as_object().cloned().unwrap();
        assert_eq!(fields[0].id(), "name");
        assert_eq!(fields[1].id(), "loc");
        assert!(fields[0].render(&config).contains(r#"value="x""#));
        assert!(fields[1].parse(&FormData::new()).unwrap().is_empty());
    }

    #[test]
    fn test_schema_objects_are_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Field>();
        assert_send_sync::<InputBase>();
    }
}
