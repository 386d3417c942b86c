use serde_json::Value;

use super::{Input, InputBase, input_builders};
use crate::{
    converter::{FloatConverter, IntConverter, NullConverter},
    markup::{escape, form_text},
};

/// Single-line free text.
pub struct TextInput {
    base: InputBase,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label, NullConverter),
        }
    }
}

impl Input for TextInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn render_input(&self, value: &Value) -> String {
        format!(
            r#"<input type="text" class="{classes}" id="{id}" name="{id}" placeholder="{label}" value="{value}">"#,
            classes = self.input_classes(),
            id = self.base.info.id(),
            label = self.base.info.label(),
            value = escape(&form_text(value)),
        )
    }
}

/// Integer input with an optional unit shown after the control.
pub struct NumberInput {
    base: InputBase,
    append: Option<String>,
    step: Option<String>,
}

impl NumberInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label, IntConverter),
            append: None,
            step: None,
        }
    }

    /// Unit suffix, e.g. `"Hz"`.
    pub fn with_append(mut self, append: impl Into<String>) -> Self {
        self.append = Some(append.into());
        self
    }

    /// Value of the `step` attribute.
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    fn render_append(&self) -> String {
        match &self.append {
            Some(append) => format!(
                r#"<div class="input-group-append">
    <span class="input-group-text">{append}</span>
</div>"#
            ),
            None => String::new(),
        }
    }
}

impl Input for NumberInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn render_input(&self, value: &Value) -> String {
        let step = self
            .step
            .as_deref()
            .map(|step| format!(r#" step="{step}""#))
            .unwrap_or_default();
        format!(
            r#"<div class="input-group input-group-sm">
    <input type="number" class="{classes}" id="{id}" name="{id}" placeholder="{label}" value="{value}"{step}>
    {append}
</div>"#,
            classes = self.input_classes(),
            id = self.base.info.id(),
            label = self.base.info.label(),
            value = escape(&form_text(value)),
            append = self.render_append(),
        )
    }
}

/// Floating point input: a [`NumberInput`] with `step="any"` and a float
/// converter.
pub struct FloatInput {
    inner: NumberInput,
}

impl FloatInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let mut inner = NumberInput::new(id, label).with_step("any");
        inner.base.converter = Box::new(FloatConverter);
        Self { inner }
    }

    pub fn with_append(self, append: impl Into<String>) -> Self {
        Self {
            inner: self.inner.with_append(append),
        }
    }

    pub fn with_infotext(self, infotext: impl Into<String>) -> Self {
        Self {
            inner: self.inner.with_infotext(infotext),
        }
    }

    pub fn with_converter(self, converter: impl crate::converter::Converter + 'static) -> Self {
        Self {
            inner: self.inner.with_converter(converter),
        }
    }
}

impl Input for FloatInput {
    fn base(&self) -> &InputBase {
        self.inner.base()
    }

    fn render_input(&self, value: &Value) -> String {
        self.inner.render_input(value)
    }
}

/// Multi-line text.
pub struct TextAreaInput {
    base: InputBase,
}

impl TextAreaInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label, NullConverter),
        }
    }
}

impl Input for TextAreaInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn render_input(&self, value: &Value) -> String {
        format!(
            r#"<textarea class="{classes}" id="{id}" name="{id}" style="height:200px;">{value}</textarea>"#,
            classes = self.input_classes(),
            id = self.base.info.id(),
            value = escape(&form_text(value)),
        )
    }
}

input_builders!(TextInput, NumberInput, TextAreaInput);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::FormData,
        converter::{OptionalConverter, ReceiverKeysConverter},
        error::{ConvertError, FormError},
    };
    use serde_json::{Map, json};

    fn config(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_text_render() {
        let input = TextInput::new("receiver_name", "Receiver name").with_infotext("shown on top");
        let html = input.render(&config(json!({"receiver_name": "My \"SDR\""})));
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"name="receiver_name""#));
        assert!(html.contains(r#"value="My &quot;SDR&quot;""#));
        assert!(html.contains("<small>shown on top</small>"));
    }

    #[test]
    fn test_text_render_absent_value() {
        let input = TextInput::new("receiver_name", "Receiver name");
        assert!(input.render(&Map::new()).contains(r#"value="""#));
    }

    #[test]
    fn test_absent_key_is_no_op() {
        let input = TextInput::new("receiver_name", "Receiver name");
        let update = input.parse(&FormData::new()).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_text_parse_takes_first_value() {
        let input = TextInput::new("receiver_name", "Receiver name");
        let data: FormData = [("receiver_name", "one"), ("receiver_name", "two")]
            .into_iter()
            .collect();
        let update = input.parse(&data).unwrap();
        assert_eq!(update.get("receiver_name"), Some(&json!("one")));
    }

    #[test]
    fn test_number_input() {
        let input = NumberInput::new("port", "Port").with_append("TCP");
        let html = input.render(&config(json!({"port": 8073})));
        assert!(html.contains(r#"type="number""#));
        assert!(html.contains(r#"value="8073""#));
        assert!(html.contains(r#"<span class="input-group-text">TCP</span>"#));
        assert!(!html.contains("step="));

        let data: FormData = [("port", "8080")].into_iter().collect();
        assert_eq!(input.parse(&data).unwrap().get("port"), Some(&json!(8080)));
    }

    #[test]
    fn test_number_parse_error_names_field() {
        let input = NumberInput::new("port", "Port");
        let data: FormData = [("port", "eighty")].into_iter().collect();
        assert_eq!(
            input.parse(&data),
            Err(FormError::Convert {
                id: "port".to_string(),
                source: ConvertError::InvalidValue {
                    expected: "integer",
                    actual: "eighty".to_string()
                }
            })
        );
    }

    #[test]
    fn test_optional_number() {
        let input = NumberInput::new("max_clients", "Max clients")
            .with_converter(OptionalConverter::new(IntConverter));
        assert!(input.render(&Map::new()).contains(r#"value="""#));
        let data: FormData = [("max_clients", "")].into_iter().collect();
        assert_eq!(input.parse(&data).unwrap().get("max_clients"), Some(&Value::Null));
    }

    #[test]
    fn test_float_input() {
        let input = FloatInput::new("squelch", "Squelch").with_append("dB");
        let html = input.render(&config(json!({"squelch": -150.5})));
        assert!(html.contains(r#"step="any""#));
        assert!(html.contains(r#"value="-150.5""#));
        assert!(html.contains("dB"));

        let data: FormData = [("squelch", "-140.25")].into_iter().collect();
        assert_eq!(input.parse(&data).unwrap().get("squelch"), Some(&json!(-140.25)));
    }

    #[test]
    fn test_text_area_with_keys() {
        let input = TextAreaInput::new("receiver_keys", "Receiver keys")
            .with_converter(ReceiverKeysConverter);
        let html = input.render(&config(json!({"receiver_keys": ["k1", "k2"]})));
        assert!(html.contains("<textarea"));
        assert!(html.contains(">k1\nk2</textarea>"));

        let data: FormData = [("receiver_keys", "k1\r\nk3\r\n")].into_iter().collect();
        assert_eq!(
            input.parse(&data).unwrap().get("receiver_keys"),
            Some(&json!(["k1", "k3"]))
        );
    }
}
