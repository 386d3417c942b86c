//! Titled groups of fields rendered and parsed together.

use crate::{
    config::{ConfigSource, FormData, Update},
    error::Result,
    input::{CompositeInput, Field, Input},
};

/// An ordered group of fields under a common heading.
pub struct Section {
    title: String,
    fields: Vec<Field>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a single-key input.
    pub fn with_input(mut self, input: impl Input + 'static) -> Self {
        self.fields.push(Field::input(input));
        self
    }

    /// Appends a composite input.
    pub fn with_composite(mut self, input: impl CompositeInput + 'static) -> Self {
        self.fields.push(Field::composite(input));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn render(&self, config: &dyn ConfigSource) -> String {
        let fields: String = self.fields.iter().map(|f| f.render(config)).collect();
        format!(
            r#"<div class="settings-section">
<h3 class="settings-header">{title}</h3>
<div class="settings-body">
{fields}
</div>
</div>"#,
            title = self.title,
        )
    }

    /// Parses every field and merges the results into one update.
    ///
    /// Stops at the first field that fails to parse.
    pub fn parse(&self, data: &FormData) -> Result<Update> {
        let mut update = Update::new();
        for field in &self.fields {
            update.extend(field.parse(data)?);
        }
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CheckboxInput, LocationInput, NumberInput, TextInput};
    use serde_json::{Map, Value, json};

    fn section() -> Section {
        Section::new("Receiver")
            .with_input(TextInput::new("receiver_name", "Name"))
            .with_input(NumberInput::new("receiver_asl", "Altitude").with_append("m"))
            .with_input(CheckboxInput::new("allow_audio", "Audio", "Allow audio"))
            .with_composite(LocationInput::new("receiver_gps", "Location"))
    }

    #[test]
    fn test_render_in_declaration_order() {
        let html = section().render(&Map::new());
        assert!(html.contains(r#"<h3 class="settings-header">Receiver</h3>"#));
        let name = html.find(r#"name="receiver_name""#).unwrap();
        let asl = html.find(r#"name="receiver_asl""#).unwrap();
        let gps = html.find(r#"name="receiver_gps-lat""#).unwrap();
        assert!(name < asl && asl < gps);
    }

    #[test]
    fn test_parse_merges_fields() {
        let data: FormData = [
            ("receiver_name", "Rooftop"),
            ("receiver_asl", "120"),
            ("receiver_gps-lat", "48.1"),
            ("receiver_gps-lon", "11.6"),
        ]
        .into_iter()
        .collect();
        let update = section().parse(&data).unwrap();
        assert_eq!(
            Value::Object(update),
            json!({
                "receiver_name": "Rooftop",
                "receiver_asl": 120,
                "allow_audio": false,
                "receiver_gps": {"lat": 48.1, "lon": 11.6},
            })
        );
    }

    #[test]
    fn test_parse_stops_at_first_error() {
        let data: FormData = [("receiver_asl", "high")].into_iter().collect();
        assert!(section().parse(&data).is_err());
    }
}
