use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CompositeInput, FieldInfo};
use crate::{
    config::{ConfigSource, FormData},
    converter::{Converter, FloatConverter},
    error::{FormError, Result},
    markup::{escape, form_text},
};

/// Configuration key holding the API key for the map widget.
pub const MAP_API_KEY_SETTING: &str = "google_maps_api_key";

const AXES: [&str; 2] = ["lat", "lon"];

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Receiver location, edited as separate latitude and longitude inputs plus
/// a map placeholder.
///
/// Submitted as `"{id}-lat"` and `"{id}-lon"`. Both keys missing leaves the
/// stored location unchanged; only one of them missing is an error.
pub struct LocationInput {
    info: FieldInfo,
}

impl LocationInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            info: FieldInfo::new(id, label),
        }
    }

    pub fn with_infotext(mut self, infotext: impl Into<String>) -> Self {
        self.info.set_infotext(infotext);
        self
    }

    fn sub_id(&self, axis: &str) -> String {
        format!("{}-{}", self.info.id(), axis)
    }

    fn render_sub_input(&self, axis: &str, value: &Value) -> String {
        format!(
            r#"<div class="col">
    <input type="number" class="{classes}" id="{id}" name="{id}" placeholder="{label}" value="{value}" step="any">
</div>"#,
            classes = self.input_classes(),
            id = self.sub_id(axis),
            label = self.info.label(),
            value = escape(&form_text(value.get(axis).unwrap_or(&Value::Null))),
        )
    }
}

impl CompositeInput for LocationInput {
    fn info(&self) -> &FieldInfo {
        &self.info
    }

    fn keys(&self) -> Vec<String> {
        AXES.iter().map(|axis| self.sub_id(axis)).collect()
    }

    fn render_inputs(&self, value: &Value, config: &dyn ConfigSource) -> String {
        let inputs: String = AXES
            .iter()
            .map(|axis| self.render_sub_input(axis, value))
            .collect();
        let api_key = config
            .get_value(MAP_API_KEY_SETTING)
            .map(form_text)
            .unwrap_or_default();
        format!(
            r#"<div class="row">
    {inputs}
</div>
<div class="row">
    <div class="col map-input" data-key="{key}" for="{id}"></div>
</div>"#,
            key = escape(&api_key),
            id = self.info.id(),
        )
    }

    fn parse_value(&self, data: &FormData) -> Result<Option<Value>> {
        let id = self.info.id();
        let keys = self.keys();
        let missing: Vec<&String> = keys.iter().filter(|key| !data.contains(key)).collect();
        if missing.len() == keys.len() {
            return Ok(None);
        }
        if let Some(key) = missing.first() {
            return Err(FormError::MissingField {
                id: id.to_string(),
                key: key.to_string(),
            });
        }
        let parse = |raw: &str| -> Result<f64> {
            let value = FloatConverter
                .from_form(raw)
                .map_err(|e| FormError::convert(id, e))?;
            // FloatConverter only yields finite numbers
            Ok(value.as_f64().unwrap_or_default())
        };
        let raw = |axis: &str| data.first(&self.sub_id(axis)).unwrap_or_default();
        let location = Location {
            lat: parse(raw("lat"))?,
            lon: parse(raw("lon"))?,
        };
        Ok(Some(serde_json::json!(location)))
    }
}
