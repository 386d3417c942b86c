use serde_json::{Value, json};
use strum::IntoEnumIterator;

use super::{CHECK_CLASSES, CompositeInput, FieldInfo};
use crate::{
    config::{ConfigSource, FormData},
    enums::{Q65_INTERVALS, Q65Mode},
    error::Result,
    markup::{checked_attr, form_text},
    option::DropdownEnum,
};

/// Grid of checkboxes selecting Q65 (interval, mode) combinations.
///
/// The value is a list of `[interval, mode name]` pairs, e.g.
/// `[[60, "A"], [120, "E"]]`. Each cell is submitted as
/// `"{id}-{mode value}-{interval}"`.
pub struct Q65ModeMatrix {
    info: FieldInfo,
}

impl Q65ModeMatrix {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            info: FieldInfo::new(id, label),
        }
    }

    pub fn with_infotext(mut self, infotext: impl Into<String>) -> Self {
        self.info.set_infotext(infotext);
        self
    }

    /// Form key of the checkbox for one cell.
    pub fn checkbox_id(&self, mode: Q65Mode, interval: u32) -> String {
        format!("{}-{}-{}", self.info.id(), form_text(&mode.value()), interval)
    }

    /// All cells in render order: interval-major, then mode.
    fn cells() -> impl Iterator<Item = (u32, Q65Mode)> {
        Q65_INTERVALS
            .into_iter()
            .flat_map(|interval| Q65Mode::iter().map(move |mode| (interval, mode)))
    }

    fn render_checkbox(&self, mode: Q65Mode, interval: u32, selected: &[Value]) -> String {
        let checked = selected.contains(&json!([interval, mode.name()]));
        format!(
            r#"<div class="{classes}">
    <input class="form-check-input" type="checkbox" id="{id}" name="{id}" {checked}>
    <label class="form-check-label" for="{id}">Mode {mode} interval {interval}s</label>
</div>"#,
            classes = self.input_classes(),
            id = self.checkbox_id(mode, interval),
            checked = checked_attr(checked),
            mode = mode.name(),
        )
    }
}

impl CompositeInput for Q65ModeMatrix {
    fn info(&self) -> &FieldInfo {
        &self.info
    }

    fn input_classes(&self) -> &'static str {
        CHECK_CLASSES
    }

    fn keys(&self) -> Vec<String> {
        Self::cells()
            .map(|(interval, mode)| self.checkbox_id(mode, interval))
            .collect()
    }

    fn render_inputs(&self, value: &Value, _config: &dyn ConfigSource) -> String {
        let selected = value.as_array().map(Vec::as_slice).unwrap_or_default();
        let checkboxes: String = Self::cells()
            .map(|(interval, mode)| self.render_checkbox(mode, interval, selected))
            .collect();
        format!(
            r#"<div class="matrix q65-matrix">
    {checkboxes}
</div>"#
        )
    }

    /// Unchecked cells are never submitted, so the result is always a
    /// definite (possibly empty) list.
    fn parse_value(&self, data: &FormData) -> Result<Option<Value>> {
        let selected: Vec<Value> = Self::cells()
            .zip(self.keys())
            .filter(|(_, key)| data.is_checked(key))
            .map(|((interval, mode), _)| json!([interval, mode.name()]))
            .collect();
        Ok(Some(Value::Array(selected)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn config(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_render_cells() {
        let input = Q65ModeMatrix::new("q65_enabled_combinations", "Q65 combinations");
        let html = input.render(&config(json!({
            "q65_enabled_combinations": [[60, "A"], [120, "E"]]
        })));
        assert_eq!(html.matches(r#"type="checkbox""#).count(), 25);
        assert!(html.contains(r#"name="q65_enabled_combinations-1-60" checked>"#));
        assert!(html.contains(r#"name="q65_enabled_combinations-5-120" checked>"#));
        assert!(html.contains(r#"name="q65_enabled_combinations-1-120" >"#));
        assert!(html.contains("Mode E interval 120s"));
        assert_eq!(html.matches(" checked>").count(), 2);
    }

    #[test]
    fn test_parse_selected_cells() {
        let input = Q65ModeMatrix::new("q65", "Q65");
        let data: FormData = [("q65-5-120", "on"), ("q65-2-15", "on"), ("q65-1-60", "on")]
            .into_iter()
            .collect();
        let update = input.parse(&data).unwrap();
        assert_eq!(
            update.get("q65"),
            Some(&json!([[15, "B"], [60, "A"], [120, "E"]]))
        );
    }

    #[test]
    fn test_keys_follow_render_order() {
        let input = Q65ModeMatrix::new("q65", "Q65");
        let keys = input.keys();
        assert_eq!(keys.len(), 25);
        assert_eq!(keys[0], "q65-1-15");
        assert_eq!(keys[5], "q65-1-30");
        assert_eq!(keys[24], "q65-5-300");
        let html = input.render(&Map::new());
        let positions: Vec<usize> = keys
            .iter()
            .map(|key| html.find(&format!(r#"name="{key}""#)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_nothing_checked() {
        let input = Q65ModeMatrix::new("q65", "Q65");
        assert_eq!(input.parse(&FormData::new()).unwrap().get("q65"), Some(&json!([])));
    }

    #[test]
    fn test_round_trip() {
        let input = Q65ModeMatrix::new("q65", "Q65");
        let stored = json!([[30, "C"], [300, "D"]]);
        let html = input.render(&config(json!({"q65": stored.clone()})));
        let data: FormData = input
            .keys()
            .into_iter()
            .filter(|key| html.contains(&format!(r#"name="{key}" checked>"#)))
            .map(|key| (key, "on"))
            .collect();
        assert_eq!(input.parse(&data).unwrap().get("q65"), Some(&stored));
    }
}
