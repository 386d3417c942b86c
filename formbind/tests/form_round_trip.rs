use formbind::{
    FormData, FormError, Section, Value,
    converter::ReceiverKeysConverter,
    enums::{AprsAntennaDirections, AprsBeaconSymbols},
    input::{CheckboxInput, DropdownInput, LocationInput, MultiCheckboxInput, TextAreaInput},
    merge_update,
};
use serde_json::{Map, json};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn aprs_section() -> Section {
    Section::new("APRS")
        .with_input(CheckboxInput::new("aprs_igate_enabled", "IGate", "Send received packets"))
        .with_input(DropdownInput::from_enum::<AprsBeaconSymbols>(
            "aprs_igate_symbol",
            "Symbol",
        ))
        .with_input(DropdownInput::from_enum::<AprsAntennaDirections>(
            "aprs_igate_dir",
            "Antenna direction",
        ))
        .with_composite(LocationInput::new("receiver_gps", "Location"))
        .with_input(MultiCheckboxInput::js8_profiles("js8_enabled_profiles", "JS8 profiles"))
        .with_input(
            TextAreaInput::new("receiver_keys", "Keys").with_converter(ReceiverKeysConverter),
        )
}

fn snapshot(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn submitted_form_updates_store() {
    init_logger();
    let section = aprs_section();
    let mut store = snapshot(json!({
        "aprs_igate_enabled": true,
        "aprs_igate_symbol": "R&",
        "receiver_gps": {"lat": 0.0, "lon": 0.0},
        "js8_enabled_profiles": ["normal"],
        "unrelated": "kept",
    }));

    let html = section.render(&store);
    assert!(html.contains(r#"<option value="BeaconReceiveOnly" selected>"#));

    let data = FormData::from_urlencoded(
        "aprs_igate_symbol=BeaconWiresX&aprs_igate_dir=DirectionNe\
         &receiver_gps-lat=47.25&receiver_gps-lon=-8.5\
         &js8_enabled_profiles-turbo=on&js8_enabled_profiles-slow=on\
         &receiver_keys=abc%0D%0Adef%0D%0A",
    );
    let update = section.parse(&data).unwrap();
    merge_update(&mut store, update);

    assert_eq!(
        Value::Object(store),
        json!({
            "aprs_igate_enabled": false,
            "aprs_igate_symbol": "W&",
            "aprs_igate_dir": "NE",
            "receiver_gps": {"lat": 47.25, "lon": -8.5},
            "js8_enabled_profiles": ["slow", "turbo"],
            "receiver_keys": ["abc", "def"],
            "unrelated": "kept",
        })
    );
}

#[test]
fn rendering_then_resubmitting_keeps_values() {
    init_logger();
    let section = Section::new("Location")
        .with_composite(LocationInput::new("loc", "Location"));
    let store = snapshot(json!({"loc": {"lat": 1.5, "lon": 2.5}}));
    let html = section.render(&store);
    assert!(html.contains(r#"name="loc-lat" placeholder="Location" value="1.5""#));
    assert!(html.contains(r#"name="loc-lon" placeholder="Location" value="2.5""#));

    let data = FormData::from_urlencoded("loc-lat=1.5&loc-lon=2.5");
    assert_eq!(
        Value::Object(section.parse(&data).unwrap()),
        json!({"loc": {"lat": 1.5, "lon": 2.5}})
    );
}

#[test]
fn partial_location_is_rejected() {
    init_logger();
    let section = aprs_section();
    let data = FormData::from_urlencoded("receiver_gps-lon=3");
    assert_eq!(
        section.parse(&data),
        Err(FormError::MissingField {
            id: "receiver_gps".to_string(),
            key: "receiver_gps-lat".to_string(),
        })
    );
}
