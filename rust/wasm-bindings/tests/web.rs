// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser tests for the configurator API. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use wardrobe_lite_wasm::ConfiguratorAPI;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(obj: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).unwrap()
}

fn soffit_config() -> JsValue {
    js_sys::JSON::parse(
        r#"{"width": 4800, "height": 2400, "depth": 600,
            "soffit": {"side": "Left", "width": 900, "height": 300},
            "requestedSlotCount": 6}"#,
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn compute_layout_returns_plain_object() {
    let api = ConfiguratorAPI::new();
    let layout = api.compute_layout(soffit_config()).unwrap();

    let slots = js_sys::Array::from(&get(&layout, "slots"));
    assert_eq!(slots.length(), 7);
    let dimensions = get(&layout, "dimensions");
    assert_eq!(get(&dimensions, "soffitInnerWidth").as_f64(), Some(850.0));
    assert_eq!(get(&dimensions, "topInnerWidth").as_f64(), Some(3850.0));
}

#[wasm_bindgen_test]
fn meters_at_the_boundary() {
    let api = ConfiguratorAPI::new();
    let layout = api.compute_layout_in_meters(soffit_config()).unwrap();
    assert_eq!(get(&layout, "width").as_f64(), Some(4.8));
    assert_eq!(get(&layout, "unit").as_string().as_deref(), Some("Meter"));
}

#[wasm_bindgen_test]
fn labels_are_formatted() {
    let api = ConfiguratorAPI::new();
    let labels = api.dimension_labels(soffit_config()).unwrap();
    assert_eq!(
        get(&labels, "soffitInnerWidth").as_string().as_deref(),
        Some("850 mm")
    );
    assert_eq!(get(&labels, "slotCount").as_f64(), Some(7.0));
}

#[wasm_bindgen_test]
fn infeasible_config_throws() {
    let api = ConfiguratorAPI::new();
    let config = js_sys::JSON::parse(r#"{"installationType": "SemiStanding"}"#).unwrap();
    assert!(api.compute_layout(config).is_err());
    assert!(api.compute_layout_json(r#"{"width": -5}"#).is_err());
}

#[wasm_bindgen_test]
fn api_reports_version_and_cache_size() {
    let api = ConfiguratorAPI::new();
    assert_eq!(api.version(), env!("CARGO_PKG_VERSION"));
    assert_eq!(api.cached_layouts(), 0);

    api.compute_layout(soffit_config()).unwrap();
    assert_eq!(api.cached_layouts(), 1);
}

#[wasm_bindgen_test]
fn slot_count_options_accept_any_maximum() {
    let api = ConfiguratorAPI::new();
    let defaults = api.default_config().unwrap();
    assert_eq!(get(&defaults, "requestedSlotCount").as_f64(), Some(1.0));

    let options = js_sys::Array::from(&api.slot_count_options(soffit_config(), u32::MAX).unwrap());
    let counts: Vec<f64> = options
        .iter()
        .map(|option| get(&option, "count").as_f64().unwrap())
        .collect();
    assert_eq!(counts.first(), Some(&7.0));
    assert_eq!(api.cached_layouts(), 1);
}
