// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JavaScript API for Wardrobe-Lite
//!
//! The browser UI and renderer treat this API as the single source of truth
//! for every displayed measurement.

mod layout;

use serde::Serialize;
use wardrobe_lite_geometry::DimensionTable;
use wardrobe_lite_processing::{LayoutProcessor, ProcessorConfig};
use wasm_bindgen::prelude::*;

/// Main Wardrobe-Lite API
#[wasm_bindgen]
pub struct ConfiguratorAPI {
    processor: LayoutProcessor,
}

#[wasm_bindgen]
impl ConfiguratorAPI {
    /// Create and initialize the configurator API
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        // No environment in the browser, so the processor runs on defaults
        Self {
            processor: LayoutProcessor::new(ProcessorConfig::from_lookup(|_| None)),
        }
    }

    /// Get version string
    #[wasm_bindgen(getter)]
    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Number of layouts currently memoized
    #[wasm_bindgen(getter, js_name = cachedLayouts)]
    pub fn cached_layouts(&self) -> usize {
        self.processor.cached_layouts()
    }
}

impl Default for ConfiguratorAPI {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize to a plain JS object (null for absent values, no Maps).
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("Failed to serialize result: {}", e)))
}

/// Convert a processing error into a JS error carrying its code.
fn to_js_error(err: wardrobe_lite_processing::Error) -> JsError {
    let report = err.report();
    web_sys::console::warn_1(&format!("[WARDROBE-LITE] {} ({})", report.error, report.code).into());
    JsError::new(&format!("{}: {}", report.code, report.error))
}

/// Safely set a property on a JavaScript object.
/// Returns true if successful, false otherwise.
#[inline]
fn set_js_prop(obj: &JsValue, key: &str, value: &JsValue) -> bool {
    js_sys::Reflect::set(obj, &JsValue::from_str(key), value).unwrap_or(false)
}

/// Convert a dimension table into `{ key: "4700 mm", ... }` for on-screen labels
fn dimension_labels_to_js(table: &DimensionTable) -> JsValue {
    let obj: JsValue = js_sys::Object::new().into();

    for entry in table.entries() {
        set_js_prop(&obj, entry.key.js_name(), &JsValue::from_str(&entry.text));
    }
    set_js_prop(&obj, "slotCount", &JsValue::from_f64(table.slot_count as f64));

    obj
}
