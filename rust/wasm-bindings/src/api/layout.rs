// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layout methods for Wardrobe-Lite API

use super::{dimension_labels_to_js, to_js, to_js_error, ConfiguratorAPI};
use crate::utils::parse_unit;
use std::sync::Arc;
use wardrobe_lite_core::{LengthUnit, SpaceConfig};
use wardrobe_lite_geometry::LayoutSummary;
use wasm_bindgen::prelude::*;

impl ConfiguratorAPI {
    fn config_from_js(config: JsValue) -> Result<SpaceConfig, JsError> {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid space configuration: {}", e)))
    }

    fn layout_for(&self, config: &SpaceConfig) -> Result<Arc<LayoutSummary>, JsError> {
        let layout = self.processor.compute(config).map_err(to_js_error)?;

        if let Some(resolution) = layout.slot_count_adjusted() {
            web_sys::console::debug_1(
                &format!(
                    "[WARDROBE-LITE] {} doors requested, {} fit ({:?})",
                    resolution.requested, resolution.count, resolution.adjustment
                )
                .into(),
            );
        }
        Ok(layout)
    }
}

#[wasm_bindgen]
impl ConfiguratorAPI {
    /// Compute the layout for a space configuration, lengths in millimetres
    ///
    /// Missing fields take their defaults. Throws on an infeasible
    /// configuration; the caller should keep its previous layout.
    ///
    /// Example:
    /// ```javascript
    /// const api = new ConfiguratorAPI();
    /// const layout = api.computeLayout({
    ///   width: 4800, height: 2400, depth: 600,
    ///   installationType: 'BuiltIn',
    ///   soffit: { side: 'Left', width: 900, height: 300 },
    ///   requestedSlotCount: 6,
    /// });
    /// console.log(layout.slots.length, layout.dimensions.soffitInnerWidth);
    /// ```
    #[wasm_bindgen(js_name = computeLayout)]
    pub fn compute_layout(&self, config: JsValue) -> Result<JsValue, JsError> {
        let config = Self::config_from_js(config)?;
        let layout = self.layout_for(&config)?;
        to_js(&*layout)
    }

    /// Compute the layout with every length converted to `unit` ("mm", "cm" or "m")
    #[wasm_bindgen(js_name = computeLayoutIn)]
    pub fn compute_layout_in(&self, config: JsValue, unit: &str) -> Result<JsValue, JsError> {
        let unit = parse_unit(unit).ok_or_else(|| JsError::new(&format!("Unknown unit: {}", unit)))?;
        let config = Self::config_from_js(config)?;
        let layout = self.layout_for(&config)?;
        to_js(&layout.to_unit(unit))
    }

    /// Compute the layout in metres for the 3D scene
    #[wasm_bindgen(js_name = computeLayoutInMeters)]
    pub fn compute_layout_in_meters(&self, config: JsValue) -> Result<JsValue, JsError> {
        let config = Self::config_from_js(config)?;
        let layout = self.layout_for(&config)?;
        to_js(&layout.to_unit(LengthUnit::Meter))
    }

    /// JSON in, JSON out variant of `computeLayout`
    #[wasm_bindgen(js_name = computeLayoutJson)]
    pub fn compute_layout_json(&self, config_json: &str) -> Result<String, JsError> {
        self.processor
            .compute_json_str(config_json, LengthUnit::Millimeter)
            .map_err(to_js_error)
    }

    /// Formatted clear-opening labels, e.g. `{ topInnerWidth: "3850 mm", ... }`
    #[wasm_bindgen(js_name = dimensionLabels)]
    pub fn dimension_labels(&self, config: JsValue) -> Result<JsValue, JsError> {
        let config = Self::config_from_js(config)?;
        let layout = self.layout_for(&config)?;
        Ok(dimension_labels_to_js(&layout.dimensions))
    }

    /// Reachable door counts for requests `1..=maxRequested`
    ///
    /// Returns `[{ requested, count, width, adjustment }, ...]` ordered by count.
    #[wasm_bindgen(js_name = slotCountOptions)]
    pub fn slot_count_options(&self, config: JsValue, max_requested: u32) -> Result<JsValue, JsError> {
        let config = Self::config_from_js(config)?;
        let options = self
            .processor
            .slot_count_options(&config, max_requested)
            .map_err(to_js_error)?;
        to_js(&options)
    }

    /// Default space configuration, as a starting point for the UI
    #[wasm_bindgen(js_name = defaultConfig)]
    pub fn default_config(&self) -> Result<JsValue, JsError> {
        to_js(&SpaceConfig::default())
    }
}
