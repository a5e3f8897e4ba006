// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wardrobe-Lite Processing
//!
//! Shared layout pipeline used by the UI bindings: memoized layout
//! computation, parallel batches, slot-count previews and JSON output.

pub mod cache;
pub mod config;
pub mod error;
pub mod processor;

pub use cache::{config_hash, LayoutCache};
pub use config::ProcessorConfig;
pub use error::{Error, ErrorReport, Result};
pub use processor::{LayoutProcessor, SlotCountOption};
