// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Errors for layout resolution.
//!
//! The engine shares the core error taxonomy: every failure is an
//! [`Error::InvalidConfig`] carrying the [`ConfigIssue`] that caused it.

pub use wardrobe_lite_core::{ConfigIssue, Error, Result};
