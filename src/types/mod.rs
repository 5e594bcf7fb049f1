// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types describing a device's kind and reported condition.
//!
//! Both enums are closed parse tables: every representation (wire name,
//! textual token, numeric code) maps to exactly one variant, and any other
//! input is rejected.

mod category;
mod state;

pub use category::DeviceCategory;
pub use state::DeviceState;
