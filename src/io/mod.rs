// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! I/O module - schematic and JSON rendering

mod json;
mod schematic;

pub use json::to_json;
pub use schematic::{layer_color, render_schematic, PALETTE};
