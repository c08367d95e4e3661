// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Utility functions

pub mod math;

pub use math::{ceil_mm, fmt_coord};
