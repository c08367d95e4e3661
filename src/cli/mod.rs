// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! CLI subsystem for Segtorus

pub mod logging;
pub mod reporter;

pub use logging::init_logging;
pub use reporter::Reporter;
