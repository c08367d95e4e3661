// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Segtorus Inc.

//! Calculator API with memoized recomputation

use crate::error::Result;
use crate::geometry::{measure, Measurements, TorusParameters};
use std::sync::Arc;
use tracing::debug;

/// Recomputes measurements only when the input tuple changes.
///
/// Holds a single entry keyed by value; any change of any parameter replaces
/// it wholesale.
#[derive(Debug, Default)]
pub struct Calculator {
    cached: Option<(TorusParameters, Arc<Measurements>)>,
    hits: u64,
    misses: u64,
}

impl Calculator {
    /// Create a new calculator with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Measurements for `params`, reusing the previous result when the
    /// parameters are unchanged. Errors are never cached.
    pub fn measure(&mut self, params: &TorusParameters) -> Result<Arc<Measurements>> {
        if let Some((key, measurements)) = &self.cached {
            if key == params {
                self.hits += 1;
                debug!(hits = self.hits, "measurement cache hit");
                return Ok(Arc::clone(measurements));
            }
        }

        self.misses += 1;
        debug!(misses = self.misses, "measurement cache miss");

        // Drop the stale entry first so a failed computation cannot leave it behind
        self.cached = None;
        let measurements = Arc::new(measure(params)?);
        self.cached = Some((*params, Arc::clone(&measurements)));

        Ok(measurements)
    }

    /// Parameters of the cached result, if any
    pub fn cached_parameters(&self) -> Option<&TorusParameters> {
        self.cached.as_ref().map(|(params, _)| params)
    }

    /// Drop the cached result
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Get cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f32 / total as f32) * 100.0
        }
    }
}
