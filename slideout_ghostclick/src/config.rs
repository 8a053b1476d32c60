// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filter tuning.

use core::time::Duration;

/// Tuning for [`GhostClickFilter`](crate::filter::GhostClickFilter).
///
/// The defaults match the delay and slop that mobile browsers use for their
/// synthesized clicks and should rarely need changing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FilterConfig {
    /// How long a recorded synthetic tap keeps suppressing nearby clicks.
    pub window: Duration,
    /// Half-width of the square suppression box around a recorded tap.
    ///
    /// A click is suppressed only when both `|dx|` and `|dy|` are strictly less than this.
    pub radius: f64,
}

impl FilterConfig {
    /// Default suppression window.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);
    /// Default suppression box half-width.
    pub const DEFAULT_RADIUS: f64 = 25.0;
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
            radius: Self::DEFAULT_RADIUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_ghost_click_timing() {
        let c = FilterConfig::default();
        assert_eq!(c.window, Duration::from_millis(1000));
        assert_eq!(c.radius, 25.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let c: FilterConfig = serde_json::from_str(r#"{ "radius": 10.0 }"#).unwrap();
        assert_eq!(c.radius, 10.0);
        assert_eq!(c.window, FilterConfig::DEFAULT_WINDOW);
    }
}
