// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use alloc::string::String;
use core::time::Duration;

use slideout_ghostclick::FilterConfig;

/// Settings for a [`Slideout`](crate::controller::Slideout).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SlideoutConfig {
    /// Slide the main page instead of jumping. Pages with fixed header/footer never animate.
    pub enable_animation: bool,
    /// How long the close slide runs before the container is hidden.
    pub close_delay: Duration,
    /// Delay before a navigation deferred by an open menu is replayed.
    pub replay_delay: Duration,
    /// Icon given to items that do not declare one.
    pub icon: String,
    /// Icon shadow applied to every non-divider item.
    pub icon_shadow: bool,
    /// Ghost-click filter tuning.
    pub filter: FilterConfig,
}

impl Default for SlideoutConfig {
    fn default() -> Self {
        Self {
            enable_animation: true,
            close_delay: Duration::from_millis(200),
            replay_delay: Duration::from_millis(200),
            icon: String::from("arrow-r"),
            icon_shadow: false,
            filter: FilterConfig::default(),
        }
    }
}
