// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only view of the host page system.
//!
//! The controller never mutates the host directly. It reads host state through
//! [`PageHost`] and describes every mutation as an [`Effect`](crate::effect::Effect).

use alloc::string::String;

use crate::content::MenuContent;
use crate::refresh::canonical_page_address;
use crate::types::{FixedRegions, MenuId, PageKey};

/// Host page system queried by the controller.
///
/// Implement this over your navigation framework and pass it by reference into each
/// controller call.
pub trait PageHost {
    /// Page identifier used by the host.
    type PageId: PageKey;

    /// The currently visible main page.
    fn active_page(&self) -> Option<Self::PageId>;

    /// Returns `true` while the location shows the reserved [`MENU_FRAGMENT`](crate::types::MENU_FRAGMENT).
    fn location_is_menu(&self) -> bool;

    /// URL of the navigation history's active entry (the page being navigated to).
    fn current_url(&self) -> Option<&str>;

    /// Address the host assigned to `page`.
    fn page_url(&self, page: Self::PageId) -> Option<&str>;

    /// Menu content declared inside `page`, if any.
    fn declared_menu(&self, page: Self::PageId) -> Option<MenuContent>;

    /// Process-wide default menu content declared outside any page, if any.
    fn default_menu(&self) -> Option<MenuContent>;

    /// Fixed header/footer regions of `page`.
    fn fixed_regions(&self, page: Self::PageId) -> FixedRegions;

    /// Width of the menu container; the main page slides by this much.
    fn container_width(&self) -> f64;

    /// Natural rendered height of `menu`; zero when not rendered or empty.
    fn menu_height(&self, menu: MenuId) -> f64;

    /// Normalize a URL to the host's canonical page address.
    fn canonical_address(&self, url: &str) -> String {
        canonical_page_address(url)
    }
}
