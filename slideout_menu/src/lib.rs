// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slideout Menu: an off-canvas navigation menu that follows the host's page history.
//!
//! ## Overview
//!
//! The main page slides aside to reveal a menu panel. Each page may declare its own menu;
//! pages without one show a process-wide default. Menus can nest submenus, fold lists
//! under collapsible headers, and mark the item matching the current page.
//!
//! This crate is the controller only. It does not render and never touches a DOM:
//! - The host implements [`PageHost`](crate::host::PageHost) so the controller can read
//!   the active page, the location, and menu geometry.
//! - Every mutation comes back as an [`Effect`](crate::effect::Effect) for the host to
//!   apply, in order, after each call.
//! - Time is passed in. Call [`Slideout::advance`](crate::controller::Slideout::advance)
//!   when [`next_deadline`](crate::controller::Slideout::next_deadline) comes due.
//!
//! ## History
//!
//! Opening is driven through the location: [`toggle`](crate::controller::Slideout::toggle)
//! sets the reserved [`MENU_FRAGMENT`](crate::types::MENU_FRAGMENT), and the navigation
//! bridge opens the menu when the host reports it. A navigation that starts while the menu
//! is open is held back, the menu closes, and the navigation is replayed once the slide
//! has finished.
//!
//! ## Ghost clicks
//!
//! Taps the controller consumes (toggler, close-on-tap, list headers, submenu controls)
//! are recorded with the shared
//! [`GhostClickFilter`](slideout_ghostclick::GhostClickFilter). Route real clicks through
//! [`Slideout::on_click`](crate::controller::Slideout::on_click).
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use slideout_menu::{
//!     Effect, FixedRegions, MenuContent, MenuId, MenuItem, MenuList, PageHost, Slideout,
//! };
//!
//! struct Host;
//!
//! impl PageHost for Host {
//!     type PageId = u32;
//!     fn active_page(&self) -> Option<u32> { Some(1) }
//!     fn location_is_menu(&self) -> bool { false }
//!     fn current_url(&self) -> Option<&str> { Some("/inbox") }
//!     fn page_url(&self, _: u32) -> Option<&str> { Some("/inbox") }
//!     fn declared_menu(&self, _: u32) -> Option<MenuContent> { None }
//!     fn default_menu(&self) -> Option<MenuContent> {
//!         Some(MenuContent::new(vec![MenuList::new(vec![
//!             MenuItem::link("Inbox", "/inbox"),
//!             MenuItem::link("Sent", "/sent"),
//!         ])]))
//!     }
//!     fn fixed_regions(&self, _: u32) -> FixedRegions { FixedRegions::NONE }
//!     fn container_width(&self) -> f64 { 260.0 }
//!     fn menu_height(&self, _: MenuId) -> f64 { 400.0 }
//! }
//!
//! let host = Host;
//! let mut menu = Slideout::default();
//! menu.init(&host);
//! assert!(menu.open(&host));
//!
//! // The item for the current page is marked.
//! let id = menu.active_menu().unwrap();
//! let content = menu.registry().get(id).unwrap().content();
//! let inbox = content.find("Inbox").unwrap();
//! assert!(content.item(inbox).unwrap().is_active());
//!
//! // Closing is logical at once; the container hides after the slide.
//! assert!(menu.close(&host, Duration::ZERO));
//! assert!(!menu.is_open());
//! menu.drain_effects();
//! menu.advance(Duration::from_millis(200));
//! assert!(menu.drain_effects().contains(&Effect::HideContainer));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and the ghost-click filter.
//! - `libm`: math on `no_std` targets through Kurbo.
//! - `serde`: (de)serialize [`SlideoutConfig`](crate::config::SlideoutConfig).

#![no_std]

extern crate alloc;

pub mod bridge;
pub mod collapsible;
pub mod config;
pub mod content;
pub mod controller;
pub mod effect;
pub mod error;
pub mod host;
pub mod input;
pub mod instance;
pub mod refresh;
pub mod registry;
pub mod timer;
pub mod types;

pub use config::SlideoutConfig;
pub use content::{
    CollapsibleSpec, ItemFlags, ItemRef, ItemRole, ListHeader, MenuContent, MenuItem, MenuList,
};
pub use controller::{PendingNavigation, Slideout};
pub use effect::Effect;
pub use error::MenuError;
pub use host::PageHost;
pub use instance::MenuInstance;
pub use refresh::canonical_page_address;
pub use registry::MenuRegistry;
pub use slideout_ghostclick::{ClickVerdict, FilterConfig, GhostClickFilter};
pub use timer::{TaskId, TimerQueue};
pub use types::{
    FixedRegion, FixedRegions, MENU_FRAGMENT, MenuEvent, MenuId, NavDecision, NavEvent,
    NavOptions, NavTarget, PageHeight, PageKey,
};

#[cfg(test)]
pub(crate) mod testing {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::content::{MenuContent, MenuItem, MenuList};
    use crate::host::PageHost;
    use crate::types::{FixedRegions, MenuId};

    /// In-memory host: page 1 is active, the container is 260 wide, menus are 480 tall.
    #[derive(Clone, Debug)]
    pub(crate) struct FakeHost {
        pub(crate) active: Option<u32>,
        pub(crate) location_menu: bool,
        pub(crate) current: Option<String>,
        pub(crate) urls: BTreeMap<u32, String>,
        pub(crate) declared: BTreeMap<u32, MenuContent>,
        pub(crate) default: Option<MenuContent>,
        pub(crate) regions: BTreeMap<u32, FixedRegions>,
        pub(crate) heights: BTreeMap<MenuId, f64>,
    }

    impl FakeHost {
        pub(crate) fn new() -> Self {
            let mut urls = BTreeMap::new();
            urls.insert(1, String::from("/start"));
            Self {
                active: Some(1),
                location_menu: false,
                current: None,
                urls,
                declared: BTreeMap::new(),
                default: None,
                regions: BTreeMap::new(),
                heights: BTreeMap::new(),
            }
        }

        pub(crate) fn with_default(mut self, content: MenuContent) -> Self {
            self.default = Some(content);
            self
        }

        pub(crate) fn with_page(mut self, page: u32, url: &str, menu: Option<MenuContent>) -> Self {
            self.urls.insert(page, String::from(url));
            if let Some(menu) = menu {
                self.declared.insert(page, menu);
            }
            self
        }
    }

    impl PageHost for FakeHost {
        type PageId = u32;

        fn active_page(&self) -> Option<u32> {
            self.active
        }

        fn location_is_menu(&self) -> bool {
            self.location_menu
        }

        fn current_url(&self) -> Option<&str> {
            self.current.as_deref()
        }

        fn page_url(&self, page: u32) -> Option<&str> {
            self.urls.get(&page).map(String::as_str)
        }

        fn declared_menu(&self, page: u32) -> Option<MenuContent> {
            self.declared.get(&page).cloned()
        }

        fn default_menu(&self) -> Option<MenuContent> {
            self.default.clone()
        }

        fn fixed_regions(&self, page: u32) -> FixedRegions {
            self.regions.get(&page).copied().unwrap_or_default()
        }

        fn container_width(&self) -> f64 {
            260.0
        }

        fn menu_height(&self, menu: MenuId) -> f64 {
            self.heights.get(&menu).copied().unwrap_or(480.0)
        }
    }

    /// One plain list of links.
    pub(crate) fn link_menu(links: &[(&str, &str)]) -> MenuContent {
        let items: Vec<MenuItem> = links
            .iter()
            .map(|&(label, href)| MenuItem::link(label, href))
            .collect();
        MenuContent::new(alloc::vec![MenuList::new(items)])
    }
}
