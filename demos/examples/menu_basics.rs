// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open and close the default menu and print the effects the host would apply.
//!
//! Run:
//! - `cargo run -p slideout_demos --example menu_basics`

use std::time::Duration;

use slideout_menu::{
    Effect, FixedRegions, MenuContent, MenuId, MenuItem, MenuList, PageHost, Slideout,
};
use tracing_subscriber::filter::LevelFilter;

struct Host {
    page: u32,
}

impl PageHost for Host {
    type PageId = u32;
    fn active_page(&self) -> Option<u32> {
        Some(self.page)
    }
    fn location_is_menu(&self) -> bool {
        false
    }
    fn current_url(&self) -> Option<&str> {
        Some("/inbox")
    }
    fn page_url(&self, _page: u32) -> Option<&str> {
        Some("/inbox")
    }
    fn declared_menu(&self, _page: u32) -> Option<MenuContent> {
        None
    }
    fn default_menu(&self) -> Option<MenuContent> {
        Some(MenuContent::new(vec![MenuList::new(vec![
            MenuItem::divider("Mail"),
            MenuItem::link("Inbox", "/inbox"),
            MenuItem::link("Sent", "/sent"),
            MenuItem::link("Drafts", "/drafts"),
        ])]))
    }
    fn fixed_regions(&self, _page: u32) -> FixedRegions {
        FixedRegions {
            header: Some(44.0),
            footer: None,
        }
    }
    fn container_width(&self) -> f64 {
        260.0
    }
    fn menu_height(&self, _menu: MenuId) -> f64 {
        420.0
    }
}

fn print(label: &str, effects: Vec<Effect<u32>>) {
    println!("{label}:");
    for e in effects {
        println!("  {e:?}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let host = Host { page: 1 };
    let mut menu = Slideout::default();
    menu.init(&host);
    print("init", menu.drain_effects());

    menu.open(&host);
    print("open", menu.drain_effects());

    let id = menu.active_menu().expect("default menu is active");
    let content = menu.registry().get(id).expect("active menu is registered").content();
    for (_, item) in content.items().filter(|(_, i)| i.is_active()) {
        println!("active item: {}", item.label);
    }

    // A fixed header disables the slide, so the close settles at once.
    menu.close(&host, Duration::from_millis(16));
    print("close", menu.drain_effects());
}
