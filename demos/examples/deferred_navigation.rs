// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Follow a menu link while the `#menu` fragment is set.
//!
//! A tiny effect executor plays the host: it keeps the location, steps history back, and
//! feeds the resulting navigations to the controller. The link's navigation is held back
//! until the menu has closed and then issued exactly once.
//!
//! Run:
//! - `cargo run -p slideout_demos --example deferred_navigation`

use std::collections::BTreeMap;
use std::time::Duration;

use kurbo::Point;
use slideout_menu::{
    ClickVerdict, Effect, FixedRegions, ItemRef, MENU_FRAGMENT, MenuContent, MenuId, MenuItem,
    MenuList, NavDecision, NavEvent, NavOptions, NavTarget, PageHost, Slideout,
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug)]
struct Browser {
    page: u32,
    location: String,
    urls: BTreeMap<u32, String>,
}

impl Browser {
    fn page_at(&self, url: &str) -> Option<u32> {
        self.urls
            .iter()
            .find_map(|(&p, u)| (u.as_str() == url).then_some(p))
    }
}

impl PageHost for Browser {
    type PageId = u32;
    fn active_page(&self) -> Option<u32> {
        Some(self.page)
    }
    fn location_is_menu(&self) -> bool {
        self.location.ends_with(MENU_FRAGMENT)
    }
    fn current_url(&self) -> Option<&str> {
        Some(&self.location)
    }
    fn page_url(&self, page: u32) -> Option<&str> {
        self.urls.get(&page).map(String::as_str)
    }
    fn declared_menu(&self, _page: u32) -> Option<MenuContent> {
        None
    }
    fn default_menu(&self) -> Option<MenuContent> {
        Some(MenuContent::new(vec![MenuList::new(vec![
            MenuItem::link("Home", "/home"),
            MenuItem::link("Contacts", "/contacts"),
        ])]))
    }
    fn fixed_regions(&self, _page: u32) -> FixedRegions {
        FixedRegions::NONE
    }
    fn container_width(&self) -> f64 {
        260.0
    }
    fn menu_height(&self, _menu: MenuId) -> f64 {
        300.0
    }
}

/// Apply effects until the controller stops producing navigation work.
fn run(menu: &mut Slideout<u32>, browser: &mut Browser, now: Duration) {
    let mut queue = menu.drain_effects();
    while !queue.is_empty() {
        for effect in queue {
            match effect {
                Effect::SetMenuFragment => {
                    browser.location.push_str(MENU_FRAGMENT);
                    let target = NavTarget::Url(browser.location.clone());
                    let options = NavOptions::default();
                    menu.page_will_change(target, options, &*browser, now);
                }
                Effect::HistoryBack => {
                    if let Some(base) = browser.location.strip_suffix(MENU_FRAGMENT) {
                        browser.location = base.to_owned();
                    }
                    let target = NavTarget::Url(browser.location.clone());
                    let options = NavOptions {
                        reverse: true,
                        ..NavOptions::default()
                    };
                    menu.page_will_change(target, options, &*browser, now);
                }
                Effect::Navigate { target, options } => {
                    navigate(menu, browser, target, options, now);
                }
                other => println!("  {other:?}"),
            }
        }
        queue = menu.drain_effects();
    }
}

fn navigate(
    menu: &mut Slideout<u32>,
    browser: &mut Browser,
    target: NavTarget<u32>,
    options: NavOptions<u32>,
    now: Duration,
) {
    if menu.page_will_change(target.clone(), options, &*browser, now) == NavDecision::Prevent {
        println!("  navigation to {target:?} deferred");
        return;
    }
    let NavTarget::Url(url) = target else {
        return;
    };
    if let Some(page) = browser.page_at(&url) {
        println!("  navigated to {url}");
        browser.page = page;
        browser.location = url;
        menu.handle_navigation(NavEvent::DidChange(page), &*browser, now);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let mut browser = Browser {
        page: 1,
        location: "/home".into(),
        urls: BTreeMap::from([(1, "/home".into()), (2, "/contacts".into())]),
    };
    let mut menu = Slideout::default();
    menu.init(&browser);
    menu.handle_navigation(NavEvent::DidChange(1), &browser, Duration::ZERO);
    run(&mut menu, &mut browser, Duration::ZERO);

    println!("tap toggler");
    menu.toggler_tapped(Point::new(16.0, 16.0), &browser, Duration::ZERO);
    run(&mut menu, &mut browser, Duration::ZERO);
    println!("open: {} at {}", menu.is_open(), browser.location);

    println!("tap Contacts");
    let now = Duration::from_millis(900);
    let id = menu.active_menu().expect("default menu is active");
    let link = ItemRef::new(0, 1);
    let verdict = menu.menu_item_tapped(id, link, Point::new(80.0, 120.0), &browser, now);
    if verdict == ClickVerdict::Allow {
        // The link's default action starts before the history back lands.
        let target = NavTarget::Url("/contacts".into());
        navigate(&mut menu, &mut browser, target, NavOptions::default(), now);
    }
    run(&mut menu, &mut browser, now);

    while let Some(deadline) = menu.next_deadline() {
        menu.advance(deadline);
        run(&mut menu, &mut browser, deadline);
    }
    println!("open: {} at {} (page {})", menu.is_open(), browser.location, browser.page);
}
