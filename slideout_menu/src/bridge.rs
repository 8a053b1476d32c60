// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation bridge: reacts to the host's page lifecycle.
//!
//! - `WillChange` to the menu fragment opens the menu. Any other navigation while the
//!   menu is open is deferred: the menu closes first and the navigation is replayed
//!   after [`SlideoutConfig::replay_delay`](crate::config::SlideoutConfig::replay_delay).
//! - `DidChange` binds the new main page's menu, registering the page's declared menu
//!   the first time the page is seen.
//! - `Removed` drops the page's menu with its submenus and fails over if it was active.

use core::time::Duration;

use crate::controller::{PendingNavigation, Slideout, Task};
use crate::effect::Effect;
use crate::host::PageHost;
use crate::types::{MenuId, NavDecision, NavEvent, NavOptions, NavTarget, PageKey};

impl<P: PageKey> Slideout<P> {
    /// Dispatch a host navigation notification.
    ///
    /// Only [`NavEvent::WillChange`] can be prevented; the other events always
    /// report [`NavDecision::Proceed`].
    pub fn handle_navigation<H: PageHost<PageId = P>>(
        &mut self,
        event: NavEvent<P>,
        host: &H,
        now: Duration,
    ) -> NavDecision {
        match event {
            NavEvent::WillChange { target, options } => {
                self.page_will_change(target, options, host, now)
            }
            NavEvent::DidChange(page) => {
                self.page_did_change(page, host);
                NavDecision::Proceed
            }
            NavEvent::Removed(page) => {
                self.page_removed(page, host);
                NavDecision::Proceed
            }
        }
    }

    /// A navigation to `target` is about to start.
    pub fn page_will_change<H: PageHost<PageId = P>>(
        &mut self,
        target: NavTarget<P>,
        mut options: NavOptions<P>,
        host: &H,
        now: Duration,
    ) -> NavDecision {
        if target.is_menu_fragment() {
            if !host.location_is_menu() {
                tracing::debug!("menu fragment requested but location disagrees");
                return NavDecision::Prevent;
            }
            self.fragment_open = true;
            self.open(host);
            return NavDecision::Prevent;
        }

        if let Some(pending) = &self.pending {
            if pending.is_scheduled() {
                // Replay already armed; this navigation is someone else's.
                self.close(host, now);
                return NavDecision::Proceed;
            }
            // The history back that leaves the menu fragment.
            self.arm_replay(now);
            self.close(host, now);
            return NavDecision::Prevent;
        }

        if self.is_open && (host.location_is_menu() || !self.fragment_open) {
            options.from_page = None;
            tracing::debug!(nav = ?target, "navigation deferred until the menu closes");
            self.pending = Some(PendingNavigation {
                target,
                options,
                replay: None,
            });
            if self.close(host, now) {
                self.arm_replay(now);
            }
            return NavDecision::Prevent;
        }

        self.close(host, now);
        NavDecision::Proceed
    }

    fn arm_replay(&mut self, now: Duration) {
        let deadline = now.saturating_add(self.config.replay_delay);
        let task = self.timers.schedule(deadline, Task::ReplayNavigation);
        if let Some(pending) = &mut self.pending {
            pending.replay = Some(task);
        }
        self.effects.push(Effect::ShowLoading);
    }

    /// A navigation finished and `page` is the active main page.
    ///
    /// Binds the page's registered menu, registering its declared menu first if this is
    /// the page's first visit. A page without a menu of its own shows the default menu.
    pub fn page_did_change<H: PageHost<PageId = P>>(&mut self, page: P, host: &H) {
        if self.main_page == Some(page) {
            return;
        }
        self.main_page = Some(page);

        let id = match self.registry.lookup_by_page(page) {
            Some(id) => Some(id),
            None => match host.declared_menu(page) {
                Some(content) => Some(self.register_menu(content, Some(page))),
                None => self.ensure_default(host),
            },
        };
        match id {
            Some(id) => self.activate(id, host),
            None => tracing::debug!(?page, "no menu for page"),
        }
    }

    fn ensure_default<H: PageHost<PageId = P>>(&mut self, host: &H) -> Option<MenuId> {
        if let Some(id) = self.default_menu
            && self.registry.contains(id)
        {
            return Some(id);
        }
        let content = host.default_menu()?;
        let id = self.register_menu(content, None);
        self.default_menu = Some(id);
        Some(id)
    }

    /// `page` was dropped by the host. Removes its menu and submenus.
    pub fn page_removed<H: PageHost<PageId = P>>(&mut self, page: P, host: &H) {
        let Some(id) = self.registry.lookup_by_page(page) else {
            return;
        };
        let removed = self.registry.remove(id);
        tracing::debug!(?page, count = removed.len(), "page menus removed");
        let lost_active = self.retire(&removed);
        if self.main_page == Some(page) {
            self.main_page = None;
        }
        if !lost_active {
            return;
        }
        let next = self
            .default_menu
            .filter(|&d| self.registry.contains(d))
            .or_else(|| self.registry.first());
        match next {
            Some(next) => self.activate(next, host),
            None => tracing::debug!("registry empty; no active menu"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MenuContent, MenuItem, MenuList};
    use crate::testing::{FakeHost, link_menu};
    use crate::types::MenuEvent;
    use alloc::vec;
    use alloc::vec::Vec;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn url(u: &str) -> NavTarget<u32> {
        NavTarget::Url(u.into())
    }

    fn navigations(effects: &[Effect<u32>]) -> Vec<&NavTarget<u32>> {
        effects
            .iter()
            .filter_map(|e| match e {
                Effect::Navigate { target, .. } => Some(target),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn menu_fragment_opens_only_when_location_agrees() {
        let mut host = FakeHost::new().with_default(link_menu(&[("Home", "/home")]));
        let mut s = Slideout::default();
        s.init(&host);
        let d = s.page_will_change(url("/app#menu"), NavOptions::default(), &host, ms(0));
        assert_eq!(d, NavDecision::Prevent);
        assert!(!s.is_open());

        host.location_menu = true;
        let d = s.page_will_change(url("/app#menu"), NavOptions::default(), &host, ms(0));
        assert_eq!(d, NavDecision::Prevent);
        assert!(s.is_open());
    }

    #[test]
    fn navigation_while_directly_open_is_replayed_once() {
        let host = FakeHost::new().with_default(link_menu(&[("Home", "/home")]));
        let mut s = Slideout::default();
        s.init(&host);
        s.open(&host);
        let options = NavOptions {
            from_page: Some(1),
            reverse: true,
            transition: Some("slide".into()),
        };
        let d = s.page_will_change(url("/c"), options, &host, ms(1000));
        assert_eq!(d, NavDecision::Prevent);
        assert!(!s.is_open());
        let pending = s.pending_navigation().unwrap();
        assert!(pending.is_scheduled());
        assert_eq!(pending.options.from_page, None);
        s.drain_effects();

        s.advance(ms(1199));
        assert!(navigations(&s.drain_effects()).is_empty());
        s.advance(ms(1200));
        let fx = s.drain_effects();
        assert_eq!(navigations(&fx), [&url("/c")]);
        assert!(fx.contains(&Effect::Navigate {
            target: url("/c"),
            options: NavOptions {
                from_page: None,
                reverse: true,
                transition: Some("slide".into()),
            },
        }));
        assert!(s.pending_navigation().is_none());

        // The replayed navigation itself proceeds.
        let d = s.page_will_change(url("/c"), NavOptions::default(), &host, ms(1201));
        assert_eq!(d, NavDecision::Proceed);
        s.advance(ms(5000));
        assert!(navigations(&s.drain_effects()).is_empty());
    }

    #[test]
    fn back_button_out_of_the_fragment_just_closes() {
        let mut host = FakeHost::new().with_default(link_menu(&[("Home", "/home")]));
        let mut s = Slideout::default();
        s.init(&host);
        host.location_menu = true;
        s.page_will_change(url("#menu"), NavOptions::default(), &host, ms(0));
        assert!(s.is_open());

        host.location_menu = false;
        let d = s.page_will_change(url("/home"), NavOptions::default(), &host, ms(10));
        assert_eq!(d, NavDecision::Proceed);
        assert!(!s.is_open());
        assert!(s.pending_navigation().is_none());
    }

    #[test]
    fn did_change_to_same_page_is_ignored() {
        let host = FakeHost::new().with_default(link_menu(&[("Home", "/home")]));
        let mut s = Slideout::default();
        s.init(&host);
        s.page_did_change(1, &host);
        s.drain_effects();
        s.page_did_change(1, &host);
        assert!(s.drain_effects().is_empty());
    }

    #[test]
    fn removing_active_page_menu_fails_over_to_default() {
        let host = FakeHost::new()
            .with_default(link_menu(&[("Home", "/home")]))
            .with_page(2, "/b", Some(link_menu(&[("B", "/b")])));
        let mut s = Slideout::default();
        s.init(&host);
        let default = s.default_menu().unwrap();
        s.page_did_change(2, &host);
        let b = s.registry().lookup_by_page(2).unwrap();
        assert_eq!(s.active_menu(), Some(b));
        s.drain_effects();

        s.page_removed(2, &host);
        let fx = s.drain_effects();
        assert!(fx.contains(&Effect::DetachMenu(b)));
        assert!(fx.contains(&Effect::Emit(MenuEvent::MenuRemoved(b))));
        assert_eq!(s.active_menu(), Some(default));
        assert!(!s.registry().contains(b));
    }

    #[test]
    fn removing_last_menu_leaves_no_active_menu() {
        let host = FakeHost::new().with_page(2, "/b", Some(link_menu(&[("B", "/b")])));
        let mut s = Slideout::default();
        s.init(&host);
        s.page_did_change(2, &host);
        assert!(s.active_menu().is_some());
        s.page_removed(2, &host);
        assert_eq!(s.active_menu(), None);
        assert!(s.registry().is_empty());
    }

    #[test]
    fn removing_page_while_its_submenu_is_active_fails_over() {
        let declared = MenuContent::new(vec![MenuList::new(vec![
            MenuItem::link("B", "/b"),
            MenuItem::submenu("Deeper", link_menu(&[("Leaf", "/leaf")])),
        ])]);
        let host = FakeHost::new()
            .with_default(link_menu(&[("Home", "/home")]))
            .with_page(2, "/b", Some(declared));
        let mut s = Slideout::default();
        s.init(&host);
        let default = s.default_menu().unwrap();
        s.page_did_change(2, &host);
        let b = s.registry().lookup_by_page(2).unwrap();
        let child = s.registry().get(b).unwrap().content().lists[0].items[1]
            .submenu_id()
            .unwrap();
        assert!(s.switch_to_menu(child, &host));
        s.drain_effects();

        s.page_removed(2, &host);
        let fx = s.drain_effects();
        for gone in [b, child] {
            assert!(fx.contains(&Effect::DetachMenu(gone)));
            assert!(fx.contains(&Effect::Emit(MenuEvent::MenuRemoved(gone))));
            assert!(!s.registry().contains(gone));
        }
        assert_eq!(s.active_menu(), Some(default));
        assert!(fx.contains(&Effect::ShowMenu(default)));
        assert!(!fx.contains(&Effect::HideMenu(child)));
    }
}
