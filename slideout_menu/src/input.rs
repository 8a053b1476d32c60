// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap handlers for the toggler, the main page, and menu content.
//!
//! Taps that the controller consumes itself are recorded with the ghost-click filter, so
//! the duplicate click the browser fires afterwards does not land on whatever is now
//! underneath.

use core::time::Duration;

use kurbo::Point;
use slideout_ghostclick::ClickVerdict;

use crate::collapsible;
use crate::content::{ItemFlags, ItemRef, ItemRole};
use crate::controller::Slideout;
use crate::effect::Effect;
use crate::host::PageHost;
use crate::refresh;
use crate::types::{MenuId, PageKey};

impl<P: PageKey> Slideout<P> {
    /// The toggler control was tapped.
    pub fn toggler_tapped<H: PageHost<PageId = P>>(&mut self, at: Point, host: &H, now: Duration) {
        self.ghost.record_synthetic(at, now);
        self.toggle(host, now);
    }

    /// The main page was tapped. Fires the close-on-tap handler installed by `open`.
    ///
    /// Returns `true` if the tap closed (or began closing) the menu and was consumed.
    pub fn main_page_tapped<H: PageHost<PageId = P>>(
        &mut self,
        at: Point,
        host: &H,
        now: Duration,
    ) -> bool {
        if !self.is_open || self.close_on_tap.take().is_none() {
            return false;
        }
        self.ghost.record_synthetic(at, now);
        self.close(host, now);
        true
    }

    /// An item of `menu` was tapped at `at`.
    ///
    /// Returns [`ClickVerdict::Allow`] when the tap should go on to follow the item's link;
    /// every other tap is consumed here.
    pub fn menu_item_tapped<H: PageHost<PageId = P>>(
        &mut self,
        menu: MenuId,
        item: ItemRef,
        at: Point,
        host: &H,
        now: Duration,
    ) -> ClickVerdict {
        let (role, flags, submenu) = match self.registry.get(menu) {
            Ok(m) => match m.content.item(item) {
                Some(i) => (i.role, i.flags, i.submenu),
                None => {
                    tracing::warn!(%menu, ?item, "tap on unknown item");
                    return ClickVerdict::Suppress;
                }
            },
            Err(e) => {
                tracing::warn!(%e, "tap ignored");
                return ClickVerdict::Suppress;
            }
        };
        if flags.contains(ItemFlags::DISABLED) {
            return ClickVerdict::Suppress;
        }

        match role {
            ItemRole::Collapsibler => {
                self.ghost.record_synthetic(at, now);
                if let Ok(m) = self.registry.get_mut(menu)
                    && let Some(list) = m.content.lists.get_mut(item.list)
                {
                    collapsible::expand_collapsed(list, item.item);
                }
                self.items_changed(menu, host);
                ClickVerdict::Suppress
            }
            ItemRole::Divider => {
                let toggled = self
                    .registry
                    .get_mut(menu)
                    .ok()
                    .and_then(|m| m.content.lists.get_mut(item.list))
                    .is_some_and(collapsible::toggle_list);
                if toggled {
                    self.ghost.record_synthetic(at, now);
                    self.items_changed(menu, host);
                }
                ClickVerdict::Suppress
            }
            ItemRole::Link => {
                if let Some(child) = submenu {
                    self.ghost.record_synthetic(at, now);
                    self.switch_to_menu(child, host);
                    return ClickVerdict::Suppress;
                }
                self.close(host, now);
                if let Ok(m) = self.registry.get_mut(menu) {
                    refresh::clear_transient_marks(&mut m.content);
                    if let Some(i) = m.content.item_mut(item) {
                        i.active = true;
                    }
                    collapsible::refresh_lists(&mut m.content);
                }
                self.effects.push(Effect::ItemsChanged(menu));
                ClickVerdict::Allow
            }
        }
    }

    /// The back control of submenu `menu` was tapped. Returns to its parent menu.
    ///
    /// Returns `false` if `menu` is not a registered submenu.
    pub fn submenu_back_tapped<H: PageHost<PageId = P>>(
        &mut self,
        menu: MenuId,
        at: Point,
        host: &H,
        now: Duration,
    ) -> bool {
        let Some(parent) = self.registry.get(menu).ok().and_then(|m| m.parent_menu) else {
            tracing::warn!(%menu, "back tapped outside a submenu");
            return false;
        };
        self.ghost.record_synthetic(at, now);
        self.switch_to_menu(parent, host)
    }

    /// A form inside the menu was submitted.
    pub fn menu_form_submitted<H: PageHost<PageId = P>>(&mut self, host: &H, now: Duration) {
        self.effects.push(Effect::ShowLoading);
        self.close(host, now);
    }

    fn items_changed<H: PageHost<PageId = P>>(&mut self, menu: MenuId, host: &H) {
        self.effects.push(Effect::ItemsChanged(menu));
        self.height_sync(host);
    }
}
