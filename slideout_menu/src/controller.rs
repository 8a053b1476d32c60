// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slideout controller: the open/close state machine and menu switching.
//!
//! ## Overview
//!
//! [`Slideout`] owns the [`MenuRegistry`], the ghost-click filter, pending timers, and
//! the controller state (open flag, active menu, deferred navigation, last main page).
//! Every transition reads the host through [`PageHost`] and appends [`Effect`]s; nothing
//! outside the controller mutates its state.
//!
//! ## Open / close
//!
//! - `open` and `close` are no-ops when the menu is already in the requested state.
//! - The open flag flips synchronously. Visual settling of a close (hiding the container)
//!   runs on a timer after [`SlideoutConfig::close_delay`] when animation applies, and
//!   immediately otherwise.
//! - Pages with a fixed header or footer never animate.
//! - While the location shows [`MENU_FRAGMENT`](crate::types::MENU_FRAGMENT), `close`
//!   requests a history back instead, so the location and the visual state stay in sync.
//!
//! ## Timers
//!
//! Call [`Slideout::advance`] from the host's timer tick. It fires due tasks (close
//! settling, deferred-navigation replay) and expires ghost-click records.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Point;
use slideout_ghostclick::{ClickVerdict, GhostClickFilter};

use crate::collapsible;
use crate::config::SlideoutConfig;
use crate::content::{ItemRef, ItemRole, MenuContent};
use crate::effect::Effect;
use crate::error::MenuError;
use crate::host::PageHost;
use crate::refresh;
use crate::registry::MenuRegistry;
use crate::timer::{TaskId, TimerQueue};
use crate::types::{FixedRegions, MenuEvent, MenuId, NavOptions, NavTarget, PageHeight, PageKey};

/// A navigation deferred because the menu had to close first.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingNavigation<P> {
    /// Destination of the deferred navigation.
    pub target: NavTarget<P>,
    /// Options it will be replayed with.
    pub options: NavOptions<P>,
    pub(crate) replay: Option<TaskId>,
}

impl<P> PendingNavigation<P> {
    /// Returns `true` once the replay timer is armed.
    pub fn is_scheduled(&self) -> bool {
        self.replay.is_some()
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Task<P> {
    FinishClose { page: P },
    ReplayNavigation,
}

/// Slideout menu manager.
///
/// Construct one per page session and hand `&mut` access to every collaborator that
/// needs it; there is no global instance.
pub struct Slideout<P: PageKey> {
    pub(crate) config: SlideoutConfig,
    pub(crate) registry: MenuRegistry<P>,
    pub(crate) ghost: GhostClickFilter,
    pub(crate) timers: TimerQueue<Task<P>>,
    pub(crate) effects: Vec<Effect<P>>,
    pub(crate) is_open: bool,
    pub(crate) active: Option<MenuId>,
    pub(crate) default_menu: Option<MenuId>,
    pub(crate) main_page: Option<P>,
    pub(crate) pending: Option<PendingNavigation<P>>,
    pub(crate) close_on_tap: Option<P>,
    pub(crate) finish_close: Option<TaskId>,
    // Opened by the navigation bridge observing the menu fragment.
    pub(crate) fragment_open: bool,
    // A history back was requested to leave the menu fragment and has not landed yet.
    pub(crate) awaiting_back: bool,
}

impl<P: PageKey> core::fmt::Debug for Slideout<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slideout")
            .field("is_open", &self.is_open)
            .field("active", &self.active)
            .field("main_page", &self.main_page)
            .field("pending", &self.pending.is_some())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<P: PageKey> Default for Slideout<P> {
    fn default() -> Self {
        Self::new(SlideoutConfig::default())
    }
}

impl<P: PageKey> Slideout<P> {
    /// Create a controller. Call [`Slideout::init`] once the host has loaded.
    pub fn new(config: SlideoutConfig) -> Self {
        let ghost = GhostClickFilter::with_config(config.filter);
        Self {
            config,
            registry: MenuRegistry::new(),
            ghost,
            timers: TimerQueue::new(),
            effects: Vec::new(),
            is_open: false,
            active: None,
            default_menu: None,
            main_page: None,
            pending: None,
            close_on_tap: None,
            finish_close: None,
            fragment_open: false,
            awaiting_back: false,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SlideoutConfig {
        &self.config
    }

    /// Registered menus.
    pub fn registry(&self) -> &MenuRegistry<P> {
        &self.registry
    }

    /// The ghost-click filter shared by every handler of this controller.
    pub fn ghost_clicks(&self) -> &GhostClickFilter {
        &self.ghost
    }

    /// Mutable access to the ghost-click filter.
    pub fn ghost_clicks_mut(&mut self) -> &mut GhostClickFilter {
        &mut self.ghost
    }

    /// Whether the menu is logically open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Menu shown in the container.
    pub fn active_menu(&self) -> Option<MenuId> {
        self.active
    }

    /// Process-wide default menu, once registered.
    pub fn default_menu(&self) -> Option<MenuId> {
        self.default_menu
    }

    /// Last main page seen by the navigation bridge.
    pub fn main_page(&self) -> Option<P> {
        self.main_page
    }

    /// Navigation deferred until the menu has closed.
    pub fn pending_navigation(&self) -> Option<&PendingNavigation<P>> {
        self.pending.as_ref()
    }

    /// Effects appended since the last drain, in order.
    pub fn effects(&self) -> &[Effect<P>] {
        &self.effects
    }

    /// Take the accumulated effects for execution.
    pub fn drain_effects(&mut self) -> Vec<Effect<P>> {
        core::mem::take(&mut self.effects)
    }

    /// Earliest instant at which [`Slideout::advance`] has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.timers.next_deadline(), self.ghost.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub(crate) fn emit(&mut self, event: MenuEvent) {
        self.effects.push(Effect::Emit(event));
    }

    /// Bring the controller up on page load.
    ///
    /// Clears a leftover menu fragment without navigating, and eagerly registers the
    /// host's default menu, making it active.
    pub fn init<H: PageHost<PageId = P>>(&mut self, host: &H) {
        if host.location_is_menu() {
            self.effects.push(Effect::ClearMenuFragmentSilently);
        }
        if self.default_menu.is_none()
            && let Some(content) = host.default_menu()
        {
            let id = self.register_menu(content, None);
            self.default_menu = Some(id);
            self.activate(id, host);
        }
    }

    /// Register menu content, with nested submenus, and announce it.
    ///
    /// Every non-divider item without an icon receives the configured default icon, and
    /// every nested list becomes a submenu whose parent is the enclosing menu.
    ///
    /// Registering for a page that already has a menu replaces that menu. If the replaced
    /// menu (or one of its submenus) was active, the new menu becomes active.
    pub fn register_menu(&mut self, mut content: MenuContent, owner: Option<P>) -> MenuId {
        let nested = self.prepare(&mut content);
        let (id, replaced) = self.registry.register(content, owner);
        let lost_active = self.retire(&replaced);
        self.announce(id, owner, None);
        self.register_nested(id, nested);
        if lost_active {
            self.show_menu(id);
        }
        id
    }

    /// Detach menus already dropped from the registry.
    ///
    /// Returns `true` if the active menu was among them; it is then unset.
    pub(crate) fn retire(&mut self, removed: &[MenuId]) -> bool {
        for &gone in removed {
            self.effects.push(Effect::DetachMenu(gone));
            self.emit(MenuEvent::MenuRemoved(gone));
        }
        match self.active {
            Some(active) if removed.contains(&active) => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    fn register_nested(&mut self, parent: MenuId, nested: Vec<(ItemRef, MenuContent)>) {
        for (at, mut sub) in nested {
            let inner = self.prepare(&mut sub);
            let child = match self.registry.register_submenu(sub, parent) {
                Ok(child) => child,
                Err(e) => {
                    tracing::warn!(%e, "submenu dropped");
                    continue;
                }
            };
            self.announce(child, None, Some(parent));
            if let Ok(menu) = self.registry.get_mut(parent)
                && let Some(item) = menu.content.item_mut(at)
            {
                item.submenu = Some(child);
            }
            self.register_nested(child, inner);
        }
    }

    /// Fill default icons, apply declared collapse state, and detach nested content.
    fn prepare(&self, content: &mut MenuContent) -> Vec<(ItemRef, MenuContent)> {
        for item in content.items_mut().filter(|i| i.role != ItemRole::Divider) {
            if item.icon.is_none() {
                item.icon = Some(self.config.icon.clone());
            }
            item.icon_shadow = self.config.icon_shadow;
        }
        collapsible::apply_declared(content);

        let mut nested = Vec::new();
        for (l, list) in content.lists.iter_mut().enumerate() {
            for (i, item) in list.items.iter_mut().enumerate() {
                if let Some(mut sub) = item.nested.take() {
                    if sub.title.is_none() {
                        sub.title = Some(item.label.clone());
                    }
                    nested.push((ItemRef::new(l, i), sub));
                }
            }
        }
        nested
    }

    fn announce(&mut self, id: MenuId, owner: Option<P>, parent: Option<MenuId>) {
        tracing::debug!(%id, ?owner, ?parent, "menu registered");
        self.emit(MenuEvent::MenuCreated(id));
        self.effects.push(Effect::AttachMenu(id));
    }

    fn main_page_of<H: PageHost<PageId = P>>(&self, host: &H) -> Result<P, MenuError> {
        host.active_page().ok_or(MenuError::MissingHostPage)
    }

    fn require_state(&self, open: bool) -> Result<(), MenuError> {
        if self.is_open == open {
            Ok(())
        } else {
            Err(MenuError::InvalidState)
        }
    }

    fn animates(&self, regions: &FixedRegions) -> bool {
        self.config.enable_animation && regions.is_empty()
    }

    /// Open the menu. Returns `false` if it was already open.
    pub fn open<H: PageHost<PageId = P>>(&mut self, host: &H) -> bool {
        if let Err(e) = self.require_state(false) {
            tracing::trace!(%e, "open ignored");
            return false;
        }
        // A close still settling must not hide the container we are about to show.
        if let Some(stale) = self.finish_close.take() {
            self.timers.cancel(stale);
        }

        self.emit(MenuEvent::BeforeOpen);
        self.effects.push(Effect::ScrollToTop);
        self.effects.push(Effect::ShowContainer);
        if let Some(id) = self.active {
            self.effects.push(Effect::ShowMenu(id));
        }
        self.is_open = true;
        tracing::debug!(active = ?self.active, "menu open");

        let page = match self.main_page_of(host) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(%e, "open: nothing to slide aside");
                return true;
            }
        };
        let regions = host.fixed_regions(page);
        let animate = self.animates(&regions);
        let width = host.container_width();
        self.effects.push(Effect::SetPageOffset {
            page,
            left: width,
            animate,
        });
        self.effects.push(Effect::MarkPageOpen(page));
        for region in regions.regions() {
            self.effects.push(Effect::SetFixedRegionOffset {
                page,
                region,
                left: width,
            });
        }
        self.effects.push(Effect::SetMenuPadding(regions.padding()));

        self.refresh(host);
        self.height_sync(host);
        self.emit(MenuEvent::AfterOpen);

        self.effects.push(Effect::InstallCloseOnTap(page));
        self.close_on_tap = Some(page);
        true
    }

    /// Close the menu. Returns `true` if the menu closed now.
    ///
    /// Returns `false` when it was already closed, and when closing was delegated to a
    /// history back because the location shows the menu fragment.
    pub fn close<H: PageHost<PageId = P>>(&mut self, host: &H, now: Duration) -> bool {
        if let Err(e) = self.require_state(true) {
            tracing::trace!(%e, "close ignored");
            return false;
        }
        if host.location_is_menu() {
            if !self.awaiting_back {
                self.effects.push(Effect::HistoryBack);
                self.awaiting_back = true;
            }
            tracing::debug!("close delegated to history back");
            return false;
        }

        self.emit(MenuEvent::BeforeClose);
        self.is_open = false;
        self.fragment_open = false;
        self.awaiting_back = false;
        if let Some(page) = self.close_on_tap.take() {
            self.effects.push(Effect::RemoveCloseOnTap(page));
        }
        tracing::debug!("menu closed");

        let page = match self.main_page_of(host) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(%e, "close: nothing to slide back");
                return true;
            }
        };
        let regions = host.fixed_regions(page);
        let animate = self.animates(&regions);
        self.effects.push(Effect::SetPageOffset {
            page,
            left: 0.0,
            animate,
        });
        for region in regions.regions() {
            self.effects
                .push(Effect::RestoreFixedRegion { page, region });
        }
        self.effects.push(Effect::SetMenuPadding(0.0));
        if animate {
            let deadline = now.saturating_add(self.config.close_delay);
            let task = self.timers.schedule(deadline, Task::FinishClose { page });
            self.finish_close = Some(task);
        } else {
            self.effects.push(Effect::HideContainer);
            self.effects.push(Effect::ClearPageOpen(page));
        }

        self.height_sync(host);
        self.emit(MenuEvent::AfterClose);
        true
    }

    /// Close if open (or if the location shows the menu fragment); otherwise request
    /// opening by setting the menu fragment.
    ///
    /// Opening goes through the location so back/forward can reverse it; the navigation
    /// bridge opens the menu when it sees the fragment.
    pub fn toggle<H: PageHost<PageId = P>>(&mut self, host: &H, now: Duration) {
        if self.is_open || host.location_is_menu() {
            self.close(host, now);
        } else {
            self.effects.push(Effect::SetMenuFragment);
        }
    }

    /// Make `id` the active menu. Returns `false`, changing nothing, if `id` is not registered.
    pub fn switch_to_menu<H: PageHost<PageId = P>>(&mut self, id: MenuId, host: &H) -> bool {
        if let Err(e) = self.registry.get(id) {
            tracing::warn!(%e, "switch ignored");
            return false;
        }
        self.show_menu(id);
        let padding = match self.main_page_of(host) {
            Ok(page) if self.is_open => host.fixed_regions(page).padding(),
            _ => 0.0,
        };
        self.effects.push(Effect::SetMenuPadding(padding));
        self.refresh(host);
        self.height_sync(host);
        true
    }

    /// Activate a menu chosen by the navigation bridge.
    pub(crate) fn activate<H: PageHost<PageId = P>>(&mut self, id: MenuId, host: &H) {
        if self.active == Some(id) {
            return;
        }
        self.show_menu(id);
        self.refresh(host);
        self.height_sync(host);
    }

    fn show_menu(&mut self, id: MenuId) {
        if let Some(old) = self.active
            && old != id
        {
            self.effects.push(Effect::HideMenu(old));
        }
        self.effects.push(Effect::ShowMenu(id));
        tracing::debug!(from = ?self.active, to = %id, "active menu");
        self.active = Some(id);
    }

    /// Recompute the active marks of the active menu.
    ///
    /// Targets are the URL being navigated to and the active page's URL, both normalized
    /// with [`PageHost::canonical_address`].
    pub fn refresh<H: PageHost<PageId = P>>(&mut self, host: &H) {
        let Some(id) = self.active else {
            return;
        };
        let mut targets = Vec::new();
        if let Some(url) = host.current_url() {
            targets.push(host.canonical_address(url));
        }
        if let Some(url) = host.active_page().and_then(|p| host.page_url(p)) {
            targets.push(host.canonical_address(url));
        }
        let Ok(menu) = self.registry.get_mut(id) else {
            return;
        };
        refresh::refresh_items(&mut menu.content, &targets, |u| host.canonical_address(u));
        collapsible::refresh_lists(&mut menu.content);
        self.effects.push(Effect::ItemsChanged(id));
    }

    /// Match the main page's height to the active menu's.
    ///
    /// A menu with zero natural height lets the page size itself.
    pub fn height_sync<H: PageHost<PageId = P>>(&mut self, host: &H) {
        let page = match self.main_page_of(host) {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(%e, "height sync skipped");
                return;
            }
        };
        let h = self.active.map_or(0.0, |id| host.menu_height(id));
        let height = if h > 0.0 {
            PageHeight::Fixed(h)
        } else {
            PageHeight::Auto
        };
        self.effects.push(Effect::SetPageHeight { page, height });
    }

    /// Viewport orientation changed; re-sync height while open.
    pub fn orientation_changed<H: PageHost<PageId = P>>(&mut self, host: &H) {
        if self.is_open {
            self.height_sync(host);
        }
    }

    /// Fire due timers and expire ghost-click records. Returns how many tasks fired.
    pub fn advance(&mut self, now: Duration) -> usize {
        self.ghost.expire(now);
        let mut fired = 0;
        while let Some((id, task)) = self.timers.pop_due(now) {
            fired += 1;
            match task {
                Task::FinishClose { page } => {
                    if self.finish_close == Some(id) {
                        self.finish_close = None;
                    }
                    tracing::trace!(?page, "close settled");
                    self.effects.push(Effect::HideContainer);
                    self.effects.push(Effect::ClearPageOpen(page));
                }
                Task::ReplayNavigation => {
                    if let Some(pending) = self.pending.take() {
                        tracing::debug!(nav = ?pending.target, "replaying deferred navigation");
                        self.effects.push(Effect::Navigate {
                            target: pending.target,
                            options: pending.options,
                        });
                    }
                    self.effects.push(Effect::HideLoading);
                }
            }
        }
        fired
    }

    /// Judge a real click against the ghost-click filter.
    pub fn on_click(&mut self, at: Point, now: Duration) -> ClickVerdict {
        self.ghost.on_click(at, now)
    }
}
