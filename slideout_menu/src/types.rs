// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: menu identifiers, lifecycle events, page geometry inputs, and navigation requests.

use alloc::string::String;

/// Reserved location fragment that means "menu is open".
///
/// Setting it opens the menu; leaving it (via history back) closes the menu, so the
/// browser's back/forward buttons reverse the open/close action.
pub const MENU_FRAGMENT: &str = "#menu";

/// Opaque page identifier supplied by the host's navigation system.
///
/// Blanket-implemented for every small, ordered, copyable key (for example a page
/// slot index or a generational handle).
pub trait PageKey: Copy + Eq + Ord + core::fmt::Debug {}

impl<T: Copy + Eq + Ord + core::fmt::Debug> PageKey for T {}

/// Identifier of a registered menu instance.
///
/// Ids come from a monotonically increasing counter and are never reused for the
/// lifetime of a [`MenuRegistry`](crate::registry::MenuRegistry), so a stale id can
/// never alias a newer menu.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MenuId(pub(crate) u32);

impl MenuId {
    /// Raw counter value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for MenuId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "menu#{}", self.0)
    }
}

/// Lifecycle events emitted for collaborator widgets.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuEvent {
    /// Before the menu starts opening.
    BeforeOpen,
    /// After the menu is open.
    AfterOpen,
    /// Before the menu starts closing.
    BeforeClose,
    /// After the menu is closed (visual settling may still be in flight).
    AfterClose,
    /// A menu instance was registered.
    ///
    /// The content root is not carried; look it up with
    /// `Slideout::registry().get(id)?.content()`.
    MenuCreated(MenuId),
    /// A menu instance was removed along with its owning page.
    MenuRemoved(MenuId),
}

/// A fixed-position region of the main page.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FixedRegion {
    /// Fixed header (`data-position="fixed"` header).
    Header,
    /// Fixed footer.
    Footer,
}

/// Fixed regions present on a page, with the page padding each one reserves.
///
/// The padding is what the menu needs at its bottom to line up with the page while open.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FixedRegions {
    /// Padding-top reserved by a fixed header, if the page has one.
    pub header: Option<f64>,
    /// Padding-bottom reserved by a fixed footer, if the page has one.
    pub footer: Option<f64>,
}

impl FixedRegions {
    /// No fixed regions.
    pub const NONE: Self = Self {
        header: None,
        footer: None,
    };

    /// Returns `true` if the page has neither a fixed header nor a fixed footer.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.footer.is_none()
    }

    /// Total padding reserved by the present regions.
    pub fn padding(&self) -> f64 {
        self.header.unwrap_or(0.0) + self.footer.unwrap_or(0.0)
    }

    /// Present regions, header first.
    pub fn regions(&self) -> impl Iterator<Item = FixedRegion> {
        let h = self.header.map(|_| FixedRegion::Header);
        let f = self.footer.map(|_| FixedRegion::Footer);
        h.into_iter().chain(f)
    }
}

/// Height applied to the main page by height sync.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PageHeight {
    /// Let the page size itself.
    Auto,
    /// Force the page to this height.
    Fixed(f64),
}

/// Where a navigation is headed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NavTarget<P> {
    /// An address (absolute or relative URL, or a bare fragment).
    Url(String),
    /// A page already loaded by the host.
    Page(P),
}

impl<P> NavTarget<P> {
    /// Returns `true` if this target is the reserved [`MENU_FRAGMENT`] address.
    pub fn is_menu_fragment(&self) -> bool {
        matches!(self, Self::Url(u) if u.ends_with(MENU_FRAGMENT))
    }
}

/// Options carried with a navigation request and replayed unchanged when it is deferred.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NavOptions<P> {
    /// Page the navigation starts from. Cleared when the navigation is deferred, since the
    /// page it started from is no longer meaningful once the menu has closed.
    pub from_page: Option<P>,
    /// Play the transition in reverse.
    pub reverse: bool,
    /// Named page transition.
    pub transition: Option<String>,
}

/// Whether the host should continue with a navigation it announced.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavDecision {
    /// Let the navigation continue.
    Proceed,
    /// Cancel the host's default handling; the controller has taken over.
    Prevent,
}

/// Navigation notifications from the host, for [`Slideout::handle_navigation`](crate::controller::Slideout::handle_navigation).
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent<P> {
    /// A navigation is about to start.
    WillChange {
        /// Destination.
        target: NavTarget<P>,
        /// Host options for the navigation.
        options: NavOptions<P>,
    },
    /// A navigation finished and `0` is now the active page.
    DidChange(P),
    /// A page was removed from the host's history/DOM cache.
    Removed(P),
}
