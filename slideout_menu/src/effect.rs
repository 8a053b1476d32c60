// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side effects requested by the controller.
//!
//! Transitions append effects in the order they must be applied. A host executor drains
//! them with [`Slideout::drain_effects`](crate::controller::Slideout::drain_effects) and
//! performs the DOM, history, and event work.

use crate::types::{FixedRegion, MenuEvent, MenuId, NavOptions, NavTarget, PageHeight};

/// One side effect for the host to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<P> {
    /// Deliver a lifecycle event to listeners.
    Emit(MenuEvent),
    /// Scroll the viewport to the top.
    ScrollToTop,
    /// Reveal the menu container.
    ShowContainer,
    /// Hide the menu container.
    HideContainer,
    /// Move a registered menu's content into the container, hidden.
    AttachMenu(MenuId),
    /// Remove a menu's content from the container.
    DetachMenu(MenuId),
    /// Display a menu's content inside the container.
    ShowMenu(MenuId),
    /// Hide a menu's content inside the container.
    HideMenu(MenuId),
    /// Item marks, collapse state, or list headers of a menu changed; re-render it.
    ItemsChanged(MenuId),
    /// Offset the main page horizontally.
    SetPageOffset {
        /// Main page.
        page: P,
        /// Left offset. Zero puts the page back in place.
        left: f64,
        /// Slide instead of jumping.
        animate: bool,
    },
    /// Mark the main page as pushed aside (disables its vertical scrolling).
    MarkPageOpen(P),
    /// Clear the pushed-aside mark from the main page.
    ClearPageOpen(P),
    /// Pin a fixed region at `left` so it follows the revealed edge.
    SetFixedRegionOffset {
        /// Main page.
        page: P,
        /// Region to move.
        region: FixedRegion,
        /// Left offset.
        left: f64,
    },
    /// Drop inline overrides from a fixed region, restoring stylesheet defaults.
    RestoreFixedRegion {
        /// Main page.
        page: P,
        /// Region to restore.
        region: FixedRegion,
    },
    /// Bottom padding of the menu container.
    SetMenuPadding(f64),
    /// Height of the main page.
    SetPageHeight {
        /// Main page.
        page: P,
        /// New height.
        height: PageHeight,
    },
    /// Install the one-shot "tap anywhere closes the menu" handler on a page.
    InstallCloseOnTap(P),
    /// Remove the one-shot handler if it has not fired.
    RemoveCloseOnTap(P),
    /// Set the location fragment to [`MENU_FRAGMENT`](crate::types::MENU_FRAGMENT).
    SetMenuFragment,
    /// Clear a leftover menu fragment without producing a navigation.
    ClearMenuFragmentSilently,
    /// Navigate one step back in history.
    HistoryBack,
    /// Start a navigation.
    Navigate {
        /// Destination.
        target: NavTarget<P>,
        /// Options for the navigation.
        options: NavOptions<P>,
    },
    /// Show the host's loading indicator.
    ShowLoading,
    /// Hide the host's loading indicator.
    HideLoading,
}
