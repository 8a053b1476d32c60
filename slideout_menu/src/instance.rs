// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single off-canvas content block.

use crate::content::MenuContent;
use crate::types::{MenuId, PageKey};

/// A registered menu: the process-wide default menu, a page's replacement menu, or a
/// nested submenu.
///
/// Menus with an owner page are removed when that page leaves the host's history.
/// Submenus are removed with their parent.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuInstance<P: PageKey> {
    pub(crate) id: MenuId,
    pub(crate) content: MenuContent,
    pub(crate) owner_page: Option<P>,
    pub(crate) parent_menu: Option<MenuId>,
}

impl<P: PageKey> MenuInstance<P> {
    /// Stable id of this instance.
    pub fn id(&self) -> MenuId {
        self.id
    }

    /// Content shown while this menu is active.
    pub fn content(&self) -> &MenuContent {
        &self.content
    }

    /// Page that declared this menu; `None` for the default menu and for submenus.
    pub fn owner_page(&self) -> Option<P> {
        self.owner_page
    }

    /// Menu this submenu was drilled into from.
    pub fn parent_menu(&self) -> Option<MenuId> {
        self.parent_menu
    }

    /// Returns `true` for nested submenus.
    pub fn is_submenu(&self) -> bool {
        self.parent_menu.is_some()
    }
}
