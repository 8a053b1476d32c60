// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed menu content: lists of items with their declared flags and runtime marks.
//!
//! ## Overview
//!
//! Hosts translate their menu markup into a [`MenuContent`] once, when the menu is
//! declared. Declared configuration (selected, persistent selection, collapsed,
//! disabled) lives in [`ItemFlags`]. Runtime state (the active mark, whether an item
//! is currently collapsed, which submenu an item opens) is owned by the controller and
//! exposed read-only.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::MenuId;

bitflags::bitflags! {
    /// Declared per-item configuration, read once at registration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item is selected by declaration and always shows the active mark.
        const SELECTED          = 0b0000_0001;
        /// Once marked active, the mark survives refreshes.
        const PERSIST_SELECTION = 0b0000_0010;
        /// Item starts hidden behind its list's collapsibler ("more…").
        const COLLAPSED         = 0b0000_0100;
        /// Item ignores taps.
        const DISABLED          = 0b0000_1000;
    }
}

/// What an item does when tapped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ItemRole {
    /// A link (or a submenu entry, if the item carries nested content).
    Link,
    /// A list divider; the header of a collapsible list.
    Divider,
    /// The "more…" control that reveals collapsed siblings.
    Collapsibler,
}

/// Address of an item within a menu's content.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ItemRef {
    /// Index of the list.
    pub list: usize,
    /// Index of the item within the list.
    pub item: usize,
}

impl ItemRef {
    /// Item `item` of list `list`.
    pub const fn new(list: usize, item: usize) -> Self {
        Self { list, item }
    }
}

/// One entry of a menu list.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    /// Visible text.
    pub label: String,
    /// Link target, if any.
    pub href: Option<String>,
    /// Behavior on tap.
    pub role: ItemRole,
    /// Declared configuration.
    pub flags: ItemFlags,
    /// Icon name; filled from the controller's default at registration when absent.
    pub icon: Option<String>,
    /// Icon shadow; set from the controller's configuration at registration.
    pub icon_shadow: bool,
    /// Content of a nested submenu reached through this item.
    ///
    /// Taken out at registration and registered as its own menu.
    pub nested: Option<MenuContent>,
    pub(crate) active: bool,
    pub(crate) collapsed: bool,
    pub(crate) submenu: Option<MenuId>,
}

impl MenuItem {
    fn with_role(label: impl Into<String>, role: ItemRole) -> Self {
        Self {
            label: label.into(),
            href: None,
            role,
            flags: ItemFlags::empty(),
            icon: None,
            icon_shadow: false,
            nested: None,
            active: false,
            collapsed: false,
            submenu: None,
        }
    }

    /// A link item.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        let mut item = Self::with_role(label, ItemRole::Link);
        item.href = Some(href.into());
        item
    }

    /// A list divider.
    pub fn divider(label: impl Into<String>) -> Self {
        Self::with_role(label, ItemRole::Divider)
    }

    /// A "more…" control for collapsed siblings.
    pub fn collapsibler(label: impl Into<String>) -> Self {
        Self::with_role(label, ItemRole::Collapsibler)
    }

    /// An item that opens a nested submenu.
    pub fn submenu(label: impl Into<String>, nested: MenuContent) -> Self {
        let mut item = Self::with_role(label, ItemRole::Link);
        item.nested = Some(nested);
        item
    }

    /// Replace the declared flags.
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set an explicit icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Whether the item currently shows the active ("selected-looking") mark.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the item is currently hidden behind a collapsibler.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// The submenu this item opens, once registered.
    pub fn submenu_id(&self) -> Option<MenuId> {
        self.submenu
    }

    /// Returns `true` for items that can carry the active mark.
    pub fn is_selectable(&self) -> bool {
        self.role != ItemRole::Divider
    }
}

/// Declared settings of a collapsible list. The list's first divider acts as its header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollapsibleSpec {
    /// Header icon while collapsed.
    pub icon_collapsed: String,
    /// Header icon while expanded.
    pub icon_expanded: String,
    /// Whether the list starts collapsed.
    pub collapsed: bool,
    /// Append the active items' labels to the header.
    pub show_selected: bool,
    /// Header suffix when `show_selected` is on and nothing is active.
    pub selected_text: Option<String>,
}

/// Computed header of a collapsible list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListHeader {
    /// Icon for the current collapsed/expanded state.
    pub icon: String,
    /// Suffix shown after the header label, e.g. `": Pets, Birds"`; empty when none.
    pub selected_text: String,
}

/// One list of a menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuList {
    /// Items in document order.
    pub items: Vec<MenuItem>,
    /// Present when the list collapses under its header.
    pub collapsible: Option<CollapsibleSpec>,
    pub(crate) collapsed: bool,
    pub(crate) header: ListHeader,
}

impl MenuList {
    /// A plain list.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }

    /// A list that collapses under its header.
    pub fn collapsible(items: Vec<MenuItem>, spec: CollapsibleSpec) -> Self {
        Self {
            items,
            collapsible: Some(spec),
            ..Default::default()
        }
    }

    /// Whether a collapsible list is currently collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Computed header state; default for non-collapsible lists.
    pub fn header(&self) -> &ListHeader {
        &self.header
    }
}

/// Content shown while a menu is active.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuContent {
    /// Title; submenus take the label of the item that opens them.
    pub title: Option<String>,
    /// Lists in document order.
    pub lists: Vec<MenuList>,
}

impl MenuContent {
    /// Content made of the given lists.
    pub fn new(lists: Vec<MenuList>) -> Self {
        Self { title: None, lists }
    }

    /// Look up an item.
    pub fn item(&self, at: ItemRef) -> Option<&MenuItem> {
        self.lists.get(at.list)?.items.get(at.item)
    }

    /// Look up an item mutably.
    pub fn item_mut(&mut self, at: ItemRef) -> Option<&mut MenuItem> {
        self.lists.get_mut(at.list)?.items.get_mut(at.item)
    }

    /// All items in document order with their addresses.
    pub fn items(&self) -> impl Iterator<Item = (ItemRef, &MenuItem)> + '_ {
        self.lists.iter().enumerate().flat_map(|(l, list)| {
            list.items
                .iter()
                .enumerate()
                .map(move |(i, item)| (ItemRef::new(l, i), item))
        })
    }

    /// Mutable walk over all items in document order.
    pub(crate) fn items_mut(&mut self) -> impl Iterator<Item = &mut MenuItem> + '_ {
        self.lists.iter_mut().flat_map(|l| l.items.iter_mut())
    }

    /// Address of the first item whose label matches, if any.
    pub fn find(&self, label: &str) -> Option<ItemRef> {
        self.items().find(|(_, i)| i.label == label).map(|(r, _)| r)
    }
}
