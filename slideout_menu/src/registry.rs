// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu registry: id → instance storage, page bindings, and cascading removal.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::content::MenuContent;
use crate::error::MenuError;
use crate::instance::MenuInstance;
use crate::types::{MenuId, PageKey};

/// Owns every registered [`MenuInstance`] and the page → menu bindings.
///
/// Ids are allocated from a counter that only grows; removing a menu never frees its id
/// for reuse.
#[derive(Clone)]
pub struct MenuRegistry<P: PageKey> {
    entries: BTreeMap<MenuId, MenuInstance<P>>,
    by_page: BTreeMap<P, MenuId>,
    next_id: u32,
}

impl<P: PageKey> core::fmt::Debug for MenuRegistry<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let submenus = self.entries.values().filter(|m| m.is_submenu()).count();
        f.debug_struct("MenuRegistry")
            .field("menus", &self.entries.len())
            .field("submenus", &submenus)
            .field("bound_pages", &self.by_page.len())
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

impl<P: PageKey> Default for MenuRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PageKey> MenuRegistry<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            by_page: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate(&mut self) -> MenuId {
        let id = MenuId(self.next_id);
        // `u32` is ample for a page session; behavior on exhaustion is unspecified.
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Register `content` and return its fresh id.
    ///
    /// With an owner page, the menu is bound to that page for [`lookup_by_page`](Self::lookup_by_page)
    /// and is removed with it. Binding a page that already has a menu removes the previous
    /// menu and its submenus; their ids are returned alongside the new one, in
    /// [`remove`](Self::remove) order.
    pub fn register(&mut self, content: MenuContent, owner: Option<P>) -> (MenuId, Vec<MenuId>) {
        let mut replaced = Vec::new();
        if let Some(page) = owner
            && let Some(previous) = self.by_page.get(&page).copied()
        {
            tracing::debug!(?page, %previous, "page rebound; dropping previous menu");
            replaced = self.remove(previous);
        }
        let id = self.allocate();
        self.entries.insert(
            id,
            MenuInstance {
                id,
                content,
                owner_page: owner,
                parent_menu: None,
            },
        );
        if let Some(page) = owner {
            self.by_page.insert(page, id);
        }
        (id, replaced)
    }

    /// Register `content` as a nested submenu of `parent`.
    pub fn register_submenu(
        &mut self,
        content: MenuContent,
        parent: MenuId,
    ) -> Result<MenuId, MenuError> {
        if !self.contains(parent) {
            return Err(MenuError::NotFound(parent));
        }
        let id = self.allocate();
        self.entries.insert(
            id,
            MenuInstance {
                id,
                content,
                owner_page: None,
                parent_menu: Some(parent),
            },
        );
        Ok(id)
    }

    /// Menu bound to `page`, if any.
    pub fn lookup_by_page(&self, page: P) -> Option<MenuId> {
        self.by_page.get(&page).copied()
    }

    /// Access a menu.
    pub fn get(&self, id: MenuId) -> Result<&MenuInstance<P>, MenuError> {
        self.entries.get(&id).ok_or(MenuError::NotFound(id))
    }

    /// Access a menu mutably.
    pub fn get_mut(&mut self, id: MenuId) -> Result<&mut MenuInstance<P>, MenuError> {
        self.entries.get_mut(&id).ok_or(MenuError::NotFound(id))
    }

    /// Returns `true` if `id` is registered.
    pub fn contains(&self, id: MenuId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Remove a menu and, recursively, every submenu drilled from it.
    ///
    /// Returns the removed ids, the requested one first, then submenus depth-first.
    /// Returns an empty list if `id` is not registered.
    pub fn remove(&mut self, id: MenuId) -> Vec<MenuId> {
        let mut removed = Vec::new();
        self.remove_into(id, &mut removed);
        removed
    }

    fn remove_into(&mut self, id: MenuId, removed: &mut Vec<MenuId>) {
        let Some(instance) = self.entries.remove(&id) else {
            return;
        };
        if let Some(page) = instance.owner_page
            && self.by_page.get(&page) == Some(&id)
        {
            self.by_page.remove(&page);
        }
        removed.push(id);
        let children: Vec<MenuId> = self.children_of(id).collect();
        for child in children {
            self.remove_into(child, removed);
        }
    }

    /// Direct submenus of `id`.
    pub fn children_of(&self, id: MenuId) -> impl Iterator<Item = MenuId> + '_ {
        self.entries
            .values()
            .filter(move |m| m.parent_menu == Some(id))
            .map(|m| m.id)
    }

    /// Registered ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = MenuId> + '_ {
        self.entries.keys().copied()
    }

    /// Oldest registered top-level (non-submenu) menu.
    ///
    /// Submenus never outlive their parent, so this is `None` only when the registry is empty.
    pub fn first(&self) -> Option<MenuId> {
        self.entries
            .values()
            .find(|m| !m.is_submenu())
            .map(|m| m.id)
    }

    /// Number of registered menus, submenus included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{MenuItem, MenuList};
    use alloc::vec;

    fn content(label: &str) -> MenuContent {
        MenuContent::new(vec![MenuList::new(vec![MenuItem::link(label, "/")])])
    }

    #[test]
    fn register_and_lookup_by_page() {
        let mut reg: MenuRegistry<u32> = MenuRegistry::new();
        let default = reg.register(content("default"), None).0;
        let a = reg.register(content("a"), Some(1)).0;
        assert_ne!(default, a);
        assert_eq!(reg.lookup_by_page(1), Some(a));
        assert_eq!(reg.lookup_by_page(2), None);
        assert_eq!(reg.get(a).unwrap().owner_page(), Some(1));
        assert_eq!(reg.get(default).unwrap().owner_page(), None);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut reg: MenuRegistry<u32> = MenuRegistry::new();
        let a = reg.register(content("a"), Some(1)).0;
        reg.remove(a);
        let b = reg.register(content("b"), Some(1)).0;
        assert!(b > a);
        assert_eq!(reg.get(a).unwrap_err(), MenuError::NotFound(a));
    }

    #[test]
    fn removing_one_page_menu_keeps_the_other() {
        let mut reg: MenuRegistry<u32> = MenuRegistry::new();
        let a = reg.register(content("a"), Some(1)).0;
        let b = reg.register(content("b"), Some(2)).0;
        assert_eq!(reg.remove(a), vec![a]);
        assert!(!reg.contains(a));
        assert!(reg.contains(b));
        assert_eq!(reg.lookup_by_page(2), Some(b));
        assert_eq!(reg.lookup_by_page(1), None);
    }

    #[test]
    fn remove_cascades_through_submenus() {
        let mut reg: MenuRegistry<u32> = MenuRegistry::new();
        let root = reg.register(content("root"), Some(1)).0;
        let child = reg.register_submenu(content("child"), root).unwrap();
        let grandchild = reg.register_submenu(content("grandchild"), child).unwrap();
        let other = reg.register(content("other"), None).0;
        assert_eq!(reg.children_of(root).collect::<Vec<_>>(), vec![child]);
        assert_eq!(reg.remove(root), vec![root, child, grandchild]);
        assert_eq!(reg.len(), 1);
        assert!(reg.contains(other));
    }

    #[test]
    fn submenu_needs_a_live_parent() {
        let mut reg: MenuRegistry<u32> = MenuRegistry::new();
        let stale = reg.register(content("x"), None).0;
        reg.remove(stale);
        assert_eq!(
            reg.register_submenu(content("y"), stale),
            Err(MenuError::NotFound(stale))
        );
        assert!(reg.is_empty());
    }

    #[test]
    fn rebinding_a_page_drops_the_previous_menu() {
        let mut reg: MenuRegistry<u32> = MenuRegistry::new();
        let first = reg.register(content("first"), Some(4)).0;
        let sub = reg.register_submenu(content("sub"), first).unwrap();
        let (second, replaced) = reg.register(content("second"), Some(4));
        assert_eq!(replaced, vec![first, sub]);
        assert_eq!(reg.lookup_by_page(4), Some(second));
        assert!(!reg.contains(first));
        assert!(!reg.contains(sub));
    }

    #[test]
    fn first_prefers_top_level_menus() {
        let mut reg: MenuRegistry<u32> = MenuRegistry::new();
        assert_eq!(reg.first(), None);
        let a = reg.register(content("a"), Some(1)).0;
        let _sub = reg.register_submenu(content("sub"), a).unwrap();
        let b = reg.register(content("b"), Some(2)).0;
        reg.remove(a);
        assert_eq!(reg.first(), Some(b));
        assert_eq!(reg.remove(MenuId(999)), Vec::<MenuId>::new());
    }
}
