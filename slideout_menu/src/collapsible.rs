// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsible lists and collapsed items.
//!
//! Two mechanisms share this module:
//! - A list declared with a [`CollapsibleSpec`](crate::content::CollapsibleSpec) folds under
//!   its header. Tapping the header flips it.
//! - Items declared [`COLLAPSED`](crate::content::ItemFlags::COLLAPSED) start hidden. A
//!   collapsibler item ("more…") in the same list reveals them and then removes itself.

use alloc::string::String;
use alloc::vec::Vec;

use crate::content::{ItemFlags, ItemRole, ListHeader, MenuContent, MenuList};

/// Apply declared initial collapse state. Runs once, at registration.
pub(crate) fn apply_declared(content: &mut MenuContent) {
    for list in &mut content.lists {
        list.collapsed = list.collapsible.as_ref().is_some_and(|s| s.collapsed);
        for item in &mut list.items {
            item.collapsed = item.flags.contains(ItemFlags::COLLAPSED);
        }
    }
    refresh_lists(content);
}

/// Recompute the header of every collapsible list.
pub(crate) fn refresh_lists(content: &mut MenuContent) {
    for list in &mut content.lists {
        refresh_list(list);
    }
}

/// Recompute one list's header icon and selected-items suffix.
pub(crate) fn refresh_list(list: &mut MenuList) {
    let Some(decl) = &list.collapsible else {
        list.header = ListHeader::default();
        return;
    };
    let icon = if list.collapsed {
        decl.icon_collapsed.clone()
    } else {
        decl.icon_expanded.clone()
    };
    let selected_text = if decl.show_selected {
        selected_suffix(list)
    } else {
        String::new()
    };
    list.header = ListHeader {
        icon,
        selected_text,
    };
}

/// Header suffix listing the active items, e.g. `": Pets, Birds"`.
///
/// Falls back to the declared selected text when nothing is active, and to an empty
/// string when there is neither.
pub fn selected_suffix(list: &MenuList) -> String {
    let active: Vec<&str> = list
        .items
        .iter()
        .filter(|i| i.is_selectable() && i.is_active())
        .map(|i| i.label.as_str())
        .collect();
    if !active.is_empty() {
        return alloc::format!(": {}", active.join(", "));
    }
    match list.collapsible.as_ref().and_then(|s| s.selected_text.as_deref()) {
        Some(text) if !text.is_empty() => alloc::format!(": {text}"),
        _ => String::new(),
    }
}

/// Flip a collapsible list. Returns `false` for lists that are not collapsible.
pub(crate) fn toggle_list(list: &mut MenuList) -> bool {
    if list.collapsible.is_none() {
        return false;
    }
    list.collapsed = !list.collapsed;
    refresh_list(list);
    true
}

/// Reveal the collapsed siblings of the collapsibler at `index` and remove it.
///
/// Returns `false` if `index` is not a collapsibler.
pub(crate) fn expand_collapsed(list: &mut MenuList, index: usize) -> bool {
    if list.items.get(index).map(|i| i.role) != Some(ItemRole::Collapsibler) {
        return false;
    }
    list.items.remove(index);
    for item in &mut list.items {
        item.collapsed = false;
    }
    refresh_list(list);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CollapsibleSpec, MenuItem};
    use alloc::string::ToString;
    use alloc::vec;

    fn spec(show_selected: bool) -> CollapsibleSpec {
        CollapsibleSpec {
            icon_collapsed: "plus".to_string(),
            icon_expanded: "minus".to_string(),
            collapsed: true,
            show_selected,
            selected_text: Some("Any".to_string()),
        }
    }

    #[test]
    fn declared_state_sets_header_icon() {
        let mut c = MenuContent::new(vec![MenuList::collapsible(
            vec![MenuItem::divider("Links"), MenuItem::link("a", "/a")],
            spec(false),
        )]);
        apply_declared(&mut c);
        assert!(c.lists[0].is_collapsed());
        assert_eq!(c.lists[0].header().icon, "plus");
        assert!(toggle_list(&mut c.lists[0]));
        assert!(!c.lists[0].is_collapsed());
        assert_eq!(c.lists[0].header().icon, "minus");
    }

    #[test]
    fn plain_list_does_not_toggle() {
        let mut list = MenuList::new(vec![MenuItem::link("a", "/a")]);
        assert!(!toggle_list(&mut list));
        assert!(!list.is_collapsed());
    }

    #[test]
    fn selected_suffix_lists_active_labels_or_fallback() {
        let mut list = MenuList::collapsible(
            vec![
                MenuItem::divider("Animals"),
                MenuItem::link("Pets", "/pets"),
                MenuItem::link("Birds", "/birds"),
            ],
            spec(true),
        );
        assert_eq!(selected_suffix(&list), ": Any");
        list.items[1].active = true;
        list.items[2].active = true;
        assert_eq!(selected_suffix(&list), ": Pets, Birds");
        refresh_list(&mut list);
        assert_eq!(list.header().selected_text, ": Pets, Birds");

        list.collapsible.as_mut().unwrap().selected_text = None;
        list.items[1].active = false;
        list.items[2].active = false;
        assert_eq!(selected_suffix(&list), "");
    }

    #[test]
    fn collapsibler_reveals_siblings_and_removes_itself() {
        let mut c = MenuContent::new(vec![MenuList::new(vec![
            MenuItem::link("shown", "/s"),
            MenuItem::collapsibler("more"),
            MenuItem::link("hidden", "/h").with_flags(ItemFlags::COLLAPSED),
        ])]);
        apply_declared(&mut c);
        assert!(c.lists[0].items[2].is_collapsed());
        assert!(!expand_collapsed(&mut c.lists[0], 0));
        assert!(expand_collapsed(&mut c.lists[0], 1));
        assert_eq!(c.lists[0].items.len(), 2);
        assert!(c.lists[0].items.iter().all(|i| !i.is_collapsed()));
    }
}
