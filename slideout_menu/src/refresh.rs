// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-item refresh and page-address normalization.
//!
//! ## Refresh
//!
//! 1) Every selectable item keeps the active mark if it is declared selected, or if it
//!    persists its selection and already had the mark. All other marks are cleared.
//! 2) Link items are scanned in document order. The first whose canonical address equals
//!    one of the target addresses (the page being navigated to, the active page) gets the
//!    mark, and the scan stops.
//! 3) If that item is hidden behind a collapsibler it is revealed and moved to just before
//!    the collapsibler.

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::content::{ItemFlags, ItemRef, ItemRole, MenuContent};

/// Normalize a URL to a canonical page address.
///
/// - Scheme and authority are dropped (`https://host/a/b?q` → `/a/b?q`).
/// - A `&ui-state=…` dialog suffix is dropped.
/// - A bare fragment with no path (`#settings`) names an embedded page and becomes `settings`.
/// - Otherwise the fragment is dropped.
pub fn canonical_page_address(url: &str) -> String {
    let url = url.trim();
    let url = url.find("&ui-state=").map_or(url, |i| &url[..i]);
    let (base, fragment) = match url.split_once('#') {
        Some((b, f)) => (b, Some(f)),
        None => (url, None),
    };
    let path = if let Some((_, rest)) = base.split_once("://") {
        rest.find('/').map_or("/", |i| &rest[i..])
    } else if let Some(rest) = base.strip_prefix("//") {
        rest.find('/').map_or("/", |i| &rest[i..])
    } else {
        base
    };
    match fragment {
        Some(f) if path.is_empty() && !f.is_empty() => f.to_owned(),
        _ => path.to_owned(),
    }
}

/// Refresh the active marks of `content` against `targets` (canonical addresses).
///
/// `canonical` normalizes item hrefs. Returns the item that matched a target, if any.
pub(crate) fn refresh_items(
    content: &mut MenuContent,
    targets: &[String],
    canonical: impl Fn(&str) -> String,
) -> Option<ItemRef> {
    for item in content.items_mut().filter(|i| i.is_selectable()) {
        item.active = item.flags.contains(ItemFlags::SELECTED)
            || (item.flags.contains(ItemFlags::PERSIST_SELECTION) && item.active);
    }

    let matched = content
        .items()
        .filter(|(_, i)| i.role == ItemRole::Link)
        .find(|(_, i)| {
            i.href.as_deref().is_some_and(|href| {
                let addr = canonical(href);
                targets.iter().any(|t| *t == addr)
            })
        })
        .map(|(r, _)| r)?;

    let item = content.item_mut(matched)?;
    item.active = true;
    if !item.collapsed {
        return Some(matched);
    }
    item.collapsed = false;

    let list = &mut content.lists[matched.list];
    let moved = list.items.remove(matched.item);
    let at = list
        .items
        .iter()
        .position(|i| i.role == ItemRole::Collapsibler)
        .unwrap_or(matched.item);
    list.items.insert(at, moved);
    Some(ItemRef::new(matched.list, at))
}

/// Clear the active mark from every item that neither persists nor is declared selected.
pub(crate) fn clear_transient_marks(content: &mut MenuContent) {
    for item in content.items_mut() {
        if !item
            .flags
            .intersects(ItemFlags::PERSIST_SELECTION | ItemFlags::SELECTED)
        {
            item.active = false;
        }
    }
}
