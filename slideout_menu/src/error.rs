// Copyright 2025 the Slideout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy.
//!
//! None of these reach the user. Registry lookups return them; controller
//! operations log them and degrade to a no-op or a `false` return.

use crate::types::MenuId;

/// Failure modes of menu operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MenuError {
    /// The id is not (or no longer) registered.
    #[error("{0} is not registered")]
    NotFound(MenuId),
    /// The transition does not apply, e.g. opening a menu that is already open.
    #[error("transition does not apply in the current state")]
    InvalidState,
    /// There is no active main page to synchronize against.
    #[error("no active main page")]
    MissingHostPage,
}
