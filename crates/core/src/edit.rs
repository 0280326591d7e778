// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The edit-mode state of a management screen.
///
/// The toggle itself is unconditional; permission checks happen on the
/// individual mutating actions that edit mode exposes. Leaving edit mode
/// is the point where any pending bulk operation is flushed and the
/// selection set is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Rows are display-only.
    #[default]
    ReadOnly,
    /// Per-row destructive actions and status affordances are exposed.
    Editing,
}

impl EditMode {
    /// Returns whether the screen is in edit mode.
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }

    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ReadOnly => Self::Editing,
            Self::Editing => Self::ReadOnly,
        }
    }
}
