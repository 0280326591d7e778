// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use guide_admin_domain::EntityId;
use std::collections::HashSet;

/// The set of entity ids selected for a batch operation.
///
/// Selection is ephemeral and screen-local: created empty on entering edit
/// mode, cleared on exiting edit mode or after a successful bulk
/// operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSet {
    ids: HashSet<EntityId>,
}

impl SelectionSet {
    /// Creates a new empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles one id: adds it if absent, removes it if present.
    ///
    /// Returns whether the id is selected after the toggle.
    pub fn toggle(&mut self, id: EntityId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Replaces the selection with every id in the given view.
    ///
    /// This is a pure function of the view at call time; it is not
    /// retroactively updated when the view changes afterwards.
    pub fn select_all<'a>(&mut self, view: impl IntoIterator<Item = &'a EntityId>) {
        self.ids = view.into_iter().cloned().collect();
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns whether the given id is selected.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.ids.contains(id)
    }

    /// Returns the number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the selected ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a EntityId;
    type IntoIter = std::collections::hash_set::Iter<'a, EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
