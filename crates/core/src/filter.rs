// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use guide_admin_domain::Entity;

/// Produces the filtered view of a collection for a search query.
///
/// A record passes when at least one of its searchable fields contains the
/// trimmed query as a case-insensitive substring. An empty or
/// whitespace-only query is the identity filter: the full collection
/// passes through unchanged, in order.
///
/// Recomputation is synchronous and total; the output is always a subset
/// of the input, order preserved, so repeated application with the same
/// query is idempotent.
#[must_use]
pub fn filter_view<E: Entity + Clone>(records: &[E], query: &str) -> Vec<E> {
    let trimmed: &str = query.trim();
    if trimmed.is_empty() {
        return records.to_vec();
    }
    let needle: String = trimmed.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
