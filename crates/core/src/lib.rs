// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod edit;
mod error;
mod filter;
mod renewal;
mod selection;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use edit::EditMode;
pub use error::CoreError;
pub use filter::filter_view;
pub use renewal::{RenewalReport, renew_selected};
pub use selection::SelectionSet;
pub use store::EntityStore;
