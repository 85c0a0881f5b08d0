//! Client-side search logic for the directory page
//!
//! The directory service answers type and specialization searches
//! independently; [`reconcile`] merges whatever subset of those results has
//! arrived with the full-directory snapshot into one deduplicated list.

mod matcher;
mod reconcile;

pub use matcher::matches_specialization;
pub use reconcile::{reconcile, ReconcileOutput};
