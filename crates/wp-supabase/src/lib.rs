//! # wp-supabase
//!
//! Supabase variant of Waypoint storage.
//!
//! Places and quick links live in two PostgREST tables instead of one JSON
//! document. This crate holds the row types, a small REST client using the
//! service-role key, and the seed migration that copies a document into the
//! tables.

pub mod client;
pub mod error;
pub mod rows;
pub mod seed;

mod http;

pub use client::SupabaseClient;
pub use error::SupabaseError;
pub use rows::{PlaceRow, QuickLinkRow, group_quick_links, next_sort_order};
pub use seed::{SeedStep, SeedTable, seed, seed_row_count, seed_with_progress};
