//! # wp-store
//!
//! Persistence for the Waypoint travel document.
//!
//! The whole document is one JSON value. It is kept either in a local file
//! ([`FileStore`]) or committed to a GitHub repository through the contents
//! API ([`GitHubStore`]). [`TravelService`] wraps whichever store the
//! configuration selects and implements the place and quick-link operations
//! as serialized load-modify-save cycles.

pub mod error;
pub mod file;
pub mod github;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use github::GitHubStore;
pub use service::TravelService;
pub use store::{DataStore, Store};
