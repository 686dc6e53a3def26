//! # wp-core
//!
//! Core types, ID generation, and error types for Waypoint.
//!
//! This crate provides the foundational types shared across all Waypoint crates:
//! - Entity structs for the travel document (places, cities, quick links)
//! - The place category enum with display labels
//! - Partial place updates with shallow-merge semantics
//! - URL normalization and map-link helpers
//! - ID generation from the OS random source
//! - API request/response bodies
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod links;
pub mod responses;
pub mod updates;
