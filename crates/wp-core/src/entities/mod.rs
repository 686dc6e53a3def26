//! Entity structs for the travel document.
//!
//! The JSON shape is camelCase (`googleMaps`, `otherLinks`, `quickLinks`) so
//! documents written by the web client load unchanged. All structs derive
//! `JsonSchema` for `wpt schema` and document validation.

mod city;
mod place;
mod quick_link;
mod travel_data;

pub use city::City;
pub use place::{LinkRef, Place};
pub use quick_link::{QuickLink, QuickLinkCategory};
pub use travel_data::TravelData;
