//! # wp-auth
//!
//! Shared-password authentication for the Waypoint API.
//!
//! A client exchanges the configured password for an opaque bearer token at
//! login. Tokens live only in process memory ([`TokenSet`]); they do not
//! expire and are forgotten on restart, which logs every client out.

pub mod bearer;
pub mod error;
pub mod gate;
pub mod token_set;

pub use bearer::bearer_token;
pub use error::AuthError;
pub use gate::PasswordGate;
pub use token_set::TokenSet;
