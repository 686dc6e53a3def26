pub mod schema;
pub mod seed;
pub mod serve;
pub mod shared;
pub mod validate;
