//! Typed records returned by the API.
//!
//! Field names follow the API's camelCase JSON. Unknown fields are ignored and most fields are
//! optional so additive API changes do not break decoding.

pub mod blob;
pub mod campaign;
pub mod installation;
pub mod timestamp;

pub use blob::*;
pub use campaign::*;
pub use installation::*;
