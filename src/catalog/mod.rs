//! Set catalog wiring.
//!
//! Wraps the JSON catalog (`data/brickset.json` by default) behind a generic
//! load-once repository and the domain query surface. Types here mirror the
//! source contract; callers use `SetCatalog` for the domain queries and reach
//! for `Repository` directly when they bring their own record shape.

pub mod identity;
pub mod model;
pub mod queries;
pub mod repository;

pub use identity::{SetNumber, Theme};
pub use model::LegoSet;
pub use queries::{QueryError, SetCatalog};
pub use repository::{LoadError, Repository};
