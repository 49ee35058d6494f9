pub mod schema;
pub mod domain;
pub mod roster;
pub mod prelude;
pub mod mock;

mod error;

pub use error::EntityError;
