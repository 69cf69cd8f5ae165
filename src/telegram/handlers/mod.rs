//! Command dispatch: schema, handler implementations, and shared types

mod commands;
mod schema;
mod types;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
