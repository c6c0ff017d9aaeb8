//! HTTP front end for tally.
//!
//! Routes:
//!
//! - `GET /api/{add,subtract,multiply,divide,power,root}?v1=..&v2=..`
//! - `POST /api/calculate` with a JSON expression tree
//! - `GET /api` discovery document
//! - anything else under `GET` is served from the static directory

pub mod body;
pub mod cli;
pub mod discovery;
pub mod eval;
pub mod response;
pub mod routes;
pub mod server;
pub mod settings;

pub use response::ApiError;
pub use routes::{guard, handle};
pub use settings::Settings;
