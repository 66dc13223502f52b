//! Items API - CRUD operations over an in-memory item collection

pub mod config;
pub mod error;
pub mod types;

pub mod store;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
