pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod interpreter;

pub use config::EngineConfig;
pub use db::database::Database;
pub use error::{EngineError, Result};
