pub mod appearance;
pub mod server;
mod views;
mod utils;
mod routes;
mod configs;
mod error;

#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ parse_seed, AppConfig };
pub use crate::error::CreatorError;
