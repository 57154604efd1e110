pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::*;
pub use errors::*;
