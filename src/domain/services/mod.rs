pub mod holiday_queries;
pub mod status_resolver;

pub use holiday_queries::*;
pub use status_resolver::*;
