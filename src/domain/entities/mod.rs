pub mod answer;
pub mod availability;
pub mod holiday;
pub mod profile;
pub mod schedule;

pub use answer::*;
pub use availability::*;
pub use holiday::*;
pub use profile::*;
pub use schedule::*;
