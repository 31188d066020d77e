pub mod listing;
pub mod statistics;

pub use listing::*;
pub use statistics::*;
