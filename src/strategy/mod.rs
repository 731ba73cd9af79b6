pub mod parallel;
pub mod streaming;

pub use parallel::*;
pub use streaming::*;
