pub mod decrypt;
pub mod encrypt;
pub mod paths;

pub use decrypt::*;
pub use encrypt::*;
pub use paths::*;
