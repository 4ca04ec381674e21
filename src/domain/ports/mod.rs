pub mod exposure;
pub mod paper_profile;

pub use exposure::*;
pub use paper_profile::*;
