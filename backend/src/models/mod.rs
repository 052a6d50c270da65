pub mod catalog;
pub mod macros;
pub mod price;
pub mod sample;

pub use catalog::*;
pub use price::*;
pub use sample::sample_catalog;
