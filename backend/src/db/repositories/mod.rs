//! Repository implementations module.
//!
//! - `local`: in-memory catalog, the only backend the storefront needs
pub mod local;

pub use local::LocalRepository;
