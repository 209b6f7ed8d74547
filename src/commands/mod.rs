//! Command implementations
//!
//! Thin wrappers around the library: each command loads explicit inputs,
//! calls into the engine, and prints plain-text results. Exit codes are
//! decided in `main`.

mod categories;
mod pull;
mod push;
mod template;

pub use categories::Categories;
pub use pull::Pull;
pub use push::Push;
pub use template::Template;
