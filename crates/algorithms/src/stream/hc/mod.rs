//! HC family of table-driven stream ciphers

pub mod hc256;

pub use hc256::{Hc256, Hc256Core};
