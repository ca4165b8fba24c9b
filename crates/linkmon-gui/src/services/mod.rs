//! Business logic services
//!
//! Services encapsulate operations that interact with the core crates.

mod report_loader;

pub use report_loader::ReportLoader;
