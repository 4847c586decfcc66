//! # bsl-common-support
//!
//! Vendor support levels of configuration objects and platform compatibility modes.

pub mod compatibility_mode;
pub mod support_variant;

pub use compatibility_mode::CompatibilityMode;
pub use support_variant::SupportVariant;
