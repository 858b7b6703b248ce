//! Browser provider protocol definitions.
//!
//! A provider lists the browser configurations it can launch (manifests) and
//! opens a session for one of them against a target.

mod factory;
mod manifest;
mod traits;

pub use factory::*;
pub use manifest::*;
pub use traits::*;
