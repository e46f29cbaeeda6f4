//! Workflow orchestration for Shipmark

mod changelog;
mod release;
mod validation;
mod version;

pub use changelog::*;
pub use release::*;
pub use validation::*;
pub use version::*;
