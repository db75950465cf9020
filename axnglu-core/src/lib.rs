#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod join;
pub mod naming;
pub mod size;
pub mod split;
pub mod transfer;

// Re-exports: stable API surface
pub use domain::FragmentDescriptor;
pub use error::{AxnError, ErrorKind, Result};
pub use join::join;
pub use size::{SizeSpec, parse_size};
pub use split::{plan_fragments, split_by_parts, split_by_size};
