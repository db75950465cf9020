// axnglu_core/src/domain.rs
use std::path::PathBuf;

/// One planned fragment: 1-based `index`, inclusive byte range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentDescriptor {
    pub path: PathBuf,
    pub index: u32,
    pub byte_start: u64,
    pub byte_end: u64,
}

impl FragmentDescriptor {
    pub fn byte_len(&self) -> u64 {
        self.byte_end - self.byte_start + 1
    }
}
