use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Width of the zero-padded fragment index.
pub const INDEX_DIGITS: usize = 3;
/// Highest index expressible in `INDEX_DIGITS` digits.
pub const MAX_FRAGMENTS: u32 = 999;

/// True when the path ends in a run of exactly three ASCII digits.
pub fn is_fragment(path: &Path) -> bool {
    let bytes = path.as_os_str().as_encoded_bytes();
    let run = bytes
        .iter()
        .rev()
        .take_while(|b| b.is_ascii_digit())
        .count();
    run == INDEX_DIGITS
}

/// Strip a trailing `.DDD` suffix, if any.
pub fn base_path(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext)
            if ext.len() == INDEX_DIGITS
                && ext.as_encoded_bytes().iter().all(u8::is_ascii_digit) =>
        {
            path.with_extension("")
        }
        _ => path.to_path_buf(),
    }
}

/// `<base>.<index>` with the index zero-padded to three digits.
pub fn fragment_path(base: &Path, index: u32) -> PathBuf {
    let mut s = OsString::from(base.as_os_str());
    s.push(format!(".{index:0width$}", width = INDEX_DIGITS));
    PathBuf::from(s)
}

/// Probe `<base>.001`, `<base>.002`, ... and collect each one that exists,
/// stopping at the first missing index.
///
/// Accepts either the base path or any member of the set. Fragments after a
/// gap in the numbering are not returned.
pub fn find_fragments(path: &Path) -> Vec<PathBuf> {
    let base = base_path(path);
    (1..=MAX_FRAGMENTS)
        .map(|i| fragment_path(&base, i))
        .take_while(|p| p.exists())
        .collect()
}
