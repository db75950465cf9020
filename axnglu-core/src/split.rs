use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::FragmentDescriptor;
use crate::error::{AxnError, IoResultExt, Result};
use crate::naming::{MAX_FRAGMENTS, fragment_path, is_fragment};
use crate::size::SizeSpec;
use crate::transfer::copy_range;

/// Split `file` into fragments of `size` bytes each (the last one takes the
/// remainder). Returns the fragment paths in index order.
///
/// Fragments already written stay on disk if a later one fails.
pub fn split_by_size<P, S>(file: P, size: S, remove_original: bool) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    S: Into<SizeSpec>,
{
    let file = file.as_ref();
    let file_size = regular_file_size(file)?;
    let part_size = size.into().resolve()?;
    split_with(file, file_size, part_size, remove_original)
}

/// Split `file` into `parts` fragments of `ceil(size / parts)` bytes.
pub fn split_by_parts<P: AsRef<Path>>(
    file: P,
    parts: u32,
    remove_original: bool,
) -> Result<Vec<PathBuf>> {
    let file = file.as_ref();
    let file_size = regular_file_size(file)?;
    if !(2..=MAX_FRAGMENTS).contains(&parts) {
        return Err(AxnError::InvalidArgument(format!(
            "number of parts must be between 2 and {MAX_FRAGMENTS}, got {parts}"
        )));
    }
    let part_size = file_size.div_ceil(u64::from(parts));
    split_with(file, file_size, part_size, remove_original)
}

/// Lay out the fragments covering a `file_size`-byte file at `base`.
///
/// Fails when `part_size` is zero, when it would yield a single fragment (or
/// none, for an empty file), or when more than 999 fragments are needed.
pub fn plan_fragments(
    base: &Path,
    file_size: u64,
    part_size: u64,
) -> Result<Vec<FragmentDescriptor>> {
    if part_size == 0 {
        return Err(AxnError::InvalidArgument("zero fragment size".into()));
    }
    let total = file_size.div_ceil(part_size);
    if total <= 1 {
        return Err(AxnError::InvalidArgument(format!(
            "fragment size {part_size} is not smaller than the file ({file_size} bytes)"
        )));
    }
    if total > u64::from(MAX_FRAGMENTS) {
        return Err(AxnError::InvalidArgument(format!(
            "fragment size {part_size} needs {total} fragments, at most {MAX_FRAGMENTS} allowed"
        )));
    }

    Ok((0..total)
        .map(|i| {
            let index = (i + 1) as u32;
            FragmentDescriptor {
                path: fragment_path(base, index),
                index,
                byte_start: i * part_size,
                byte_end: (i + 1).saturating_mul(part_size).min(file_size) - 1,
            }
        })
        .collect())
}

fn split_with(
    file: &Path,
    file_size: u64,
    part_size: u64,
    remove_original: bool,
) -> Result<Vec<PathBuf>> {
    if is_fragment(file) {
        return Err(AxnError::InvalidArgument(format!(
            "{} already looks like a fragment",
            file.display()
        )));
    }
    let plan = plan_fragments(file, file_size, part_size)?;

    let mut written = Vec::with_capacity(plan.len());
    for d in &plan {
        written.push(copy_range(file, &d.path, d.byte_start, d.byte_end)?);
    }

    if remove_original {
        fs::remove_file(file).source_side(file)?;
    }
    Ok(written)
}

fn regular_file_size(file: &Path) -> Result<u64> {
    match fs::metadata(file) {
        Ok(md) if md.is_file() => Ok(md.len()),
        _ => Err(AxnError::not_found("input file", file)),
    }
}
