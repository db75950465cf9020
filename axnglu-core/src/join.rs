use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AxnError, IoResultExt, Result};
use crate::naming::{base_path, find_fragments, is_fragment};
use crate::transfer::{append_file, create_output};

/// Reassemble the fragment set that `input` belongs to into its base path.
///
/// Discovery always starts at `.001`, whatever member is passed in. The
/// output must not exist beforehand; a failure mid-way leaves it partially
/// written.
pub fn join<P: AsRef<Path>>(input: P, remove_fragments: bool) -> Result<PathBuf> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(AxnError::not_found("input file", input));
    }
    if !is_fragment(input) {
        return Err(AxnError::InvalidArgument(format!(
            "{} is not a fragment",
            input.display()
        )));
    }

    let fragments = find_fragments(input);
    if fragments.is_empty() {
        return Err(AxnError::not_found("fragment set", input));
    }

    let out_path = base_path(input);
    if out_path.exists() {
        return Err(AxnError::Conflict(out_path));
    }
    let mut out = match create_output(&out_path) {
        Ok(w) => w,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            return Err(AxnError::Conflict(out_path));
        }
        Err(e) => return Err(e).dest_side(&out_path),
    };

    for frag in &fragments {
        append_file(frag, &mut out, &out_path)?;
    }
    out.flush().dest_side(&out_path)?;
    drop(out);

    if remove_fragments {
        for frag in &fragments {
            fs::remove_file(frag).source_side(frag)?;
        }
    }
    Ok(out_path)
}
