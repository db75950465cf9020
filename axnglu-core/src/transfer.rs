use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::{AxnError, IoResultExt, Result};

/// Copy the inclusive byte range `[byte_start, byte_end]` of `src` into a
/// freshly created (or truncated) `dest`.
pub fn copy_range(src: &Path, dest: &Path, byte_start: u64, byte_end: u64) -> Result<PathBuf> {
    let want = byte_end
        .checked_sub(byte_start)
        .and_then(|span| span.checked_add(1))
        .ok_or_else(|| {
            AxnError::InvalidArgument(format!("invalid byte range {byte_start}..={byte_end}"))
        })?;

    let mut input = File::open(src).source_side(src)?;
    input.seek(SeekFrom::Start(byte_start)).source_side(src)?;
    let mut out = File::create(dest).dest_side(dest)?;

    let n = pump(&mut input.take(want), &mut out, src, dest)?;
    if n != want {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("range ended after {n} of {want} bytes"),
        ))
        .source_side(src);
    }
    out.flush().dest_side(dest)?;
    Ok(dest.to_path_buf())
}

/// Append the whole of `src` to an already-open writer.
pub(crate) fn append_file<W: Write>(src: &Path, out: &mut W, dest: &Path) -> Result<u64> {
    let mut input = File::open(src).source_side(src)?;
    pump(&mut input, out, src, dest)
}

/// Opens `dest` for appending; it must not exist yet.
pub(crate) fn create_output(dest: &Path) -> std::io::Result<BufWriter<File>> {
    let f = File::options().append(true).create_new(true).open(dest)?;
    Ok(BufWriter::with_capacity(256 * 1024, f))
}

// Reads and writes are attributed to their own side, which `io::copy`
// cannot tell apart.
fn pump<R: Read, W: Write>(r: &mut R, w: &mut W, src: &Path, dest: &Path) -> Result<u64> {
    let mut buf = vec![0u8; 256 * 1024];
    let mut total = 0u64;
    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).source_side(src),
        };
        w.write_all(&buf[..n]).dest_side(dest)?;
        total += n as u64;
    }
    Ok(total)
}
