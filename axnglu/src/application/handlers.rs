use std::path::PathBuf;

use axnglu_core::error::Result;
use axnglu_core::{join, split_by_parts, split_by_size};
use tracing::{debug, info};

pub fn handle_split_by_size(file: PathBuf, size: String, clean: bool) -> Result<()> {
    info!(file = %file.display(), %size, clean, "splitting file by fragment size");
    let parts = split_by_size(&file, size.as_str(), clean)?;
    report_fragments(&parts);
    info!(fragments = parts.len(), "file split successfully");
    Ok(())
}

pub fn handle_split_by_parts(file: PathBuf, parts: u32, clean: bool) -> Result<()> {
    info!(file = %file.display(), parts, clean, "splitting file into fragments");
    let written = split_by_parts(&file, parts, clean)?;
    report_fragments(&written);
    info!(fragments = written.len(), "file split successfully");
    Ok(())
}

pub fn handle_join(fragment: PathBuf, clean: bool) -> Result<()> {
    info!(fragment = %fragment.display(), clean, "joining fragments");
    let out = join(&fragment, clean)?;
    println!("{}", out.display());
    info!(output = %out.display(), "files joined successfully");
    Ok(())
}

fn report_fragments(paths: &[PathBuf]) {
    for p in paths {
        debug!(fragment = %p.display(), "wrote fragment");
        println!("{}", p.display());
    }
}
