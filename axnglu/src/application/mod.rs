pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use axnglu_core::error::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Split {
            file,
            size,
            parts,
            clean,
        } => match (size, parts) {
            (Some(size), _) => handlers::handle_split_by_size(file, size, clean),
            (None, Some(parts)) => handlers::handle_split_by_parts(file, parts, clean),
            (None, None) => Err(axnglu_core::AxnError::InvalidArgument(
                "either --size or --parts is required".into(),
            )),
        },
        Commands::Join { fragment, clean } => handlers::handle_join(fragment, clean),
    }
}
