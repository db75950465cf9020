use clap::{ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Split files into numbered fragments and glue them back", long_about = None)]
pub struct Cli {
    /// Log at debug level (overridden by AXNGLU_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a file by number of fragments or by fragment size
    #[command(visible_aliases = ["s", "axe", "ax"])]
    #[command(group(ArgGroup::new("method").required(true).args(["size", "parts"])))]
    Split {
        file: PathBuf,

        /// Size of each fragment, e.g. 250mb, 4.37gb or a byte count
        #[arg(short, long)]
        size: Option<String>,

        /// Number of fragments (2-999)
        #[arg(short, long, visible_alias = "fragments", short_alias = 'f')]
        parts: Option<u32>,

        /// Remove the original file once every fragment is written
        #[arg(short = 'R', long, short_alias = 'D', alias = "remove-original")]
        clean: bool,
    },

    /// Join the fragment set the given fragment belongs to
    #[command(visible_aliases = ["j", "glue", "glu"])]
    Join {
        /// Any fragment of the set, conventionally the `.001` one
        fragment: PathBuf,

        /// Remove the fragments once the file is reassembled
        #[arg(short = 'R', long, short_alias = 'D', alias = "remove-original")]
        clean: bool,
    },
}
