//! CLI entry point for the face-aware photo-mosaic builder

use clap::Parser;
use facemosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> facemosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
