use clap::Args;
use miette::{Context, Result};
use rr_wad::Wad;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct PackArgs {
    /// An input directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,

    /// A target WAD file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,
}

impl PackArgs {
    pub fn handle(&self) -> Result<()> {
        info!("reading directory {}", self.directory.display());
        let mut wad = Wad::from_directory(&self.directory)
            .context(format!("scanning {}", self.directory.display()))?;

        info!("saving {} files to {}", wad.len(), self.file.display());
        wad.save(&self.file)
            .context(format!("saving {}", self.file.display()))?;

        Ok(())
    }
}
