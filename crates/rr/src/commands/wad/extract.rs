use clap::Args;
use miette::{Context, Result};
use rr_wad::Wad;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct ExtractArgs {
    /// An input WAD file
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// A target directory
    #[arg(short, long, value_name = "DIR")]
    directory: PathBuf,
}

impl ExtractArgs {
    pub fn handle(&self) -> Result<()> {
        info!("reading {}", self.file.display());
        let mut wad = Wad::load(&self.file)
            .context(format!("loading {}", self.file.display()))?;

        info!(
            "extracting {} files into {}",
            wad.len(),
            self.directory.display()
        );
        wad.extract(&self.directory)
            .context(format!("extracting into {}", self.directory.display()))?;

        Ok(())
    }
}
