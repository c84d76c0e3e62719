pub mod extract;
pub mod pack;

#[derive(clap::Subcommand)]
pub enum WadCommands {
    /// Extract a WAD file into a directory
    Extract(extract::ExtractArgs),
    /// Pack a directory into a WAD file
    Pack(pack::PackArgs),
}

impl WadCommands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            WadCommands::Extract(extract) => extract.handle(),
            WadCommands::Pack(pack) => pack.handle(),
        }
    }
}
