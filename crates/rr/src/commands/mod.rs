pub mod wad;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle WAD files
    Wad {
        #[command(subcommand)]
        command: wad::WadCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Wad { command } => command.handle(),
        }
    }
}
