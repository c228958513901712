use clap::Args;
use eyre::Result;

use super::{ManifestArgs, find_class};

#[derive(Args)]
pub struct RenderCommand {
    /// Class to render
    pub class: String,

    #[command(flatten)]
    pub manifest: ManifestArgs,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let registry = self.manifest.registry();
        let class = find_class(&registry, &self.class)?;
        print!("{}", class.source());
        Ok(())
    }
}
