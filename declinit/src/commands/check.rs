use clap::Args;
use eyre::Result;

use super::ManifestArgs;

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let registry = self.manifest.registry();

        println!("✓ {} is valid\n", self.manifest.path().display());
        println!(
            "  {} class{}:",
            registry.len(),
            if registry.len() == 1 { "" } else { "es" }
        );
        for class in registry.iter() {
            let parent = class
                .parent()
                .map(|p| format!(" < {}", p))
                .unwrap_or_default();
            println!(
                "    {}{}({})",
                class.name(),
                parent,
                class.builder().render_parameters()
            );
        }
        Ok(())
    }
}
