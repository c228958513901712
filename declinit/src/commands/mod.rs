mod check;
mod new;
mod render;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use declinit_builder::Class;
use declinit_manifest::{DeclinitToml, Registry};
use eyre::{Result, eyre};
use new::NewCommand;
use render::RenderCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for declinit_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "declinit")]
#[command(version)]
#[command(about = "Inspect and exercise constructors declared in a TOML manifest")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Render(cmd) => cmd.run(),
            Commands::New(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate declinit.toml and list its classes
    Check(CheckCommand),

    /// Print the generated definitions of a class
    Render(RenderCommand),

    /// Construct an instance and print it as JSON
    New(NewCommand),
}

/// Path to the manifest, shared by all commands.
#[derive(clap::Args)]
pub struct ManifestArgs {
    /// Path to declinit.toml (defaults to ./declinit.toml)
    #[arg(short, long, default_value = "declinit.toml")]
    pub config: PathBuf,
}

impl ManifestArgs {
    pub fn path(&self) -> &Path {
        &self.config
    }

    /// Load and lower the manifest, exiting with a report on failure.
    pub fn registry(&self) -> Registry {
        let manifest = DeclinitToml::open(&self.config).unwrap_or_exit();
        manifest.registry().unwrap_or_exit()
    }
}

pub(crate) fn find_class<'r>(registry: &'r Registry, name: &str) -> Result<&'r Class> {
    registry.get(name).ok_or_else(|| {
        let known = registry.names().collect::<Vec<_>>().join(", ");
        eyre!("unknown class '{}' (declared: {})", name, known)
    })
}
