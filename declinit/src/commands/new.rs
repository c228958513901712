use clap::Args;
use declinit_core::Value;
use eyre::{Context, Result, eyre};
use tracing::debug;

use super::{ManifestArgs, find_class};

#[derive(Args)]
pub struct NewCommand {
    /// Class to instantiate
    pub class: String,

    /// Positional arguments, parsed as JSON (bare words are strings)
    pub args: Vec<String>,

    /// Keyword argument as key=value, value parsed like positionals
    #[arg(short = 'o', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    #[command(flatten)]
    pub manifest: ManifestArgs,
}

impl NewCommand {
    /// Run the new command
    pub fn run(&self) -> Result<()> {
        let registry = self.manifest.registry();
        let class = find_class(&registry, &self.class)?;

        let mut args = declinit_core::Args::new();
        for raw in &self.args {
            args = args.arg(parse_value(raw));
        }
        for raw in &self.options {
            let (key, value) = raw
                .split_once('=')
                .ok_or_else(|| eyre!("option '{}' is not in KEY=VALUE form", raw))?;
            args = args.opt(key, parse_value(value));
        }

        debug!(class = class.name(), "instantiating");
        let instance = class
            .instantiate(args)
            .map_err(|e| eyre!("{:?}", miette::Report::new(e)))?;
        let json =
            serde_json::to_string_pretty(&instance).wrap_err("failed to encode instance")?;
        println!("{}", json);
        Ok(())
    }
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw)
        .map(Value::from)
        .unwrap_or_else(|_| Value::from(raw))
}
