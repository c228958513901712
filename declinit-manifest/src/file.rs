//! Loading declinit.toml from disk or memory.

use std::{path::Path, str::FromStr};

use crate::{Error, Manifest, Registry, Result, SourceContext};

/// A parsed and validated manifest together with its source, so that later
/// lowering errors can still point into the file.
#[derive(Debug)]
pub struct DeclinitToml {
    source: SourceContext,
    manifest: Manifest,
}

impl DeclinitToml {
    /// Read and validate a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse and validate manifest content, naming it `filename` in errors.
    pub fn parse(content: &str, filename: &str) -> Result<Self> {
        let source = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
        manifest.validate(&source)?;
        Ok(Self { source, manifest })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Build the declared classes.
    pub fn registry(&self) -> Result<Registry> {
        Registry::build(&self.manifest, &self.source)
    }
}

impl FromStr for DeclinitToml {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, "declinit.toml")
    }
}
