//! Ordered parameter declarations.

use std::sync::Arc;

use declinit_core::{AFTER_INITIALIZE, Error, Result, is_valid_identifier};

use crate::{ParamKind, Settings};

/// Placeholder rendered for parameters whose value comes from a default.
pub const UNDEFINED: &str = "UNDEFINED";

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub settings: Settings,
}

impl Parameter {
    pub fn kind(&self) -> ParamKind {
        self.settings.kind()
    }

    fn render(&self) -> String {
        match (self.kind(), self.settings.has_default()) {
            (ParamKind::Positional, false) => self.name.clone(),
            (ParamKind::Positional, true) => format!("{} = {}", self.name, UNDEFINED),
            (ParamKind::Keyword, false) => format!("{}:", self.name),
            (ParamKind::Keyword, true) => format!("{}: {}", self.name, UNDEFINED),
        }
    }
}

/// The parameters declared so far, in declaration order.
///
/// A signature is never mutated: [`Signature::add`] returns a new value and
/// leaves the receiver untouched, so a parent class and its subclasses can
/// hold signatures sharing a common prefix.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    params: Arc<Vec<Parameter>>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new signature with `name` appended.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidName`] if `name` is not an identifier
    /// - [`Error::ReservedName`] for the after-initialize hook name
    /// - [`Error::DuplicateParameter`] if `name` is already declared
    /// - [`Error::InvalidParameterOrder`] if a required positional follows
    ///   a defaulted one
    pub fn add(&self, name: &str, settings: Settings) -> Result<Signature> {
        if !is_valid_identifier(name) {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }
        if name == AFTER_INITIALIZE {
            return Err(Error::ReservedName {
                name: name.to_string(),
            });
        }
        if self.contains(name) {
            return Err(Error::DuplicateParameter {
                name: name.to_string(),
            });
        }
        if settings.kind() == ParamKind::Positional && !settings.has_default() {
            if let Some(defaulted) = self.positionals().find(|p| p.settings.has_default()) {
                return Err(Error::InvalidParameterOrder {
                    name: name.to_string(),
                    after: defaulted.name.clone(),
                });
            }
        }

        let mut params = Vec::with_capacity(self.params.len() + 1);
        params.extend(self.params.iter().cloned());
        params.push(Parameter {
            name: name.to_string(),
            settings,
        });
        Ok(Self {
            params: Arc::new(params),
        })
    }

    /// All parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn positionals(&self) -> impl Iterator<Item = &Parameter> {
        self.params
            .iter()
            .filter(|p| p.kind() == ParamKind::Positional)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(|p| p.kind() == ParamKind::Keyword)
    }

    /// Number of positionals that must be supplied by the caller.
    pub fn required_positionals(&self) -> usize {
        self.positionals()
            .filter(|p| !p.settings.has_default())
            .count()
    }

    /// Render the formal parameter list: positionals first, then keywords,
    /// each group in declaration order.
    pub fn render_parameter_list(&self) -> String {
        self.positionals()
            .chain(self.keywords())
            .map(Parameter::render)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
