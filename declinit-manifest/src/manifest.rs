//! Manifest schema and validation.

use std::collections::HashSet;

use declinit_builder::{Tolerance, Type};
use declinit_core::{AFTER_INITIALIZE, is_valid_identifier};
use indexmap::IndexMap;
use serde::Deserialize;
use toml::Spanned;

use crate::{Result, SourceContext};

/// Root schema for declinit.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Classes in declaration order.
    #[serde(default)]
    pub classes: IndexMap<String, ClassDecl>,
}

/// One class and its parameters.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDecl {
    /// Parent class, which must be declared in the same manifest.
    #[serde(default)]
    pub extends: Option<Spanned<String>>,

    /// Unknown-option policy. Inherited from the parent when omitted.
    #[serde(default)]
    pub tolerant: Option<ToleranceDecl>,

    /// Positional parameters, in order.
    #[serde(default)]
    pub params: Vec<ParamDecl>,

    /// Keyword parameters, in order.
    #[serde(default)]
    pub options: Vec<ParamDecl>,
}

/// A declared parameter.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    pub name: Spanned<String>,

    /// Type name understood by [`Type::lookup`].
    #[serde(default, rename = "type")]
    pub ty: Option<Spanned<String>>,

    /// Constant default.
    #[serde(default)]
    pub default: Option<toml::Value>,

    /// Default to nil, which TOML cannot spell.
    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub reader: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceDecl {
    Reject,
    Ignore,
    Absorb,
}

impl From<ToleranceDecl> for Tolerance {
    fn from(decl: ToleranceDecl) -> Self {
        match decl {
            ToleranceDecl::Reject => Tolerance::Reject,
            ToleranceDecl::Ignore => Tolerance::Ignore,
            ToleranceDecl::Absorb => Tolerance::Absorb,
        }
    }
}

impl Manifest {
    /// Check names, parents, inheritance cycles, types and defaults.
    pub fn validate(&self, ctx: &SourceContext) -> Result<()> {
        for (name, class) in &self.classes {
            if !is_valid_identifier(name) {
                return Err(ctx.invalid_name(name, "class", ctx.class_header(name)));
            }
            if let Some(parent) = &class.extends {
                if !self.classes.contains_key(parent.get_ref()) {
                    return Err(ctx.unknown_parent(name, parent.get_ref(), parent.span()));
                }
            }
            self.check_cycle(name, ctx)?;

            for param in class.params.iter().chain(&class.options) {
                param.validate(ctx)?;
            }
        }
        Ok(())
    }

    fn check_cycle(&self, start: &str, ctx: &SourceContext) -> Result<()> {
        let mut seen = HashSet::new();
        let mut current = start;
        while let Some(parent) = self.classes.get(current).and_then(|c| c.extends.as_ref()) {
            if !seen.insert(current) || parent.get_ref() == start {
                return Err(ctx.inheritance_cycle(start, parent.span()));
            }
            current = parent.get_ref();
        }
        Ok(())
    }
}

impl ParamDecl {
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        let name = self.name.get_ref();
        if !is_valid_identifier(name) || name == AFTER_INITIALIZE {
            return Err(ctx.invalid_name(name, "parameter", Some(self.name.span())));
        }
        if let Some(ty) = &self.ty {
            if Type::lookup(ty.get_ref()).is_none() {
                return Err(ctx.unknown_type(ty.get_ref(), ty.span()));
            }
        }
        if self.optional && self.default.is_some() {
            return Err(ctx.conflicting_default(name, self.name.span()));
        }
        Ok(())
    }
}
