//! Lowering a validated manifest to classes.

use std::collections::HashSet;

use declinit_builder::{Class, Settings, Tolerance, Type};
use declinit_core::Value;
use indexmap::IndexMap;

use crate::{ClassDecl, Manifest, ParamDecl, Result, SourceContext};

/// Classes built from a manifest, in manifest order.
#[derive(Debug, Default)]
pub struct Registry {
    classes: IndexMap<String, Class>,
}

impl Registry {
    /// Build every class, parents before children. An inheritance cycle is
    /// reported even when the manifest was never validated.
    pub fn build(manifest: &Manifest, ctx: &SourceContext) -> Result<Self> {
        let mut registry = Self::default();
        let mut building = HashSet::new();
        for name in manifest.classes.keys() {
            registry.build_class(name, manifest, ctx, &mut building)?;
        }
        registry.classes.sort_by(|a, _, b, _| {
            manifest
                .classes
                .get_index_of(a)
                .cmp(&manifest.classes.get_index_of(b))
        });
        Ok(registry)
    }

    pub fn get(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Class> {
        self.classes.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn build_class(
        &mut self,
        name: &str,
        manifest: &Manifest,
        ctx: &SourceContext,
        building: &mut HashSet<String>,
    ) -> Result<()> {
        if self.classes.contains_key(name) {
            return Ok(());
        }
        let Some(decl) = manifest.classes.get(name) else {
            return Ok(());
        };

        let mut class = match &decl.extends {
            Some(parent) => {
                building.insert(name.to_string());
                if building.contains(parent.get_ref()) {
                    return Err(ctx.inheritance_cycle(name, parent.span()));
                }
                self.build_class(parent.get_ref(), manifest, ctx, building)?;
                building.remove(name);
                let Some(parent_class) = self.classes.get(parent.get_ref()) else {
                    return Err(ctx.unknown_parent(name, parent.get_ref(), parent.span()));
                };
                parent_class.subclass(name)
            }
            None => Class::new(name),
        };

        if let Some(tolerant) = decl.tolerant {
            match Tolerance::from(tolerant) {
                Tolerance::Reject => class.intolerant_to_unknown_options(),
                Tolerance::Ignore => class.tolerant_to_unknown_options(),
                Tolerance::Absorb => class.absorbing_unknown_options(),
            };
        }

        declare(&mut class, decl, ctx)?;
        self.classes.insert(name.to_string(), class);
        Ok(())
    }
}

fn declare(class: &mut Class, decl: &ClassDecl, ctx: &SourceContext) -> Result<()> {
    let class_name = class.name().to_string();
    for param in &decl.params {
        let settings = settings(param, ctx)?;
        class
            .param(param.name.get_ref(), settings)
            .map_err(|e| ctx.declaration(&class_name, param.name.span(), e))?;
    }
    for option in &decl.options {
        let settings = settings(option, ctx)?;
        class
            .option(option.name.get_ref(), settings)
            .map_err(|e| ctx.declaration(&class_name, option.name.span(), e))?;
    }
    Ok(())
}

fn settings(param: &ParamDecl, ctx: &SourceContext) -> Result<Settings> {
    let mut settings = Settings::new();
    if let Some(ty) = &param.ty {
        let Some(resolved) = Type::lookup(ty.get_ref()) else {
            return Err(ctx.unknown_type(ty.get_ref(), ty.span()));
        };
        settings = settings.of_type(resolved);
    }
    if let Some(default) = &param.default {
        settings = settings.default_value(to_value(default.clone()));
    } else if param.optional {
        settings = settings.default_value(Value::Nil);
    }
    if let Some(reader) = param.reader {
        settings = settings.reader(reader);
    }
    Ok(settings)
}

/// Convert a TOML value to a [`Value`]. Datetimes become strings.
pub fn to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::Str(s),
        toml::Value::Integer(i) => Value::Int(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::Str(dt.to_string()),
        toml::Value::Array(items) => Value::List(items.into_iter().map(to_value).collect()),
        toml::Value::Table(entries) => {
            Value::Map(entries.into_iter().map(|(k, v)| (k, to_value(v))).collect())
        }
    }
}
