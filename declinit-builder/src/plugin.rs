//! Plugin contract for per-parameter code generation.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;

use crate::{CodeFragment, Settings};

/// A code-generation strategy applied to every declared parameter.
///
/// Plugins are stateless: given a parameter name and its settings they emit
/// at most one fragment. The builder keeps them in registration order, and
/// fragments from one declaration follow that order.
///
/// # Example
///
/// ```
/// use declinit_builder::{CodeFragment, Plugin, Settings, Statement};
///
/// struct Trace;
///
/// impl Plugin for Trace {
///     fn name(&self) -> &'static str {
///         "trace"
///     }
///
///     fn call(&self, name: &str, _settings: &Settings) -> Option<CodeFragment> {
///         let line = format!("trace!({});", name);
///         Some(Statement::custom(line, |_frame| Ok(())).into())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Identity of the plugin. Registering a second plugin with the same
    /// name has no effect.
    fn name(&self) -> &'static str;

    /// Emit the fragment for one parameter declaration, if any.
    fn call(&self, name: &str, settings: &Settings) -> Option<CodeFragment>;
}

/// The active plugins, keyed by name, in registration order.
#[derive(Clone, Default)]
pub struct PluginSet {
    plugins: Arc<IndexMap<&'static str, Arc<dyn Plugin>>>,
}

impl PluginSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a set with `plugin` appended, or an identical set if a plugin
    /// with the same name is already present.
    pub fn with(&self, plugin: Arc<dyn Plugin>) -> Self {
        if self.contains(plugin.name()) {
            return self.clone();
        }
        let mut plugins = IndexMap::clone(&self.plugins);
        plugins.insert(plugin.name(), plugin);
        Self {
            plugins: Arc::new(plugins),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.plugins.keys().copied()
    }

    /// Apply every plugin, in order, to one declaration.
    pub fn apply(&self, name: &str, settings: &Settings) -> Vec<CodeFragment> {
        self.plugins
            .values()
            .filter_map(|plugin| plugin.call(name, settings))
            .collect()
    }
}

impl fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
