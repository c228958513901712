use declinit_core::Instance;

use crate::{Callback, CodeFragment, Plugin, Settings};

/// Computes defaults for arguments that were not supplied.
///
/// Emits a callback rather than a statement, so a default sees every other
/// parameter already assigned. Only an unset slot is filled; an explicitly
/// passed value, `nil` included, is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValue;

impl Plugin for DefaultValue {
    fn name(&self) -> &'static str {
        "default_value"
    }

    fn call(&self, name: &str, settings: &Settings) -> Option<CodeFragment> {
        let default = settings.default_fn()?.clone();
        let slot = name.to_string();
        let source = format!("self.{}.get_or_insert_with(default_{});", name, name);

        let callback = Callback::new(source, move |instance: &mut Instance| {
            if !instance.is_set(&slot) {
                let value = default(&*instance);
                instance.set_ivar(slot.as_str(), value);
            }
            Ok(())
        });
        Some(callback.into())
    }
}
