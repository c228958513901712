//! Default code-generation strategies.
//!
//! These are ordinary [`Plugin`](crate::Plugin) implementations; the builder
//! installs them in this order:
//!
//! 1. [`TypeConstraint`] - checks and coerces supplied arguments
//! 2. [`VariableSetter`] - assigns the (coerced) argument to its slot
//! 3. [`DefaultValue`] - fills unset slots after all statements ran

mod default_value;
mod type_constraint;
mod variable_setter;

pub use default_value::DefaultValue;
pub use type_constraint::TypeConstraint;
pub use variable_setter::VariableSetter;
