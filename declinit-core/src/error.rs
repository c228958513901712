use miette::Diagnostic;
use thiserror::Error;

use crate::Value;

/// Result type for declaration and construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised while declaring parameters or constructing instances.
///
/// Declaration-time errors (`DuplicateParameter`, `InvalidName`,
/// `ReservedName`, `InvalidParameterOrder`) surface from `define`; the rest
/// surface from running a generated constructor.
#[derive(Debug, Error, Diagnostic, Clone, PartialEq)]
pub enum Error {
    #[error("parameter '{name}' is already declared")]
    #[diagnostic(
        code(declinit::duplicate_parameter),
        help("each parameter name may be declared once per class, including inherited ones")
    )]
    DuplicateParameter { name: String },

    #[error("'{name}' is not a valid parameter name")]
    #[diagnostic(
        code(declinit::invalid_name),
        help("names must start with a letter or underscore and contain only letters, digits and underscores")
    )]
    InvalidName { name: String },

    #[error("'{name}' is reserved for the generated after-initialize hook")]
    #[diagnostic(code(declinit::reserved_name))]
    ReservedName { name: String },

    #[error("required positional parameter '{name}' follows defaulted parameter '{after}'")]
    #[diagnostic(
        code(declinit::parameter_order),
        help("declare '{name}' before '{after}' or give it a default")
    )]
    InvalidParameterOrder { name: String, after: String },

    #[error("{class}: value {value} rejected for '{name}': {reason}")]
    #[diagnostic(code(declinit::type_constraint))]
    TypeConstraint {
        class: String,
        name: String,
        value: Value,
        reason: String,
    },

    #[error("{class}: missing {kind} argument '{name}'")]
    #[diagnostic(code(declinit::missing_argument))]
    MissingArgument {
        class: String,
        name: String,
        kind: &'static str,
    },

    #[error("{class}: wrong number of arguments (given {given}, expected {expected})")]
    #[diagnostic(code(declinit::arity))]
    TooManyArguments {
        class: String,
        given: usize,
        expected: usize,
    },

    #[error("{class}: unknown option '{name}'")]
    #[diagnostic(
        code(declinit::unknown_option),
        help("declare the option or make the class tolerant to unknown options")
    )]
    UnknownOption { class: String, name: String },

    #[error("{class}: undefined reader '{name}'")]
    #[diagnostic(code(declinit::no_reader))]
    NoSuchReader { class: String, name: String },

    #[error("{class} has no generated constructor")]
    #[diagnostic(
        code(declinit::not_installed),
        help("declare a parameter or call the builder on the class mixin first")
    )]
    NotInstalled { class: String },
}

impl Error {
    /// Returns true for errors raised while running a generated constructor.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            Self::TypeConstraint { .. }
                | Self::MissingArgument { .. }
                | Self::TooManyArguments { .. }
                | Self::UnknownOption { .. }
        )
    }
}
