use crate::model::Nargs;
use crate::namespace::Namespace;

/// Marker trait for actions that can formulate an option in the Cli.
pub trait CliOption {}

/// Marker trait for actions that can formulate an argument in the Cli.
pub trait CliArgument {}

/// Behaviour to resolve the value stored for a matched parameter.
///
/// The parser invokes the action once per occurrence of its parameter on the Cli, and never when the parameter is absent.
/// An argument whose `Nargs` allows zero values is absent when no token is left for it.
pub trait Action {
    /// Write the resolved value into `namespace` at `destination`.
    ///
    /// `value` is `None` when the parameter was matched without consuming a value token.
    fn invoke(&self, namespace: &mut Namespace, destination: &str, value: Option<&str>);

    /// Get the `Nargs` for this implementation.
    fn nargs(&self) -> Nargs;
}

/// An action that stores the value given on the Cli (`Nargs::Precisely(1)`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Store;

impl CliOption for Store {}
impl CliArgument for Store {}

impl Action for Store {
    fn invoke(&self, namespace: &mut Namespace, destination: &str, value: Option<&str>) {
        // Without a value, the namespace is left untouched.
        if let Some(value) = value {
            namespace.set(destination, Some(value.to_string()));
        }
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(1)
    }
}

/// An option action that takes no values (`Nargs::Precisely(0)`), storing a constant when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConst {
    target: String,
}

impl CliOption for StoreConst {}

impl StoreConst {
    /// Create a store-const action (option).
    ///
    /// ### Example
    /// ```
    /// use defarg::{Parameter, StoreConst};
    ///
    /// Parameter::option(StoreConst::new("true"), "verbose", Some('v')).default("false");
    /// ```
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Action for StoreConst {
    fn invoke(&self, namespace: &mut Namespace, destination: &str, _value: Option<&str>) {
        namespace.set(destination, Some(self.target.clone()));
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(0)
    }
}

/// An option action with two defaults (`Nargs::AtMostOne`).
///
/// In addition to the ordinary default of the parameter (see [`Parameter::default`](crate::Parameter::default)),
/// `DefaultArg` carries a second default which is stored when the option is present on the Cli but given no value.
///
/// | Cli              | Stored value                |
/// |------------------|-----------------------------|
/// | (absent)         | the parameter's default     |
/// | `--NAME`         | the `DefaultArg` fallback   |
/// | `--NAME VALUE`   | `VALUE`                     |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultArg {
    fallback: String,
}

impl CliOption for DefaultArg {}

impl DefaultArg {
    /// Create a dual-default action (option), storing `fallback` when the option is given without a value.
    /// Any string is accepted, including the empty string.
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
        }
    }

    /// The value stored when the option is given without a value.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Action for DefaultArg {
    fn invoke(&self, namespace: &mut Namespace, destination: &str, value: Option<&str>) {
        let resolved = match value {
            Some(value) => value,
            None => self.fallback.as_str(),
        };
        namespace.set(destination, Some(resolved.to_string()));
    }

    fn nargs(&self) -> Nargs {
        Nargs::AtMostOne
    }
}

/// Create a [`DefaultArg`] action for an option which provides two defaults.
///
/// ### Example
/// ```
/// use defarg::{default_arg, CommandParser, Parameter};
///
/// let parser = CommandParser::new("program")
///     .add(Parameter::option(default_arg("b"), "s", None).default("a"))
///     .build()
///     .unwrap();
/// let namespace = parser.parse_tokens(&["--s"]).unwrap();
/// assert_eq!(namespace.get("s"), Some("b"));
/// ```
pub fn default_arg(fallback: impl Into<String>) -> DefaultArg {
    DefaultArg::new(fallback)
}
