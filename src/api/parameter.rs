use crate::api::action::*;
use crate::matcher::{ArgumentConfig, Bound, OptionConfig};
use crate::model::Nargs;
use crate::parser::{ArgumentCapture, Capture, OptionCapture};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ParameterClass {
    Opt,
    Arg,
}

pub(super) struct ParameterInner<'ap> {
    class: ParameterClass,
    action: Box<dyn Action + 'ap>,
    nargs: Nargs,
    name: String,
    short: Option<char>,
    default: Option<String>,
    destination: Option<String>,
}

impl<'ap> ParameterInner<'ap> {
    pub(super) fn class(&self) -> ParameterClass {
        self.class
    }

    fn destination(&self) -> String {
        match &self.destination {
            Some(destination) => destination.clone(),
            None => self.name.replace('-', "_"),
        }
    }

    fn capture(self) -> Capture<'ap> {
        let destination = self.destination();
        let ParameterInner {
            action, default, ..
        } = self;
        Capture::new(destination, default, action)
    }
}

impl<'ap> std::fmt::Debug for ParameterInner<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let class = match &self.class {
            ParameterClass::Opt => "Opt",
            ParameterClass::Arg => "Arg",
        };
        let name = match &self.class {
            ParameterClass::Opt => format!("--{n}", n = self.name),
            ParameterClass::Arg => self.name.to_string(),
        };
        let short = match &self.short {
            Some(s) => format!(" -{s},"),
            None => "".to_string(),
        };
        let default = match &self.default {
            Some(d) => format!(" default='{d}'"),
            None => "".to_string(),
        };

        write!(
            f,
            "{class}[{nargs}, {name},{short} dest={destination}{default}]",
            nargs = self.nargs,
            destination = self.destination(),
        )
    }
}

impl<'ap> From<&ParameterInner<'ap>> for OptionConfig {
    fn from(value: &ParameterInner<'ap>) -> Self {
        OptionConfig::new(value.name.clone(), value.short, Bound::from(value.nargs))
    }
}

impl<'ap> From<ParameterInner<'ap>> for OptionCapture<'ap> {
    fn from(value: ParameterInner<'ap>) -> Self {
        let config = OptionConfig::from(&value);
        (config, value.capture())
    }
}

impl<'ap> From<&ParameterInner<'ap>> for ArgumentConfig {
    fn from(value: &ParameterInner<'ap>) -> Self {
        ArgumentConfig::new(value.name.clone(), Bound::from(value.nargs))
    }
}

impl<'ap> From<ParameterInner<'ap>> for ArgumentCapture<'ap> {
    fn from(value: ParameterInner<'ap>) -> Self {
        let config = ArgumentConfig::from(&value);
        (config, value.capture())
    }
}

/// An argument/option for the `CommandParser`.
/// Used with `CommandParser::add`.
pub struct Parameter<'ap>(ParameterInner<'ap>);

impl<'ap> Parameter<'ap> {
    /// Create an option parameter, matched by `--NAME` (or `-SHORT`) on the Cli.
    ///
    /// ### Example
    /// ```
    /// use defarg::{default_arg, Parameter};
    ///
    /// Parameter::option(default_arg("debug"), "log-level", Some('l')).default("info");
    /// ```
    pub fn option(
        action: impl Action + CliOption + 'ap,
        name: impl Into<String>,
        short: Option<char>,
    ) -> Self {
        let nargs = action.nargs();
        Self(ParameterInner {
            class: ParameterClass::Opt,
            action: Box::new(action),
            nargs,
            name: name.into(),
            short,
            default: None,
            destination: None,
        })
    }

    /// Create an argument parameter, matched positionally on the Cli.
    ///
    /// ### Example
    /// ```
    /// use defarg::{Parameter, Store};
    ///
    /// Parameter::argument(Store, "input");
    /// ```
    pub fn argument(action: impl Action + CliArgument + 'ap, name: impl Into<String>) -> Self {
        let nargs = action.nargs();
        Self(ParameterInner {
            class: ParameterClass::Arg,
            action: Box::new(action),
            nargs,
            name: name.into(),
            short: None,
            default: None,
            destination: None,
        })
    }

    /// Set the value stored for this option when it is absent from the Cli.
    /// If repeated, only the final value will apply to the parameter.
    ///
    /// Without a default, an absent option is stored as `None`.
    /// Arguments are always present on the Cli, so configuring an argument default is rejected by `CommandParser::build`.
    pub fn default(self, value: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.default = Some(value.into());
        Self(inner)
    }

    /// Set the `Namespace` key under which this parameter's value is stored.
    /// If repeated, only the final destination will apply to the parameter.
    ///
    /// By default, the destination is the parameter name with each `-` replaced by `_`.
    ///
    /// ### Example
    /// ```
    /// use defarg::{CommandParser, Parameter, Store};
    ///
    /// let parser = CommandParser::new("program")
    ///     .add(Parameter::option(Store, "output", Some('o')).destination("path"))
    ///     .build()
    ///     .unwrap();
    /// let namespace = parser.parse_tokens(&["-o", "out.txt"]).unwrap();
    /// assert_eq!(namespace.get("path"), Some("out.txt"));
    /// ```
    pub fn destination(self, destination: impl Into<String>) -> Self {
        let mut inner = self.0;
        inner.destination = Some(destination.into());
        Self(inner)
    }

    pub(super) fn class(&self) -> ParameterClass {
        self.0.class()
    }

    pub(super) fn name(&self) -> &str {
        &self.0.name
    }

    pub(super) fn short(&self) -> Option<char> {
        self.0.short
    }

    pub(super) fn nargs(&self) -> Nargs {
        self.0.nargs
    }

    pub(super) fn has_default(&self) -> bool {
        self.0.default.is_some()
    }

    pub(super) fn consume(self) -> ParameterInner<'ap> {
        self.0
    }
}

impl<'ap> std::fmt::Debug for Parameter<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
