#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::parameter::*;
use crate::model::Nargs;
use crate::parser::{ArgumentCapture, ConfigError, Console, GeneralParser, OptionCapture, Parser};

/// The base command line parser.
///
/// ### Example
/// ```
/// use defarg::{default_arg, CommandParser, Parameter, Store, StoreConst};
///
/// let parser = CommandParser::new("program")
///     .add(Parameter::option(StoreConst::new("true"), "verbose", Some('v')).default("false"))
///     .add(Parameter::option(default_arg("b"), "s", None).default("a"))
///     .add(Parameter::argument(Store, "input"))
///     .build()
///     .unwrap();
/// let namespace = parser.parse_tokens(&["-v", "in.txt", "--s"]).unwrap();
/// assert_eq!(namespace.get("verbose"), Some("true"));
/// assert_eq!(namespace.get("s"), Some("b"));
/// assert_eq!(namespace.get("input"), Some("in.txt"));
/// ```
pub struct CommandParser<'ap> {
    program: String,
    parameters: Vec<Parameter<'ap>>,
}

impl<'ap> CommandParser<'ap> {
    /// Create a command line parser.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            parameters: Vec::default(),
        }
    }

    /// Add an argument/option to the command line parser.
    ///
    /// The order of argument parameters corresponds to their positional order during parsing.
    /// The order of option parameters does not affect the command parser semantics.
    pub fn add(mut self, parameter: Parameter<'ap>) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build(self) -> Result<GeneralParser<'ap>, ConfigError> {
        let CommandParser {
            program,
            parameters,
        } = self;
        let mut option_captures: Vec<OptionCapture<'ap>> = Vec::default();
        let mut argument_captures: Vec<ArgumentCapture<'ap>> = Vec::default();

        for parameter in parameters.into_iter() {
            validate(&parameter)?;
            let inner = parameter.consume();
            #[cfg(feature = "tracing_debug")]
            debug!("Configuring {inner:?}.");

            match inner.class() {
                ParameterClass::Opt => option_captures.push(inner.into()),
                ParameterClass::Arg => argument_captures.push(inner.into()),
            };
        }

        let parser = Parser::new(option_captures, argument_captures)?;
        Ok(GeneralParser::new(program, parser, Box::new(Console::default())))
    }
}

fn validate(parameter: &Parameter) -> Result<(), ConfigError> {
    let name = parameter.name();

    if name.is_empty()
        || name.starts_with('-')
        || name.contains('=')
        || name.chars().any(char::is_whitespace)
    {
        return Err(ConfigError(format!(
            "Invalid parameter name '{name}'; must be non-empty, not start with '-', and contain neither '=' nor whitespace."
        )));
    }

    if let Some(short) = parameter.short() {
        if short == '-' || short == '=' || short.is_whitespace() {
            return Err(ConfigError(format!(
                "Invalid short option '{short}' for parameter '{name}'."
            )));
        }
    }

    // An action receives at most one value per occurrence.
    if let Nargs::Precisely(n) = parameter.nargs() {
        if n > 1 {
            return Err(ConfigError(format!(
                "Parameter '{name}' cannot take more than one value (nargs={n})."
            )));
        }
    }

    if parameter.class() == ParameterClass::Arg && parameter.has_default() {
        return Err(ConfigError(format!("Argument '{name}' cannot have a default.")));
    }

    Ok(())
}
