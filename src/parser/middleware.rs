use std::env;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::namespace::Namespace;
use crate::parser::base::*;
use crate::parser::interface::UserInterface;

/// The configured command line parser.
/// Built via `CommandParser::build`.
pub struct GeneralParser<'ap> {
    program: String,
    parser: Parser<'ap>,
    user_interface: Box<dyn UserInterface>,
}

impl<'ap> std::fmt::Debug for GeneralParser<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .finish()
    }
}

impl<'ap> GeneralParser<'ap> {
    pub(crate) fn new(
        program: impl Into<String>,
        parser: Parser<'ap>,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            parser,
            user_interface,
        }
    }

    /// The program name this parser was configured with.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the command line parser against the input tokens.
    /// The parser will process the input tokens and return the resolved `Namespace` upon success.
    ///
    /// In the case of a parse error, the error and its location are printed to stderr.
    /// The result is an error with the exit code for the program (`1`).
    ///
    /// ### Example
    /// ```
    /// use defarg::{default_arg, CommandParser, Parameter};
    ///
    /// let parser = CommandParser::new("program")
    ///     .add(Parameter::option(default_arg("b"), "s", None).default("a"))
    ///     .build()
    ///     .unwrap();
    ///
    /// let namespace = parser.parse_tokens(&["--s", "c"]).unwrap();
    /// assert_eq!(namespace.get("s"), Some("c"));
    /// ```
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Namespace, i32> {
        #[cfg(feature = "tracing_debug")]
        debug!("Parsing {p} with {tokens:?}.", p = self.program);

        match self.parser.consume(tokens) {
            Ok(namespace) => {
                #[cfg(feature = "tracing_debug")]
                debug!("Parsed {p}: {namespace}.", p = self.program);
                Ok(namespace)
            }
            Err((offset, parse_error)) => {
                #[cfg(feature = "tracing_debug")]
                debug!(
                    "Failed to parse {p} at offset {offset}: {parse_error}.",
                    p = self.program
                );
                self.user_interface.print_error(parse_error);
                self.user_interface.print_error_context(tokens, offset);
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    /// In the case of a parse error, the process exits with the exit code.
    ///
    /// ### Example
    /// ```no_run
    /// use defarg::{default_arg, CommandParser, Parameter};
    ///
    /// let namespace = CommandParser::new("program")
    ///     .add(Parameter::option(default_arg("b"), "s", None).default("a"))
    ///     .build()
    ///     .expect("The parser configuration must be valid.")
    ///     .parse();
    /// println!("s: {:?}", namespace.get("s"));
    /// ```
    pub fn parse(self) -> Namespace {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(namespace) => namespace,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{default_arg, Store};
    use crate::matcher::{ArgumentConfig, Bound, OptionConfig};
    use crate::parser::interface::util::InMemoryInterface;
    use rstest::rstest;

    fn general_parser(interface: &InMemoryInterface) -> GeneralParser<'static> {
        let parser = Parser::new(
            vec![(
                OptionConfig::new("s", None, Bound::range(0, 1)),
                Capture::new("s", Some("a".to_string()), Box::new(default_arg("b"))),
            )],
            vec![(
                ArgumentConfig::new("item", Bound::range(1, 1)),
                Capture::new("item", None, Box::new(Store)),
            )],
        )
        .unwrap();
        GeneralParser::new("program", parser, Box::new(interface.clone()))
    }

    #[rstest]
    #[case(vec!["x"], "a")]
    #[case(vec!["x", "--s"], "b")]
    #[case(vec!["--s", "c", "x"], "c")]
    fn parse_tokens(#[case] tokens: Vec<&str>, #[case] expected: &str) {
        // Setup
        let interface = InMemoryInterface::default();
        let parser = general_parser(&interface);
        assert_eq!(parser.program(), "program");

        // Execute
        let namespace = parser.parse_tokens(&tokens[..]).unwrap();

        // Verify
        assert_eq!(namespace.get("s"), Some(expected));
        assert_eq!(namespace.get("item"), Some("x"));
        assert_eq!(interface.consume(), (None, None));
    }

    #[rstest]
    #[case(vec!["--s"], 3, "Parse error: Not enough tokens provided to parameter 'item'.")]
    #[case(vec!["x", "--t"], 1, "Parse error: Option 't' does not exist.")]
    #[case(vec!["x", "y"], 1, "Parse error: Unexpected argument 'y'; no more arguments to match against.")]
    fn parse_tokens_error(
        #[case] tokens: Vec<&str>,
        #[case] offset: usize,
        #[case] message: &str,
    ) {
        // Setup
        let interface = InMemoryInterface::default();
        let parser = general_parser(&interface);

        // Execute
        let exit_code = parser.parse_tokens(&tokens[..]).unwrap_err();

        // Verify
        assert_eq!(exit_code, 1);
        let (error, error_context) = interface.consume();
        assert_eq!(error, Some(message.to_string()));
        assert_eq!(
            error_context,
            Some((tokens.iter().map(|t| t.to_string()).collect(), offset))
        );
    }
}
