use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Action;
use crate::matcher::*;
use crate::namespace::Namespace;

pub(crate) type OptionCapture<'ap> = (OptionConfig, Capture<'ap>);
pub(crate) type ArgumentCapture<'ap> = (ArgumentConfig, Capture<'ap>);

/// Error when the command line parser is misconfigured.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

impl From<TokenMatcherError> for ConfigError {
    fn from(error: TokenMatcherError) -> Self {
        match error {
            TokenMatcherError::DuplicateOption(_) => {
                unreachable!("internal error - duplicate option should have been caught")
            }
            TokenMatcherError::DuplicateShortOption(_) => ConfigError(error.to_string()),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Parse error: {0}")]
pub(crate) struct ParseError(pub(crate) String);

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        ParseError(error.to_string())
    }
}

// We need a (dyn ..) here in order to put all the actions of varying implementations under one collection.
pub(crate) struct Capture<'ap> {
    destination: String,
    default: Option<String>,
    action: Box<dyn Action + 'ap>,
}

impl<'ap> Capture<'ap> {
    pub(crate) fn new(
        destination: impl Into<String>,
        default: Option<String>,
        action: Box<dyn Action + 'ap>,
    ) -> Self {
        Self {
            destination: destination.into(),
            default,
            action,
        }
    }
}

pub(crate) struct Parser<'ap> {
    token_matcher: TokenMatcher,
    captures: HashMap<String, Capture<'ap>>,
}

impl<'ap> std::fmt::Debug for Parser<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser{..}").finish()
    }
}

impl<'ap> Parser<'ap> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default(), Vec::default())
            .expect("internal error - the empty parser must be valid")
    }

    pub(crate) fn new(
        options: Vec<OptionCapture<'ap>>,
        arguments: Vec<ArgumentCapture<'ap>>,
    ) -> Result<Self, ConfigError> {
        let mut option_configs = Vec::default();
        let mut argument_configs = VecDeque::default();
        let mut captures: HashMap<String, Capture<'ap>> = HashMap::default();
        let mut destinations: HashSet<String> = HashSet::default();

        let configs = options
            .into_iter()
            .map(|(oc, c)| (oc.name().to_string(), Some(oc), None::<ArgumentConfig>, c))
            .chain(
                arguments
                    .into_iter()
                    .map(|(ac, c)| (ac.name().to_string(), None::<OptionConfig>, Some(ac), c)),
            );

        for (name, option_config, argument_config, capture) in configs {
            if !destinations.insert(capture.destination.clone()) && !captures.contains_key(&name)
            {
                return Err(ConfigError(format!(
                    "Cannot duplicate the destination '{}'.",
                    capture.destination
                )));
            }

            if captures.insert(name.clone(), capture).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the parameter '{name}'."
                )));
            }

            if let Some(oc) = option_config {
                option_configs.push(oc);
            }

            if let Some(ac) = argument_config {
                argument_configs.push_back(ac);
            }
        }

        let token_matcher = TokenMatcher::new(option_configs, argument_configs)?;

        Ok(Self {
            token_matcher,
            captures,
        })
    }

    pub(crate) fn consume(self, tokens: &[&str]) -> Result<Namespace, (usize, ParseError)> {
        let Parser {
            mut token_matcher,
            captures,
        } = self;

        // 1. Seed the namespace with the defaults, so that absent parameters still appear.
        let mut namespace = Namespace::new();

        for capture in captures.values() {
            namespace.set(capture.destination.clone(), capture.default.clone());
        }

        // 2. Feed the raw token strings to the matcher.
        let mut fed = 0;

        for token in tokens {
            token_matcher
                .feed(token)
                .map_err(|e| (fed, ParseError::from(e)))?;
            fed += token.len();
        }

        let matches = token_matcher
            .close()
            .map_err(|(offset, e, _)| (offset, ParseError::from(e)))?;

        // 3. Resolve each match, in Cli order, into the namespace.
        for match_tokens in matches.values {
            let capture = match captures.get(&match_tokens.name) {
                Some(capture) => capture,
                None => unreachable!("internal error - mismatch between matches and captures"),
            };
            // The absence of a value token is passed down as `None`.
            let value = match &match_tokens.values[..] {
                [] => None,
                [(_, value)] => Some(value.as_str()),
                _ => unreachable!("internal error - parameters match at most 1 token"),
            };
            #[cfg(feature = "tracing_debug")]
            debug!(
                "Invoking '{name}' into '{destination}' with {value:?}.",
                name = match_tokens.name,
                destination = capture.destination,
            );
            capture
                .action
                .invoke(&mut namespace, &capture.destination, value);
        }

        Ok(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{default_arg, Store, StoreConst};
    use rstest::rstest;

    fn option<'ap>(
        action: impl Action + 'ap,
        name: &str,
        short: Option<char>,
        default: Option<&str>,
    ) -> OptionCapture<'ap> {
        let bound = Bound::from(action.nargs());
        (
            OptionConfig::new(name, short, bound),
            Capture::new(name, default.map(|d| d.to_string()), Box::new(action)),
        )
    }

    fn argument<'ap>(action: impl Action + 'ap, name: &str) -> ArgumentCapture<'ap> {
        let bound = Bound::from(action.nargs());
        (
            ArgumentConfig::new(name, bound),
            Capture::new(name, None, Box::new(action)),
        )
    }

    #[test]
    fn parser_empty() {
        // Setup
        let parser = Parser::empty();

        // Execute
        let result = parser.consume(empty::slice()).unwrap();

        // Verify
        assert_eq!(result, Namespace::new());
    }

    #[test]
    fn parser_empty_unexpected() {
        let parser = Parser::empty();

        let (offset, error) = parser.consume(&["x"]).unwrap_err();
        assert_eq!(offset, 0);
        assert_eq!(
            error.to_string(),
            "Parse error: Unexpected argument 'x'; no more arguments to match against."
        );
    }

    #[rstest]
    #[case(vec![], Some("a"))]
    #[case(vec!["--s"], Some("b"))]
    #[case(vec!["--s", "c"], Some("c"))]
    #[case(vec!["--s="], Some(""))]
    #[case(vec!["--s=c"], Some("c"))]
    #[case(vec!["-s"], Some("b"))]
    #[case(vec!["-s", "c"], Some("c"))]
    #[case(vec!["-s=c"], Some("c"))]
    #[case(vec!["--s", "c", "--s"], Some("b"))]
    #[case(vec!["--s", "--s", "c"], Some("c"))]
    fn parser_default_arg(#[case] tokens: Vec<&str>, #[case] expected: Option<&str>) {
        // Setup
        let parser = Parser::new(
            vec![option(default_arg("b"), "s", Some('s'), Some("a"))],
            Vec::default(),
        )
        .unwrap();

        // Execute
        let namespace = parser.consume(&tokens[..]).unwrap();

        // Verify
        assert_eq!(namespace.get("s"), expected);
    }

    #[test]
    fn parser_default_arg_without_default() {
        let parser = Parser::new(
            vec![option(default_arg("b"), "s", None, None)],
            Vec::default(),
        )
        .unwrap();

        let namespace = parser.consume(empty::slice()).unwrap();

        assert!(namespace.contains("s"));
        assert_eq!(namespace.get("s"), None);
    }

    #[rstest]
    #[case(vec!["x"], Some("false"), None, Some("x"))]
    #[case(vec!["-v", "x"], Some("true"), None, Some("x"))]
    #[case(vec!["x", "-vf"], Some("true"), Some("b"), Some("x"))]
    #[case(vec!["-vf", "c", "x"], Some("true"), Some("c"), Some("x"))]
    #[case(vec!["--flag", "x"], Some("false"), Some("x"), None)]
    fn parser_mixed(
        #[case] tokens: Vec<&str>,
        #[case] expected_verbose: Option<&str>,
        #[case] expected_flag: Option<&str>,
        #[case] expected_item: Option<&str>,
    ) {
        // Setup
        let parser = Parser::new(
            vec![
                option(StoreConst::new("true"), "verbose", Some('v'), Some("false")),
                option(default_arg("b"), "flag", Some('f'), None),
            ],
            vec![argument(Store, "item")],
        )
        .unwrap();

        // Execute
        let result = parser.consume(&tokens[..]);

        // Verify
        match expected_item {
            Some(item) => {
                let namespace = result.unwrap();
                assert_eq!(namespace.get("verbose"), expected_verbose);
                assert_eq!(namespace.get("flag"), expected_flag);
                assert_eq!(namespace.get("item"), Some(item));
            }
            None => {
                // The option consumed the would-be argument.
                let (offset, error) = result.unwrap_err();
                assert_eq!(offset, 7);
                assert_eq!(
                    error,
                    ParseError("Not enough tokens provided to parameter 'item'.".to_string())
                );
            }
        };
    }

    #[rstest]
    #[case(vec!["--moot"], 0, "Option 'moot' does not exist.")]
    #[case(vec!["--verbose", "-m"], 9, "Short option 'm' does not exist.")]
    #[case(vec!["--verbose=1"], 0, "Too many tokens provided to parameter 'verbose'.")]
    #[case(vec!["x", "y"], 1, "Unexpected argument 'y'; no more arguments to match against.")]
    #[case(vec![], 0, "Not enough tokens provided to parameter 'item'.")]
    fn parser_error(#[case] tokens: Vec<&str>, #[case] offset: usize, #[case] message: &str) {
        // Setup
        let parser = Parser::new(
            vec![option(StoreConst::new("true"), "verbose", None, None)],
            vec![argument(Store, "item")],
        )
        .unwrap();

        // Execute
        let result = parser.consume(&tokens[..]);

        // Verify
        assert_eq!(
            result.unwrap_err(),
            (offset, ParseError(message.to_string()))
        );
    }

    #[test]
    fn parser_duplicate_destination() {
        let (config, _) = option(Store, "a", None, None);
        let capture = Capture::new("x", None, Box::new(Store));
        let (argument_config, _) = argument(Store, "b");
        let argument_capture = Capture::new("x", None, Box::new(Store));

        let error =
            Parser::new(vec![(config, capture)], vec![(argument_config, argument_capture)])
                .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Config error: Cannot duplicate the destination 'x'."
        );
    }
}
