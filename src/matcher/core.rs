use std::collections::{HashMap, VecDeque};
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::matcher::api::*;
use crate::matcher::model::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum TokenMatcherError {
    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateOption(String),

    #[error("Cannot duplicate the short option '{0}'.")]
    DuplicateShortOption(char),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Not enough tokens provided to parameter '{0}'.")]
    Undercomplete(String),

    #[error("Too many tokens provided to parameter '{0}'.")]
    Overcomplete(String),

    #[error("Unexpected argument '{0}'; no more arguments to match against.")]
    ArgumentsExhausted(String),

    #[error("Option '{0}' does not exist.")]
    InvalidOption(String),

    #[error("Short option '{0}' does not exist.")]
    InvalidShortOption(char),
}

impl From<CloseError> for MatchError {
    fn from(error: CloseError) -> Self {
        match error {
            CloseError::TooFewValues { name, .. } => MatchError::Undercomplete(name),
            CloseError::TooManyValues { name, .. } => MatchError::Overcomplete(name),
        }
    }
}

#[derive(Debug)]
pub(crate) struct TokenMatcher {
    option_bounds: HashMap<String, Bound>,
    short_options: HashMap<char, String>,
    arguments: VecDeque<ArgumentConfig>,
    fed: usize,
    matches: Vec<MatchTokens>,
    buffer: Option<MatchBuffer>,
}

impl TokenMatcher {
    pub(crate) fn new(
        options: Vec<OptionConfig>,
        arguments: VecDeque<ArgumentConfig>,
    ) -> Result<Self, TokenMatcherError> {
        let mut option_bounds = HashMap::default();
        let mut short_options = HashMap::default();

        for option_config in options.into_iter() {
            if option_bounds
                .insert(option_config.name().to_string(), option_config.bound())
                .is_some()
            {
                return Err(TokenMatcherError::DuplicateOption(
                    option_config.name().to_string(),
                ));
            }

            if let Some(short) = option_config.short() {
                if short_options
                    .insert(*short, option_config.name().to_string())
                    .is_some()
                {
                    return Err(TokenMatcherError::DuplicateShortOption(*short));
                }
            }
        }

        Ok(Self {
            option_bounds,
            short_options,
            arguments,
            fed: 0,
            matches: Vec::default(),
            buffer: None,
        })
    }

    pub(crate) fn feed(&mut self, token: &str) -> Result<(), MatchError> {
        let token_length = token.len();
        // 1. Find a 'long' flag, such as:
        //  --initial
        //  --initial ..
        //  --initial=..
        // 2. Find 'short' flag(s), such as (both -i and -v are example short flags):
        //  -i
        //  -i ..
        //  -i=..
        //  -vi
        //  -vi ..
        //  -vi=..
        // 3. Match against an argument (a lone '-' is also an argument).
        //  Negative numbers (ex: -1, -.5) are arguments too, unless a short option is itself a digit.
        let result = if let Some(token) = token.strip_prefix("--") {
            self.match_option(split_equals_delimiter(token))
        } else if is_negative_number(token) && !self.short_options.keys().any(char::is_ascii_digit)
        {
            self.match_argument(token)
        } else if let Some(token) = token.strip_prefix('-').filter(|t| !t.is_empty()) {
            self.match_option_short(split_equals_delimiter(token))
        } else {
            self.match_argument(token)
        };

        self.fed += token_length;
        result
    }

    fn match_argument(&mut self, token: &str) -> Result<(), MatchError> {
        let mut match_buffer = match self.buffer.take() {
            Some(match_buffer) => {
                if match_buffer.is_open() {
                    match_buffer
                } else {
                    // Flip to the next argument.
                    let match_tokens = match_buffer.close()?;
                    self.matches.push(match_tokens);
                    self.next_argument(token)?
                }
            }
            None => {
                // Flip to the next argument.
                self.next_argument(token)?
            }
        };

        #[cfg(feature = "tracing_debug")]
        debug!(
            "Matched value '{token}' at offset {fed} into '{name}'.",
            fed = self.fed,
            name = match_buffer.name()
        );
        match_buffer.push(self.fed, token.to_string());

        if self.buffer.replace(match_buffer).is_some() {
            unreachable!("internal error - the buffer is expected to be None");
        }

        Ok(())
    }

    fn next_argument(&mut self, token: &str) -> Result<MatchBuffer, MatchError> {
        match self.arguments.pop_front() {
            Some(argument_config) => Ok(MatchBuffer::new(
                argument_config.name(),
                argument_config.bound(),
            )),
            None => Err(MatchError::ArgumentsExhausted(token.to_string())),
        }
    }

    fn match_option(
        &mut self,
        (option_name, single_argument): (&str, Option<&str>),
    ) -> Result<(), MatchError> {
        if let Some(bound) = self.option_bounds.get(option_name) {
            #[cfg(feature = "tracing_debug")]
            debug!("Matched option '--{option_name}' ({bound:?}).");
            let mut match_buffer = MatchBuffer::new(option_name, *bound);

            let next_buffer = match single_argument {
                Some(value) => {
                    // The 3 comes from the option specifier '--' and argument specifier '='.
                    match_buffer.push(self.fed + option_name.len() + 3, value.to_string());

                    // Options using k=v syntax cannot follow up with more values afterwards.
                    let match_tokens = match_buffer.close()?;
                    self.update_buffer(None)?;
                    self.matches.push(match_tokens);
                    return Ok(());
                }
                None => Some(match_buffer),
            };
            self.update_buffer(next_buffer)
        } else {
            Err(MatchError::InvalidOption(option_name.to_string()))
        }
    }

    fn match_option_short(
        &mut self,
        (short_option_name, single_argument): (&str, Option<&str>),
    ) -> Result<(), MatchError> {
        let final_index = match short_option_name.chars().count() {
            // Such as '-=..'.
            0 => return Err(MatchError::InvalidShortOption('=')),
            count => count - 1,
        };

        for (index, single) in short_option_name.chars().enumerate() {
            let name = match self.short_options.get(&single) {
                Some(name) => name.clone(),
                None => return Err(MatchError::InvalidShortOption(single)),
            };
            let bound = match self.option_bounds.get(&name) {
                Some(bound) => *bound,
                None => unreachable!("internal error - mis-aligned short option."),
            };
            #[cfg(feature = "tracing_debug")]
            debug!("Matched short option '-{single}' as '--{name}' ({bound:?}).");

            // Only the final character from the short option token may accept values.
            if index == final_index {
                let mut match_buffer = MatchBuffer::new(name, bound);

                match single_argument {
                    // If an equals delimited value was specified, use it.
                    Some(value) => {
                        // The 2 comes from the short option specifier '-' and argument specifier '='.
                        match_buffer.push(
                            self.fed + short_option_name.len() + 2,
                            value.to_string(),
                        );

                        // Options using k=v syntax cannot follow up with more values afterwards.
                        let match_tokens = match_buffer.close()?;
                        self.update_buffer(None)?;
                        self.matches.push(match_tokens);
                    }
                    // If no equals delimited value was specified, allow the values to be fed as subsequent tokens.
                    None => {
                        self.update_buffer(Some(match_buffer))?;
                    }
                };
            } else {
                // All characters in the head of the short option token must allow no values.
                let match_tokens = MatchBuffer::new(name, bound).close()?;
                self.update_buffer(None)?;
                self.matches.push(match_tokens);
            }
        }

        Ok(())
    }

    fn update_buffer(&mut self, next_buffer: Option<MatchBuffer>) -> Result<(), MatchError> {
        let previous_buffer = std::mem::replace(&mut self.buffer, next_buffer);

        if let Some(match_buffer) = previous_buffer {
            let match_tokens = match_buffer.close()?;
            self.matches.push(match_tokens);
        }

        Ok(())
    }

    pub(crate) fn close(mut self) -> Result<Matches, (usize, MatchError, Matches)> {
        let mut close_error: Option<CloseError> = None;

        if let Some(match_buffer) = self.buffer.take() {
            match match_buffer.close() {
                Ok(match_tokens) => {
                    self.matches.push(match_tokens);
                }
                Err(error) => {
                    close_error.replace(error);
                }
            };
        }

        for argument_config in self.arguments {
            // An absent argument which allows zero values is not a match.
            if argument_config.bound().lower() == 0 {
                continue;
            }

            let match_buffer = MatchBuffer::new(argument_config.name(), argument_config.bound());
            match match_buffer.close() {
                Ok(match_tokens) => {
                    self.matches.push(match_tokens);
                }
                Err(error) => {
                    // Only track the first error.
                    if close_error.is_none() {
                        close_error.replace(error);
                    }
                }
            };
        }

        let matches = Matches {
            values: self.matches,
        };

        if let Some(error) = close_error {
            Err((self.fed, MatchError::from(error), matches))
        } else {
            Ok(matches)
        }
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}

fn is_negative_number(token: &str) -> bool {
    let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());

    match token.strip_prefix('-') {
        Some(number) => match number.split_once('.') {
            // Such as '-1.5' or '-.5'.
            Some((whole, fraction)) => !fraction.is_empty() && digits(whole) && digits(fraction),
            // Such as '-1'.
            None => !number.is_empty() && digits(number),
        },
        None => false,
    }
}

impl Matches {
    #[cfg(test)]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|mt| mt.name == name)
    }
}
