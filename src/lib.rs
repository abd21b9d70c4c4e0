//! `defarg` is a builder style command line parser for Rust, centered around *dual-default* options.
//!
//! A typical command line option has a single default: the value used when the option is absent from the Cli.
//! A dual-default option has a second default: the value used when the option is present on the Cli, but given no value.
//! This is the argparse `nargs='?'` & `const` idiom, captured by the [`DefaultArg`] action.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/dual_default.rs")]
//! ```
//!
//! ```console
//! $ dual_default
//! Namespace(level='info', output=None, verbose='false')
//!
//! $ dual_default --level
//! Namespace(level='debug', output=None, verbose='false')
//!
//! $ dual_default --level trace -o out.txt
//! Namespace(level='trace', output='out.txt', verbose='false')
//!
//! $ dual_default -vl=warn
//! Namespace(level='warn', output=None, verbose='true')
//!
//! $ dual_default --lvl
//! Parse error: Option 'lvl' does not exist.
//! --lvl
//! ^
//! ```
//!
//! # Builder Api
//! Configure `defarg` by starting with a [`CommandParser`] and `add`ing parameters.
//! There are two classes of parameters: [`Parameter::option`] and [`Parameter::argument`].
//!
//! Each parameter takes an [`Action`], which decides the value stored for the parameter whenever it is matched on the Cli.
//! The action also declares the cardinality of the parameter (see [`Nargs`]).
//!
//! ### Actions
//! * [`Store`]: stores the single value given (applies to both `Parameter::option` & `Parameter::argument`).
//! * [`StoreConst`]: stores a constant; takes no value (not applicable to `Parameter::argument`).
//! This is used when specifying Cli *flags* (ex: `--verbose`).
//! * [`DefaultArg`]: stores the value given, or its fallback when no value is given (not applicable to `Parameter::argument`).
//! Create via [`default_arg`].
//!
//! Custom actions may be written by implementing [`Action`] alongside [`CliOption`] and/or [`CliArgument`].
//!
//! ### Defaults & Namespace
//! All values are parsed into a [`Namespace`], keyed by each parameter's *destination* (see [`Parameter::destination`]).
//! Before any Cli token is considered, every destination is seeded with its parameter's default ([`Parameter::default`]), or `None`.
//! Actions are only invoked for parameters present on the Cli, so an absent option keeps its default.
//!
//! # Cli Semantics
//! * Arguments are matched based off positional ordering.
//! * Options are matched based off the `--NAME` (or short name `-N`) specifier.
//! Once specified, the cardinality is matched against the subsequent tokens.
//! A `DefaultArg` option takes the next token as its value when that token is not itself an option.
//! * The key-value pair of an option may be separated with the `=` character.
//! For example, `--key=123` is equivalent to `--key 123`, and `--key=` gives the empty value.
//! Only the first `=` character is used as a separator.
//! * Multiple short named options may be combined into a single flag.
//! For example, `-abc` is equivalent to `--apple --banana --carrot`.
//! Only the final option in this syntax may take a value.
//! * A token that looks like a negative number (ex: `-1`, `-2.5`) is a value, not a short option.
//! If any short option is itself a digit, use the `=` form instead (ex: `--key=-1`).
//! * An option may be repeated; each occurrence invokes its action in Cli order, so the final occurrence wins.
//!
//! ### Action-Narg Interaction
//! ```console
//! Action       | Narg        | Syntax                  | Stored
//! ------------------------------------------------------------------------------------
//! Store        | [1]         | [--NAME VALUE]          | VALUE
//! StoreConst   | [0]         | [--NAME]                | the constant
//! DefaultArg   | [0, 1]      | [--NAME [VALUE]]        | VALUE, or the fallback
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while configuring and parsing.
#![deny(missing_docs)]
mod api;
mod matcher;
mod model;
mod namespace;
mod parser;

pub use api::*;
pub use model::*;
pub use namespace::Namespace;
pub use parser::{ConfigError, GeneralParser};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
