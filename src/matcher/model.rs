use thiserror::Error;

use crate::matcher::api::*;

#[derive(Debug, PartialEq, Eq, Hash)]
pub(crate) struct MatchTokens {
    pub name: String,
    pub values: Vec<OffsetValue>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(super) enum CloseError {
    #[error("too few values provided for '{name}' (provided={provided}, expected={expected}).")]
    TooFewValues {
        name: String,
        provided: usize,
        expected: u8,
    },

    #[error("too many values provided for '{name}' (provided={provided}, expected={expected}).")]
    TooManyValues {
        name: String,
        provided: usize,
        expected: u8,
    },
}

#[derive(Debug)]
pub(super) struct MatchBuffer {
    name: String,
    bound: Bound,
    values: Vec<OffsetValue>,
}

impl MatchBuffer {
    pub(super) fn new(name: impl Into<String>, bound: Bound) -> Self {
        Self {
            name: name.into(),
            bound,
            values: Vec::default(),
        }
    }

    #[cfg(feature = "tracing_debug")]
    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn push(&mut self, offset: usize, value: String) {
        self.values.push((offset, value));
    }

    pub(super) fn is_open(&self) -> bool {
        self.values.len() < self.bound.upper() as usize
    }

    #[cfg(test)]
    pub(super) fn can_close(&self) -> bool {
        self.values.len() >= self.bound.lower() as usize
    }

    pub(super) fn close(self) -> Result<MatchTokens, CloseError> {
        if self.values.len() < self.bound.lower() as usize {
            return Err(CloseError::TooFewValues {
                name: self.name,
                provided: self.values.len(),
                expected: self.bound.lower(),
            });
        } else if self.values.len() > self.bound.upper() as usize {
            return Err(CloseError::TooManyValues {
                name: self.name,
                provided: self.values.len(),
                expected: self.bound.upper(),
            });
        }

        Ok(MatchTokens {
            name: self.name,
            values: self.values,
        })
    }
}
