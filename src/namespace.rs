use std::collections::BTreeMap;

/// The parsed values of a single command line invocation, keyed by destination.
///
/// Every declared parameter has an entry.
/// Before any token is matched, each entry holds the parameter's ordinary default (or `None` when it has none).
/// Matched parameters then overwrite their entry via their [`Action`](crate::Action).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    values: BTreeMap<String, Option<String>>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored at `destination`.
    ///
    /// Returns `None` both when the destination is unknown and when it holds no value.
    /// Use [`Namespace::contains`] to tell these apart.
    pub fn get(&self, destination: &str) -> Option<&str> {
        self.values
            .get(destination)
            .and_then(|value| value.as_deref())
    }

    /// Whether `destination` has an entry (with or without a value).
    pub fn contains(&self, destination: &str) -> bool {
        self.values.contains_key(destination)
    }

    /// Store `value` at `destination`, replacing whatever was there.
    pub fn set(&mut self, destination: impl Into<String>, value: Option<String>) {
        self.values.insert(destination.into(), value);
    }

    /// Iterate over the `(destination, value)` entries, ordered by destination.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(destination, value)| (destination.as_str(), value.as_deref()))
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(destination, value)| match value {
                Some(v) => format!("{destination}='{v}'"),
                None => format!("{destination}=None"),
            })
            .collect();
        write!(f, "Namespace({})", entries.join(", "))
    }
}
