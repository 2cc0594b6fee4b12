use crate::domain::primitive::{MatchMode, Parameter};

/// Locates one concrete field on a screen: the field `skip` positions
/// after the `match_number`-th field whose text matches `label` under
/// `match_mode`.
///
/// `new` fills the conventional defaults (skip 1, first match, exact
/// text match), so `FieldIdentifier::new("Name:")` reads as "the input
/// field immediately after the Name: label".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentifier {
    pub label: String,
    pub skip: usize,
    pub match_number: usize,
    pub match_mode: MatchMode,
}

impl FieldIdentifier {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            skip: 1,
            match_number: 1,
            match_mode: MatchMode::Exact,
        }
    }

    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn match_number(mut self, match_number: usize) -> Self {
        self.match_number = match_number;
        self
    }

    pub fn match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Parameters reported on command events that carry this identifier.
    pub fn to_parameters(&self) -> Vec<Parameter> {
        vec![
            Parameter::new("label", &self.label),
            Parameter::new("skip", self.skip),
            Parameter::new("matchNumber", self.match_number),
            Parameter::new("matchMode", self.match_mode),
        ]
    }
}

impl From<&str> for FieldIdentifier {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for FieldIdentifier {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}
