use std::cmp::Ordering;

/// A stored word within the distance bound of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    pub term: String,
    pub distance: usize,
}

impl Suggestion {
    pub fn new(term: impl Into<String>, distance: usize) -> Suggestion {
        Suggestion {
            term: term.into(),
            distance,
        }
    }
}

// closest first, ties broken alphabetically
impl Ord for Suggestion {
    fn cmp(&self, other: &Suggestion) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Suggestion) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Suggestion> for String {
    fn from(suggestion: Suggestion) -> String {
        suggestion.term
    }
}
