/// Result of a tolerant parse: the value, and whether the safe default had to stand in for it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome<T> {
    Parsed(T),
    Fallback(T),
}

impl<T> ParseOutcome<T> {
    pub fn value(&self) -> &T {
        match self {
            ParseOutcome::Parsed(value) | ParseOutcome::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            ParseOutcome::Parsed(value) | ParseOutcome::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParseOutcome::Fallback(_))
    }
}
