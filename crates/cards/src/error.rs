/// Failures while parsing typed card data at the ingestion boundary.
///
/// Free text never produces these: the text transform leaves anything that
/// is not a well-formed rank-then-suit pair untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("malformed card: {0:?}")]
    MalformedCard(String),
    #[error("malformed rank: {0:?}")]
    MalformedRank(String),
    #[error("malformed suit: {0:?}")]
    MalformedSuit(String),
    #[error("malformed permutation: {0:?}")]
    MalformedPermutation(String),
    #[error("invalid rotation key {0}, expected 0..4")]
    InvalidRotation(usize),
    #[error("expected {expected} cards, found {found} in {text:?}")]
    WrongCount {
        expected: &'static str,
        found: usize,
        text: String,
    },
    #[error("malformed street: {0:?}")]
    MalformedStreet(String),
    #[error("duplicate card {0}")]
    Duplicate(String),
}
