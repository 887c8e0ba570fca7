use super::error::CardError;
use super::permutation::Permutation;

/// canonical name of one visual variant of a solved hand.
///
/// always `c=X,d=X,h=X,s=X` sorted by source suit, so two keys are equal
/// exactly when their permutations are. this is what the ledger stores
/// to remember which variants a user has already seen.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariantKey(String);

impl VariantKey {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
    pub fn identity() -> Self {
        Self::from(Permutation::identity())
    }
}

/// Permutation isomorphism
impl From<Permutation> for VariantKey {
    fn from(permutation: Permutation) -> Self {
        Self(permutation.to_string())
    }
}
impl From<&Permutation> for VariantKey {
    fn from(permutation: &Permutation) -> Self {
        Self::from(*permutation)
    }
}
impl TryFrom<&VariantKey> for Permutation {
    type Error = CardError;
    fn try_from(key: &VariantKey) -> Result<Self, Self::Error> {
        Self::try_from(key.as_str())
    }
}

/// str isomorphism. any pair order is accepted and normalized.
impl TryFrom<&str> for VariantKey {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Permutation::try_from(s).map(Self::from)
    }
}
impl TryFrom<String> for VariantKey {
    type Error = CardError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<VariantKey> for String {
    fn from(key: VariantKey) -> Self {
        key.0
    }
}

impl std::fmt::Display for VariantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
