use super::permutation::Permutation;

const SYMMETRIC: [Permutation; 24] = Permutation::exhaust();
const CYCLIC: [Permutation; 4] = Permutation::rotations();

/// which suit relabelings count as "the same hand".
///
/// Symmetric admits every bijection of the four suits (x24 content).
/// Cyclic only rotates the suit wheel s -> h -> d -> c -> s (x4 content).
/// chosen once at startup and never changed.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symmetry {
    #[default]
    Symmetric,
    Cyclic,
}

impl Symmetry {
    /// the variant space, identity first
    pub fn space(&self) -> &'static [Permutation] {
        match self {
            Self::Symmetric => &SYMMETRIC,
            Self::Cyclic => &CYCLIC,
        }
    }
    pub fn multiplier(&self) -> usize {
        self.space().len()
    }
    pub fn contains(&self, permutation: &Permutation) -> bool {
        self.space().contains(permutation)
    }
}

impl std::fmt::Display for Symmetry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Symmetric => write!(f, "symmetric"),
            Self::Cyclic => write!(f, "cyclic"),
        }
    }
}
