use super::edge::Edge;
use super::edge::Kind;
use super::error::SpotError;
use drill_core::Percent;

/// A player's answer to a spot: what they did, and how big if it was sized.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    #[serde(rename = "action")]
    kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sizing: Option<Percent>,
}

impl Submission {
    pub fn new(kind: Kind, sizing: Option<Percent>) -> Self {
        Self { kind, sizing }
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn sizing(&self) -> Option<Percent> {
        self.sizing
    }
}

impl From<Edge> for Submission {
    fn from(edge: Edge) -> Self {
        Self::new(edge.kind(), edge.sizing())
    }
}

/// accepts `call`, `BET 50`, `raise_150`, or a bare sized kind like `bet`
impl TryFrom<&str> for Submission {
    type Error = SpotError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let text = s.trim().replace(' ', "_");
        match text.split_once('_') {
            None => Kind::try_from(text.as_str()).map(|kind| Self::new(kind, None)),
            Some(_) => Edge::try_from(text.as_str()).map(Self::from),
        }
    }
}
