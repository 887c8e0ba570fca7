use super::game::Settings;
use drill_cards::Street;
use drill_core::CANDIDATE_LIMIT;
use drill_spots::Depth;
use drill_spots::Position;
use drill_spots::SolvedHand;

/// Equality predicates over the corpus, plus a cap on how many rows come back.
/// Unset fields match everything.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Filter {
    pub street: Option<Street>,
    pub position: Option<Position>,
    pub depth: Option<Depth>,
    pub spot: Option<String>,
    pub limit: usize,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            street: None,
            position: None,
            depth: None,
            spot: None,
            limit: CANDIDATE_LIMIT,
        }
    }
}

impl Filter {
    pub fn admits(&self, hand: &SolvedHand) -> bool {
        self.street.is_none_or(|s| s == hand.street())
            && self.position.is_none_or(|p| p == hand.position())
            && self.depth.is_none_or(|d| d == hand.depth())
            && self.spot.as_deref().is_none_or(|s| Some(s) == hand.spot())
    }
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// stack is bucketed into a depth; the rest map one to one
impl From<&Settings> for Filter {
    fn from(settings: &Settings) -> Self {
        Self {
            street: settings.street,
            position: settings.position,
            depth: settings.stack.map(Depth::from),
            spot: settings.spot.clone(),
            ..Self::default()
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let terms = [
            self.street.map(|s| format!("street={}", s)),
            self.position.map(|p| format!("position={}", p)),
            self.depth.map(|d| format!("depth={}", d)),
            self.spot.as_ref().map(|s| format!("spot={}", s)),
            Some(format!("limit={}", self.limit)),
        ];
        write!(f, "{}", terms.into_iter().flatten().collect::<Vec<_>>().join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_to_filter() {
        let settings = Settings {
            stack: Some(15),
            position: Some(Position::Co),
            street: Some(Street::Turn),
            spot: Some(String::from("check_raise")),
            ..Settings::default()
        };
        let filter = Filter::from(&settings);
        assert!(filter.depth == Some(Depth::Short));
        assert!(filter.position == Some(Position::Co));
        assert!(filter.street == Some(Street::Turn));
        assert!(filter.spot.as_deref() == Some("check_raise"));
        assert!(filter.limit == CANDIDATE_LIMIT);
    }

    #[test]
    fn stack_buckets() {
        let deep = Settings {
            stack: Some(200),
            ..Settings::default()
        };
        let standard = Settings {
            stack: Some(100),
            ..Settings::default()
        };
        assert!(Filter::from(&deep).depth == Some(Depth::Deep));
        assert!(Filter::from(&standard).depth == Some(Depth::Standard));
        assert!(Filter::from(&Settings::default()).depth.is_none());
    }
}
