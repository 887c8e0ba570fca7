use super::edge::Edge;
use super::error::SpotError;
use super::node::Branch;
use super::node::DecisionNode;
use super::submission::Submission;
use drill_core::*;

/// How a submission was judged.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    /// attains the best EV among siblings
    Optimal,
    /// not the best, but within the mixed-strategy tolerance
    Indifferent,
    Mistake,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Optimal => write!(f, "optimal"),
            Self::Indifferent => write!(f, "indifferent"),
            Self::Mistake => write!(f, "mistake"),
        }
    }
}

/// The graded result of one submission.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Grade {
    verdict: Verdict,
    correct: bool,
    indifferent: bool,
    chosen: Option<Edge>,
    ev: Utility,
    best: Utility,
    optimal: Vec<Edge>,
    loss: Utility,
    damage: Damage,
    feedback: String,
}

impl Grade {
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
    pub fn is_correct(&self) -> bool {
        self.correct
    }
    pub fn is_indifferent(&self) -> bool {
        self.indifferent
    }
    /// the solver edge the submission resolved to, if any
    pub fn chosen(&self) -> Option<Edge> {
        self.chosen
    }
    /// EV of the submitted action
    pub fn ev(&self) -> Utility {
        self.ev
    }
    /// highest EV among siblings
    pub fn best(&self) -> Utility {
        self.best
    }
    /// every edge attaining the highest EV, in solver order
    pub fn optimal(&self) -> &[Edge] {
        &self.optimal
    }
    pub fn loss(&self) -> Utility {
        self.loss
    }
    pub fn damage(&self) -> Damage {
        self.damage
    }
    pub fn feedback(&self) -> &str {
        &self.feedback
    }
}

/// Thresholds for the indifference rule and the damage curve.
///
/// Defaults are the workspace constants; a deployment may override any
/// subset through its configuration file.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Rubric {
    /// solver frequency at or above which a branch is always accepted
    pub frequency: Probability,
    /// EV loss at or below which a branch is always accepted
    pub tolerance: Utility,
    pub minor: Percent,
    pub major: Percent,
    pub medium: Percent,
    pub severe: Percent,
    pub base: Damage,
    pub min: Damage,
    pub max: Damage,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            frequency: INDIFFERENCE_FREQUENCY,
            tolerance: INDIFFERENCE_TOLERANCE,
            minor: DAMAGE_MINOR_BAND,
            major: DAMAGE_MAJOR_BAND,
            medium: DAMAGE_MEDIUM_SLOPE,
            severe: DAMAGE_SEVERE_SLOPE,
            base: DAMAGE_SEVERE_BASE,
            min: DAMAGE_MIN,
            max: DAMAGE_MAX,
        }
    }
}

impl Rubric {
    /// Reject tunings the damage curve cannot honor.
    pub fn validate(&self) -> Result<(), SpotError> {
        let bands = [
            ("frequency", self.frequency),
            ("tolerance", self.tolerance),
            ("minor", self.minor),
            ("major", self.major),
            ("medium", self.medium),
            ("severe", self.severe),
        ];
        if let Some((name, value)) = bands.iter().find(|(_, v)| !(v.is_finite() && *v >= 0.)) {
            Err(SpotError::InvalidRubric(format!("{} must be finite and non-negative, got {}", name, value)))
        } else if self.minor > self.major {
            Err(SpotError::InvalidRubric(format!("minor {} exceeds major {}", self.minor, self.major)))
        } else if self.min > self.max {
            Err(SpotError::InvalidRubric(format!("min {} exceeds max {}", self.min, self.max)))
        } else if self.base > self.max {
            Err(SpotError::InvalidRubric(format!("base {} exceeds max {}", self.base, self.max)))
        } else {
            Ok(())
        }
    }

    /// Grade a submission against the solver's view of a node.
    ///
    /// Pure: the same inputs always produce the same grade.
    pub fn grade(&self, submission: &Submission, node: &DecisionNode, pot: Utility) -> Grade {
        let choices = node.choices();
        let matched = Self::resolve(submission, &choices);
        let (ev, frequency) = matched
            .map(|(_, b)| (b.ev(), b.frequency()))
            .unwrap_or_default();
        let best = choices
            .iter()
            .map(|(_, b)| b.ev())
            .fold(Utility::NEG_INFINITY, Utility::max);
        let optimal = choices
            .iter()
            .filter(|(_, b)| b.ev() == best)
            .map(|(e, _)| *e)
            .collect::<Vec<Edge>>();
        let chosen = matched.map(|(e, _)| e);
        let loss = (best - ev).max(0.);
        let attains = chosen.is_some_and(|e| optimal.contains(&e));
        let tolerated = frequency >= self.frequency || loss <= self.tolerance;
        let verdict = match (attains, tolerated) {
            (true, _) => Verdict::Optimal,
            (false, true) => Verdict::Indifferent,
            (false, false) => Verdict::Mistake,
        };
        let damage = match verdict {
            Verdict::Mistake => self.damage(loss, pot),
            _ => 0,
        };
        let feedback = match verdict {
            Verdict::Optimal => String::from("Correct!"),
            Verdict::Indifferent => String::from("Acceptable (mixed strategy)"),
            Verdict::Mistake => format!(
                "Mistake! Best: {} (EV loss: {:.2})",
                optimal
                    .first()
                    .map(|e| e.to_string().to_uppercase())
                    .unwrap_or_else(|| String::from("UNKNOWN")),
                loss
            ),
        };
        log::debug!("graded {:?} as {} (loss {:.3}, damage {})", submission, verdict, loss, damage);
        Grade {
            verdict,
            correct: verdict != Verdict::Mistake,
            indifferent: verdict == Verdict::Indifferent,
            chosen,
            ev,
            best,
            optimal,
            loss,
            damage,
            feedback,
        }
    }

    /// Damage for an unaccepted EV loss, piecewise in percent of pot.
    pub fn damage(&self, loss: Utility, pot: Utility) -> Damage {
        let pct = match pot > 0. {
            true => loss / pot * 100.,
            false => 0.,
        };
        let raw = if pct <= self.minor {
            pct.floor()
        } else if pct <= self.major {
            self.minor + ((pct - self.minor) * self.medium).floor()
        } else {
            let excess = ((pct - self.major) * self.severe).floor();
            self.base as Percent + excess.min(self.max.saturating_sub(self.base) as Percent)
        };
        raw.max(self.min as Percent).min(self.max as Percent) as Damage
    }

    /// Find the sibling a submission refers to. Sized kinds pick the closest
    /// sizing, earliest on ties, or the first of their kind if unsized.
    fn resolve<'a>(
        submission: &Submission,
        choices: &[(Edge, &'a Branch)],
    ) -> Option<(Edge, &'a Branch)> {
        let mut candidates = choices
            .iter()
            .copied()
            .filter(|(e, _)| e.kind() == submission.kind());
        match (submission.kind().is_sized(), submission.sizing()) {
            (true, Some(size)) => candidates.fold(None, |closest, (e, b)| {
                let distance = (e.sizing().unwrap_or_default() - size).abs();
                match closest {
                    Some((_, _, d)) if d <= distance => closest,
                    _ => Some((e, b, distance)),
                }
            })
            .map(|(e, b, _)| (e, b)),
            _ => candidates.next(),
        }
    }
}
