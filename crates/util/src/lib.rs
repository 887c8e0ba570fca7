//! Core type aliases, identifiers, and tuning constants for drill.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the drill workspace. Every threshold the grading and
//! dispatch layers consult lives here, grouped by concern, so that tuning
//! never requires touching algorithm code.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, pot sizes, and stacks in solver units.
pub type Utility = f32;
/// Solver frequencies and sampling weights.
pub type Probability = f32;
/// Pot-relative quantities: bet sizings and normalized EV loss (0..100+).
pub type Percent = f32;
/// Stack depths in big blinds for configuration and chart instructions.
pub type Chips = i16;
/// Health-bar damage dealt by a graded mistake.
pub type Damage = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
///
/// Serializes transparently as the hyphenated UUID string, which is how
/// corpus rows and user records are keyed by the external store.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

/// str isomorphism
impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s.trim()).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// INDIFFERENCE RULE
// Mixed-strategy branches and near-equal EVs are accepted as correct.
// ============================================================================
/// A submitted branch played at least this often by the solver is accepted.
pub const INDIFFERENCE_FREQUENCY: Probability = 0.40;
/// A submitted branch losing at most this much EV (solver units) is accepted.
pub const INDIFFERENCE_TOLERANCE: Utility = 0.05;

// ============================================================================
// DAMAGE SCALING
// EV loss as a percentage of pot, mapped piecewise onto 1..=25 damage.
//   pct <= MINOR            -> floor(pct)                              (1..=5)
//   MINOR < pct <= MAJOR    -> MINOR + floor((pct - MINOR) * MEDIUM)    (6..=15)
//   pct > MAJOR             -> SEVERE + min(MAX - SEVERE, floor(...))   (16..=25)
// ============================================================================
/// Upper bound of the minor band, in percent of pot.
pub const DAMAGE_MINOR_BAND: Percent = 5.0;
/// Upper bound of the medium band, in percent of pot.
pub const DAMAGE_MAJOR_BAND: Percent = 25.0;
/// Damage per percent of pot lost inside the medium band.
pub const DAMAGE_MEDIUM_SLOPE: Percent = 0.5;
/// Damage per percent of pot lost beyond the medium band.
pub const DAMAGE_SEVERE_SLOPE: Percent = 0.2;
/// Damage floor of the severe band.
pub const DAMAGE_SEVERE_BASE: Damage = 16;
/// Minimum damage for any graded mistake.
pub const DAMAGE_MIN: Damage = 1;
/// Maximum damage for any graded mistake.
pub const DAMAGE_MAX: Damage = 25;

// ============================================================================
// CORPUS SELECTION
// ============================================================================
/// Stacks at or below this many big blinds fall in the short bucket.
pub const STACK_SHORT_MAX: Chips = 20;
/// Stacks at or above this many big blinds fall in the deep bucket.
pub const STACK_DEEP_MIN: Chips = 150;
/// Maximum number of candidate hands fetched per selection.
pub const CANDIDATE_LIMIT: usize = 50;

// ============================================================================
// CHART INSTRUCTIONS
// Static-chart games jitter the configured stack to keep drills fresh.
// ============================================================================
/// Base stack when a chart game does not configure one.
pub const CHART_STACK_DEFAULT: Chips = 15;
/// Maximum absolute jitter applied to the base stack.
pub const CHART_STACK_JITTER: Chips = 3;
/// Smallest stack a chart instruction will ever show.
pub const CHART_STACK_MIN: Chips = 5;
/// Largest stack a chart instruction will ever show.
pub const CHART_STACK_MAX: Chips = 25;
/// Players remaining when a chart game does not configure it.
pub const CHART_PLAYERS_DEFAULT: u8 = 6;

// ============================================================================
// SCENARIO RIGGING
// ============================================================================
/// Levels at or above this rig scenarios with mild adversity.
pub const RIGGING_MILD_LEVEL: u8 = 4;
/// Levels at or above this rig scenarios with severe adversity.
pub const RIGGING_SEVERE_LEVEL: u8 = 7;
/// Highest difficulty level a game can be played at.
pub const LEVEL_MAX: u8 = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/drill-{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
