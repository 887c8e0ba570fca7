use anyhow::Context;
use clap::Parser;
use drill_cards::*;
use drill_core::ID;
use drill_engine::*;
use drill_library::*;
use drill_spots::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Fetch the next piece of content for a game")]
    Deal {
        #[command(flatten)]
        shelf: Shelf,
    },
    #[command(about = "Fetch a solver deal, answer it, and record the variant")]
    Play {
        #[command(flatten)]
        shelf: Shelf,
        #[arg(required = true, help = "e.g. `call`, `bet 50`, `raise_150`")]
        action: String,
    },
    #[command(about = "Grade an action at the root of a solved hand")]
    Grade {
        #[arg(long, required = true)]
        hand: PathBuf,
        #[arg(required = true)]
        action: String,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    #[command(about = "Sample the opponent's reply after a line of play", alias = "vil")]
    Villain {
        #[arg(long, required = true)]
        hand: PathBuf,
        #[arg(help = "edges to follow from the root, e.g. `bet_33 call`")]
        line: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "List the variant keys of a symmetry", alias = "var")]
    Variants {
        #[arg(long, default_value = "symmetric")]
        symmetry: String,
    },
}

/// Where solver content and history live on disk.
#[derive(clap::Args)]
pub struct Shelf {
    #[arg(long, required = true, help = "JSON array of solved hands")]
    hands: PathBuf,
    #[arg(long, required = true, help = "JSON array of game configurations")]
    games: PathBuf,
    #[arg(long, help = "JSON array of sightings, rewritten after play")]
    history: Option<PathBuf>,
    #[arg(long, help = "engine config JSON")]
    config: Option<PathBuf>,
    #[arg(long, required = true, help = "game slug or id")]
    game: String,
    #[arg(long)]
    user: Option<String>,
    #[arg(long, default_value_t = 1)]
    level: u8,
    #[arg(long)]
    seed: Option<u64>,
}

impl Shelf {
    async fn engine(&self) -> anyhow::Result<Engine<Memory>> {
        let hands = read(&self.hands)?;
        let games = read(&self.games)?;
        let sightings = match self.history.as_deref().filter(|p| p.exists()) {
            Some(path) => serde_json::from_str::<Vec<Sighting>>(&read(path)?)?,
            None => Vec::new(),
        };
        let store = Memory::from_json(&hands, &games)?.with_history(sightings);
        Ok(Engine::new(store, config(self.config.as_deref())?))
    }
    fn user(&self) -> anyhow::Result<ID<User>> {
        match self.user.as_deref() {
            Some(user) => ID::try_from(user).context("parse user id"),
            None => Ok(ID::default()),
        }
    }
    async fn persist(&self, engine: &Engine<Memory>) -> anyhow::Result<()> {
        if let Some(path) = self.history.as_deref() {
            let sightings = engine.store().snapshot().await;
            std::fs::write(path, serde_json::to_string_pretty(&sightings)?)
                .with_context(|| format!("write {}", path.display()))?;
        }
        Ok(())
    }
}

impl Command {
    pub async fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Deal { shelf } => {
                let engine = shelf.engine().await?;
                let ref mut rng = rng(shelf.seed);
                let deal = engine
                    .fetch(shelf.user()?, &shelf.game, Level::from(shelf.level), rng)
                    .await?;
                Ok(println!("{}", serde_json::to_string_pretty(&deal)?))
            }
            Self::Play { shelf, action } => {
                let submission = Submission::try_from(action.as_str())?;
                let engine = shelf.engine().await?;
                let user = shelf.user()?;
                let ref mut rng = rng(shelf.seed);
                let deal = match engine
                    .fetch(user, &shelf.game, Level::from(shelf.level), rng)
                    .await?
                {
                    Deal::Solver(deal) => deal,
                    other => {
                        log::warn!("{} is not a solver game", shelf.game);
                        return Ok(println!("{}", serde_json::to_string_pretty(&other)?));
                    }
                };
                let outcome = engine.answer(user, &deal, &submission, rng).await;
                shelf.persist(&engine).await?;
                println!("{} on {} ({})", deal.hand().hero(), deal.hand().board(), deal.variant());
                println!("{}", outcome.grade().feedback());
                Ok(println!("{}", serde_json::to_string_pretty(&outcome)?))
            }
            Self::Grade { hand, action, config: path } => {
                let hand = serde_json::from_str::<SolvedHand>(&read(&hand)?)?;
                let submission = Submission::try_from(action.as_str())?;
                let grade = config(path.as_deref())?
                    .rubric
                    .grade(&submission, hand.root(), hand.pot());
                Ok(println!("{}", serde_json::to_string_pretty(&grade)?))
            }
            Self::Villain { hand, line, seed } => {
                let hand = serde_json::from_str::<SolvedHand>(&read(&hand)?)?;
                let mut node = hand.root();
                for step in line.iter() {
                    let edge = Edge::try_from(step.as_str())?;
                    node = node
                        .follow(&edge)
                        .with_context(|| format!("no continuation after {}", edge))?;
                }
                let reply = Villain::resolve(node, &mut rng(seed));
                Ok(println!("{}", serde_json::to_string_pretty(&reply)?))
            }
            Self::Variants { symmetry } => {
                let symmetry = serde_json::from_value::<Symmetry>(symmetry.into())
                    .context("symmetry is `symmetric` or `cyclic`")?;
                Ok(symmetry
                    .space()
                    .iter()
                    .map(VariantKey::from)
                    .for_each(|key| println!("{}", key)))
            }
        }
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::from_json(&read(path)?),
        None => Ok(Config::default()),
    }
}

fn rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}
