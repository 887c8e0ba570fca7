use super::error::EngineError;
use drill_core::ID;
use drill_library::GameConfig;
use drill_library::Games;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Read-mostly cache of game registry records, keyed by whatever the
/// caller used to name the game (slug or id).
#[derive(Default)]
pub struct Registry {
    cache: RwLock<HashMap<String, GameConfig>>,
}

impl Registry {
    /// Look a game up by slug, then by id, remembering the answer.
    pub async fn resolve<G: Games>(&self, games: &G, key: &str) -> Result<GameConfig, EngineError> {
        if let Some(game) = self.cache.read().await.get(key) {
            return Ok(game.clone());
        }
        let game = match games.by_slug(key).await? {
            Some(game) => game,
            None => match ID::<GameConfig>::try_from(key) {
                Ok(id) => games.by_id(id).await?,
                Err(_) => None,
            }
            .ok_or_else(|| EngineError::UnknownGame(key.to_string()))?,
        };
        log::debug!("cached game {} ({}) under {:?}", game.slug(), game.mode(), key);
        self.cache
            .write()
            .await
            .insert(key.to_string(), game.clone());
        Ok(game)
    }
    pub async fn len(&self) -> usize {
        self.cache.read().await.len()
    }
    pub async fn clear(&self) {
        self.cache.write().await.clear();
    }
}
