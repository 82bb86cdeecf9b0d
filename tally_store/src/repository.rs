use crate::error::RepositoryError;
use crate::kv::KeyValueStore;
use tally_core::{deserialize_game, serialize_game, Game, GameId};
use tracing::{debug, info, warn};

pub const GAME_IDS_KEY: &str = "gameIds";
pub const CURRENT_GAME_KEY: &str = "currentGame";

/// 以游戏 id 为键保存游戏
///
/// 除了每局游戏本身，还维护两项元数据：
/// - `gameIds`: 已保存游戏的 id 列表（按第一次保存的顺序）
/// - `currentGame`: 当前正在进行的游戏 id
pub struct GameRepository<S> {
    store: S,
}

impl<S: KeyValueStore> GameRepository<S> {
    pub fn new(store: S) -> Self {
        GameRepository { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 保存游戏，第一次保存时加入索引
    pub fn save_game(&self, game: &Game) -> Result<(), RepositoryError> {
        let text = serialize_game(game)?;
        self.store.put(&game.id.to_string(), &text)?;

        let mut ids = self.game_ids()?;
        if !ids.contains(&game.id) {
            ids.push(game.id);
            self.write_index(&ids)?;
        }
        debug!("游戏 {} 已保存", game.id);
        Ok(())
    }

    /// 读取游戏。没有保存过时返回 None；保存的内容无法解析时返回错误。
    pub fn load_game(&self, game_id: GameId) -> Result<Option<Game>, RepositoryError> {
        let Some(text) = self.store.get(&game_id.to_string())? else {
            return Ok(None);
        };
        let game = deserialize_game(&text)?;
        Ok(Some(game))
    }

    pub fn game_ids(&self) -> Result<Vec<GameId>, RepositoryError> {
        match self.store.get(GAME_IDS_KEY)? {
            Some(text) if !text.trim().is_empty() => serde_json::from_str(&text).map_err(RepositoryError::Index),
            _ => Ok(Vec::new()),
        }
    }

    /// 读取所有已保存的游戏，跳过无法解析的条目
    pub fn all_games(&self) -> Result<Vec<Game>, RepositoryError> {
        let mut games = Vec::new();
        for id in self.game_ids()? {
            match self.load_game(id) {
                Ok(Some(game)) => games.push(game),
                Ok(None) => warn!("索引中的游戏 {} 没有数据", id),
                Err(e) => warn!("跳过游戏 {}: {}", id, e),
            }
        }
        Ok(games)
    }

    /// 删除游戏；如果它是当前游戏，同时清除当前游戏指针
    pub fn delete_game(&self, game_id: GameId) -> Result<(), RepositoryError> {
        self.store.remove(&game_id.to_string())?;

        let mut ids = self.game_ids()?;
        let before = ids.len();
        ids.retain(|id| *id != game_id);
        if ids.len() != before {
            self.write_index(&ids)?;
        }

        if self.current_game_id()? == Some(game_id) {
            self.set_current_game(None)?;
        }
        info!("游戏 {} 已删除", game_id);
        Ok(())
    }

    pub fn current_game_id(&self) -> Result<Option<GameId>, RepositoryError> {
        let Some(text) = self.store.get(CURRENT_GAME_KEY)? else {
            return Ok(None);
        };
        match text.trim().parse() {
            Ok(id) => Ok(Some(id)),
            Err(e) => {
                warn!("当前游戏指针无效 ({:?}): {}", text, e);
                Ok(None)
            }
        }
    }

    pub fn set_current_game(&self, game_id: Option<GameId>) -> Result<(), RepositoryError> {
        match game_id {
            Some(id) => self.store.put(CURRENT_GAME_KEY, &id.to_string())?,
            None => self.store.remove(CURRENT_GAME_KEY)?,
        }
        Ok(())
    }

    pub fn current_game(&self) -> Result<Option<Game>, RepositoryError> {
        match self.current_game_id()? {
            Some(id) => self.load_game(id),
            None => Ok(None),
        }
    }

    fn write_index(&self, ids: &[GameId]) -> Result<(), RepositoryError> {
        let text = serde_json::to_string(ids).map_err(RepositoryError::Index)?;
        self.store.put(GAME_IDS_KEY, &text)?;
        Ok(())
    }
}
