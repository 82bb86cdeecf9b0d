use crate::error::ValidationError;
use crate::state::*;
use tracing::{debug, warn};
use uuid::Uuid;

/// 创建一局新游戏
///
/// 分配新的唯一 id，原样保存标题，玩家名单和轮次记录均为空。不会失败。
pub fn create_game(title: &str) -> Game {
    let game = Game {
        id: Uuid::new_v4(),
        title: title.to_string(),
        players: Vec::new(),
        rounds: Vec::new(),
    };
    debug!("创建游戏 {} ({})", game.id, game.title);
    game
}

/// 向名单末尾追加一名玩家，返回新玩家的 id
///
/// 空名字也会被接受，显示时由 [`Player::display_name`] 处理。
/// 已有轮次记录后仍然允许加人，但之前的轮次里不会有这名玩家的得分。
pub fn add_player(game: &mut Game, name: &str) -> PlayerId {
    let player = Player::new(name);
    let player_id = player.id;
    if game.has_scores() {
        warn!("游戏 {} 已记录 {} 轮，新玩家 {} 在之前的轮次中没有得分", game.id, game.round_count(), player_id);
    }
    game.players.push(player);
    debug!("玩家 {} 加入游戏 {}", player_id, game.id);
    player_id
}

/// 修改玩家的显示名字，id 保持不变
pub fn rename_player(game: &mut Game, player_id: PlayerId, name: &str) -> Result<(), ValidationError> {
    let Some(player) = game.players.iter_mut().find(|p| p.id == player_id) else {
        warn!("rename_player: 玩家 {} 不在游戏 {} 中", player_id, game.id);
        return Err(ValidationError::UnknownPlayer(player_id));
    };
    player.name = name.to_string();
    Ok(())
}
