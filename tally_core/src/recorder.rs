use crate::error::ValidationError;
use crate::state::*;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// 记录一轮得分
///
/// - 得分条数必须等于当前玩家人数，每名玩家恰好一条。
/// - 每条得分的玩家 id 必须在名单中。
/// - 同一玩家 id 出现多次时，后面的得分覆盖前面的。
/// - 加上本轮后每名玩家的总分都必须在 `Points` 范围内。
/// - 新一轮的轮次号为当前轮数 + 1。
///
/// 校验全部通过后才会追加；失败时游戏保持不变。
pub fn add_score(game: &mut Game, scores: &[SingleScore]) -> Result<u32, ValidationError> {
    let expected = game.players.len();
    if scores.len() != expected {
        warn!("add_score: 得分数量不一致 - 玩家: {}, 得分: {}", expected, scores.len());
        return Err(ValidationError::PlayerCountMismatch { expected, actual: scores.len() });
    }

    if let Some(unknown) = scores.iter().find(|s| game.player(&s.player_id).is_none()) {
        warn!("add_score: 玩家 {} 不在游戏 {} 中", unknown.player_id, game.id);
        return Err(ValidationError::UnknownPlayer(unknown.player_id));
    }

    let score_map: BTreeMap<PlayerId, Points> = scores.iter().map(|s| (s.player_id, s.score)).collect();
    if score_map.len() < scores.len() {
        warn!("add_score: 提交中有重复的玩家 id，后面的得分覆盖了前面的");
    }

    for (player_id, score) in &score_map {
        let total = game
            .rounds
            .iter()
            .filter_map(|r| r.score_of(player_id))
            .try_fold(*score, Points::checked_add);
        if total.is_none() {
            warn!("add_score: 玩家 {} 的总分溢出", player_id);
            return Err(ValidationError::ScoreOverflow(*player_id));
        }
    }

    let next_round = game.rounds.len() as u32 + 1;
    game.rounds.push(Round { number: next_round, scores: score_map });
    debug!("游戏 {} 记录了第 {} 轮", game.id, next_round);
    Ok(next_round)
}
