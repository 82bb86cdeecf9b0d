use crate::error::CodecError;
use crate::state::*;
use std::collections::HashSet;
use tracing::{debug, warn};

/// 将游戏完整编码为 JSON 文本
pub fn serialize_game(game: &Game) -> Result<String, CodecError> {
    let text = serde_json::to_string(game).map_err(CodecError::Encode)?;
    debug!("游戏 {} 序列化完成", game.id);
    Ok(text)
}

/// 从 JSON 文本还原游戏
///
/// 空白文本视为 "没有数据"。解析成功后还会检查数据模型的不变量，
/// 不满足时整体失败，不会返回部分填充的游戏。
pub fn deserialize_game(text: &str) -> Result<Game, CodecError> {
    if text.trim().is_empty() {
        warn!("deserialize_game: 游戏数据为空");
        return Err(CodecError::Empty);
    }

    let game: Game = serde_json::from_str(text).map_err(|e| {
        warn!("deserialize_game: JSON 解析失败: {}", e);
        CodecError::Malformed(e)
    })?;

    check_invariants(&game).inspect_err(|e| warn!("deserialize_game: {}", e))?;
    debug!("游戏 {} 反序列化完成", game.id);
    Ok(game)
}

/// 从存储中取出的值可能不存在，不存在与空文本同样处理
pub fn deserialize_stored(text: Option<&str>) -> Result<Game, CodecError> {
    deserialize_game(text.unwrap_or_default())
}

fn check_invariants(game: &Game) -> Result<(), CodecError> {
    let mut roster = HashSet::new();
    for player in &game.players {
        if !roster.insert(player.id) {
            return Err(CodecError::Corrupt(format!("玩家 id {} 重复", player.id)));
        }
    }

    for (idx, round) in game.rounds.iter().enumerate() {
        let expected = idx as u32 + 1;
        if round.number != expected {
            return Err(CodecError::Corrupt(format!("第 {} 条轮次记录的轮次号为 {}", expected, round.number)));
        }
        if let Some(stranger) = round.scores.keys().find(|id| !roster.contains(*id)) {
            return Err(CodecError::Corrupt(format!("第 {} 轮包含未知玩家 {}", expected, stranger)));
        }
    }
    Ok(())
}
