use std::collections::BTreeMap;
use tally_core::{Player, Points, SingleScore};
use thiserror::Error;

/// 一次校验的结果：字段键 -> 是否有错误
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, bool>);

impl FieldErrors {
    pub fn set(&mut self, field: impl Into<String>, has_error: bool) {
        self.0.insert(field.into(), has_error);
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.0.get(field).copied().unwrap_or(false)
    }

    /// 有错误的字段
    pub fn failed(&self) -> Vec<&str> {
        self.0.iter().filter(|(_, e)| **e).map(|(k, _)| k.as_str()).collect()
    }
}

/// 校验新游戏的标题和玩家名单
///
/// 字段键：`title`、`players`（人数）、`player_<序号>`（每个名字）。
pub fn validate_new_game(title: &str, names: &[String], min_players: usize, max_players: usize) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.set("title", title.trim().is_empty());
    errors.set("players", names.len() < min_players || names.len() > max_players);
    for (idx, name) in names.iter().enumerate() {
        errors.set(format!("player_{idx}"), name.trim().is_empty());
    }
    errors
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreInputError {
    #[error("至少要输入一个分数")]
    Empty,

    #[error("{player} 的分数 {token:?} 不是有效的整数")]
    NotANumber { player: String, token: String },

    #[error("需要为 {expected} 名玩家各输入一个分数，收到 {actual} 个")]
    Missing { expected: usize, actual: usize },
}

/// 把一行分数文本转换为按名单顺序排列的得分
///
/// 非数字输入在这里就被拦下，不会进入 `add_score`。
pub fn parse_round_scores(players: &[Player], tokens: &[&str]) -> Result<Vec<SingleScore>, ScoreInputError> {
    if tokens.iter().all(|t| t.trim().is_empty()) {
        return Err(ScoreInputError::Empty);
    }

    let mut scores = Vec::with_capacity(players.len());
    for (player, token) in players.iter().zip(tokens) {
        let score: Points = token.trim().parse().map_err(|_| ScoreInputError::NotANumber {
            player: player.display_name(),
            token: token.to_string(),
        })?;
        scores.push(SingleScore::new(player.id, score));
    }

    if tokens.len() != players.len() {
        return Err(ScoreInputError::Missing { expected: players.len(), actual: tokens.len() });
    }
    Ok(scores)
}
