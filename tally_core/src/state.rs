use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub type GameId = Uuid;
pub type PlayerId = Uuid;
pub type Points = i64;

/// 一局完整的计分游戏：标识、标题、玩家名单和每轮的得分记录。
///
/// 序列化后的字段名与存储格式保持一致 (`gameId`, `gameTitle`, `playerList`, `score`)。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "gameId")]
    pub id: GameId,
    #[serde(rename = "gameTitle")]
    pub title: String,
    // 按加入顺序排列，也是显示顺序，不会重新排序
    #[serde(rename = "playerList")]
    pub players: Vec<Player>,
    // 只追加，第 N 个元素的轮次号为 N
    #[serde(rename = "score")]
    pub rounds: Vec<Round>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId, // 所有得分查询都以此为键，创建后不变
    pub name: String,
}

/// 一轮结束后的得分记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 从 1 开始的轮次号
    #[serde(rename = "scoreOrder")]
    pub number: u32,
    #[serde(rename = "scoreMap")]
    pub scores: BTreeMap<PlayerId, Points>,
}

/// (玩家, 分数) 对。提交一轮得分时作为输入，汇总总分时作为输出，本身不会被保存。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleScore {
    pub player_id: PlayerId,
    pub score: Points,
}

impl SingleScore {
    pub fn new(player_id: PlayerId, score: Points) -> Self {
        SingleScore { player_id, score }
    }
}

// --- Game 的实现方法 ---

impl Game {
    /// 已记录的轮数
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn has_scores(&self) -> bool {
        !self.rounds.is_empty()
    }

    /// 最新一轮的轮次号，还没有记录时为 0
    pub fn latest_round(&self) -> u32 {
        self.rounds.iter().map(|r| r.number).max().unwrap_or(0)
    }

    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *player_id)
    }

    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    /// 至少两名玩家才能开始计分
    pub fn has_minimum_players(&self) -> bool {
        self.players.len() >= 2
    }

    pub fn is_ready_to_play(&self) -> bool {
        !self.title.trim().is_empty() && self.has_minimum_players()
    }
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player { id: Uuid::new_v4(), name: name.into() }
    }

    /// 用于显示的名字。名字为空时退回到 `Player` 加上 id 的前 6 位。
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            let simple = self.id.simple().to_string();
            format!("Player {}", &simple[..6])
        } else {
            self.name.clone()
        }
    }

    /// 名字的首字母缩写，最多两个字母
    pub fn initials(&self) -> String {
        if self.name.trim().is_empty() {
            return "P".to_string();
        }
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Round {
    /// 某位玩家在本轮的得分，没有记录时返回 None
    pub fn score_of(&self, player_id: &PlayerId) -> Option<Points> {
        self.scores.get(player_id).copied()
    }
}
