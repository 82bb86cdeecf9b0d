use crate::state::PlayerId;
use thiserror::Error;

/// 提交的数据不合法。出现这类错误时游戏状态保持不变。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("得分数量与玩家数量不一致：玩家 {expected} 人，得分 {actual} 条")]
    PlayerCountMismatch { expected: usize, actual: usize },

    #[error("玩家 {0} 不在本局游戏中")]
    UnknownPlayer(PlayerId),

    #[error("玩家 {0} 的总分超出了可记录的范围")]
    ScoreOverflow(PlayerId),
}

/// 序列化/反序列化失败
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("没有可用的游戏数据")]
    Empty,

    #[error("游戏数据格式错误: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("游戏数据编码失败: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("游戏数据已损坏: {0}")]
    Corrupt(String),
}
