use std::path::PathBuf;
use tally_core::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("无效的存储键: {0:?}")]
    InvalidKey(String),

    #[error("读写 {path} 失败: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("游戏索引已损坏: {0}")]
    Index(#[source] serde_json::Error),
}
