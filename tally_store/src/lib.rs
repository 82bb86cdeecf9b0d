//! # 计分板存储层
//!
//! 以游戏 id 为键保存核心库产生的序列化文本，
//! 并维护已保存游戏的索引和 "当前游戏" 指针。

mod error;
mod kv;
mod repository;

pub use error::*;

pub use kv::*;

pub use repository::*;
