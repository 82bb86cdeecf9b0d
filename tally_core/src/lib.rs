//! # 计分板核心库
//!
//! 这个 `core` crate 负责多人按轮计分游戏的全部记账逻辑：
//! 创建游戏、登记玩家、记录每轮得分、查询单轮和累计得分，
//! 以及将完整的游戏状态编码为可传输的文本。
//! 它不做任何 I/O，数据存放在哪里由调用方（存储层、终端界面）决定。

mod codec;
mod error;
mod query;
mod recorder;
mod registry;
mod state;
mod strategy;

pub use codec::*;

pub use error::*;

pub use query::*;

pub use recorder::*;

pub use registry::*;

pub use state::*;

pub use strategy::*;
