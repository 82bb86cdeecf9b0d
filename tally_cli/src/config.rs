use serde::Deserialize;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "tally.toml";

/// 终端计分板的配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 保存游戏数据的目录
    pub data_dir: PathBuf,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("tally-data"),
            min_players: 2,
            max_players: 6,
        }
    }
}

impl Config {
    /// 读取 `tally.toml`（如果存在），再应用环境变量覆盖
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Self::from_toml(&content),
            Err(_) => {
                tracing::info!("没有找到 {CONFIG_FILE}，使用默认配置");
                Config::default()
            }
        };

        if let Ok(dir) = std::env::var("TALLY_DATA_DIR")
            && !dir.is_empty()
        {
            config.data_dir = PathBuf::from(dir);
        }

        config.validated()
    }

    fn from_toml(content: &str) -> Self {
        match toml::from_str::<Config>(content) {
            Ok(cfg) => {
                tracing::info!("已加载配置 {CONFIG_FILE}");
                cfg
            }
            Err(e) => {
                tracing::warn!("解析 {CONFIG_FILE} 失败: {e}，使用默认配置");
                Config::default()
            }
        }
    }

    /// 人数限制不合理时退回默认值
    fn validated(mut self) -> Self {
        let defaults = Config::default();
        if self.min_players == 0 {
            tracing::warn!("min_players 必须大于 0，使用默认值 {}", defaults.min_players);
            self.min_players = defaults.min_players;
        }
        if self.max_players < self.min_players {
            tracing::warn!("max_players ({}) 小于 min_players ({})，使用 {}", self.max_players, self.min_players, self.min_players.max(defaults.max_players));
            self.max_players = self.min_players.max(defaults.max_players);
        }
        self
    }
}
