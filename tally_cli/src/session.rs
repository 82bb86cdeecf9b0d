use crate::board::render_board;
use crate::command::{Command, HELP};
use crate::config::Config;
use crate::input::{parse_round_scores, validate_new_game, ScoreInputError};
use tally_core::{add_player, add_score, create_game, rename_player, serialize_game, CodecError, Game, GameId, ValidationError};
use tally_store::{GameRepository, KeyValueStore, RepositoryError};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("还没有游戏，请先用 new 新建或用 load 载入")]
    NoGame,

    #[error("输入有误: {}", .0.join(", "))]
    InvalidFields(Vec<String>),

    #[error("玩家人数已达上限 {0}")]
    RosterFull(usize),

    #[error("至少需要 {0} 名玩家才能记录得分")]
    NotEnoughPlayers(usize),

    #[error("没有第 {0} 号玩家")]
    NoSuchPlayer(usize),

    #[error("没有找到游戏 {0}")]
    NotFound(GameId),

    #[error(transparent)]
    Input(#[from] ScoreInputError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 一个终端会话：持有当前游戏，每次修改后写回存储
pub struct Session<S> {
    repo: GameRepository<S>,
    config: Config,
    game: Option<Game>,
}

impl<S: KeyValueStore> Session<S> {
    /// 创建会话并恢复上次的当前游戏
    pub fn new(repo: GameRepository<S>, config: Config) -> Self {
        let game = match repo.current_game() {
            Ok(game) => game,
            Err(e) => {
                // 数据损坏时当作没有游戏
                warn!("无法恢复当前游戏: {}", e);
                None
            }
        };
        if let Some(g) = &game {
            info!("恢复了游戏 {} ({})", g.id, g.title);
        }
        Session { repo, config, game }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// 执行一条命令，返回要显示给用户的文本
    pub fn handle(&mut self, command: Command) -> Result<String, SessionError> {
        match command {
            Command::New { title, players } => self.new_game(&title, &players),
            Command::AddPlayer(name) => {
                let max_players = self.config.max_players;
                let mut game = self.current()?.clone();
                if name.trim().is_empty() {
                    return Err(SessionError::InvalidFields(vec![format!("player_{}", game.players.len())]));
                }
                if game.players.len() >= max_players {
                    return Err(SessionError::RosterFull(max_players));
                }
                add_player(&mut game, &name);
                self.commit(game)?;
                Ok(format!("{} 加入了游戏", name))
            }
            Command::Rename { index, name } => {
                let mut game = self.current()?.clone();
                let player_id = index
                    .checked_sub(1)
                    .and_then(|i| game.players.get(i))
                    .map(|p| p.id)
                    .ok_or(SessionError::NoSuchPlayer(index))?;
                rename_player(&mut game, player_id, &name)?;
                self.commit(game)?;
                Ok(format!("第 {} 号玩家改名为 {}", index, name))
            }
            Command::Round(tokens) => {
                let min_players = self.config.min_players;
                let mut game = self.current()?.clone();
                if game.players.len() < min_players {
                    return Err(SessionError::NotEnoughPlayers(min_players));
                }
                let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
                let scores = parse_round_scores(&game.players, &tokens)?;
                let round = add_score(&mut game, &scores)?;
                let board = render_board(&game);
                self.commit(game)?;
                Ok(format!("第 {} 轮已记录\n{}", round, board))
            }
            Command::Show => self.current().map(render_board),
            Command::List => self.list(),
            Command::Load(id) => {
                let game = self.repo.load_game(id)?.ok_or(SessionError::NotFound(id))?;
                self.repo.set_current_game(Some(id))?;
                let board = render_board(&game);
                self.game = Some(game);
                Ok(board)
            }
            Command::Delete(id) => {
                self.repo.delete_game(id)?;
                if self.game.as_ref().is_some_and(|g| g.id == id) {
                    self.game = None;
                }
                Ok(format!("游戏 {} 已删除", id))
            }
            Command::Export => Ok(serialize_game(self.current()?)?),
            Command::Help => Ok(HELP.to_string()),
            Command::Exit => Ok(String::new()),
        }
    }

    fn new_game(&mut self, title: &str, players: &[String]) -> Result<String, SessionError> {
        let errors = validate_new_game(title, players, self.config.min_players, self.config.max_players);
        // 只给标题时允许之后再逐个加人
        let failed: Vec<String> = errors
            .failed()
            .into_iter()
            .filter(|field| !(players.is_empty() && *field == "players"))
            .map(str::to_string)
            .collect();
        if !failed.is_empty() {
            return Err(SessionError::InvalidFields(failed));
        }

        let mut game = create_game(title);
        for name in players {
            add_player(&mut game, name);
        }
        info!("新建游戏 {} ({})", game.id, game.title);
        let reply = format!("已新建游戏 {}\n{}", game.id, render_board(&game));
        self.commit(game)?;
        Ok(reply)
    }

    fn list(&self) -> Result<String, SessionError> {
        let games = self.repo.all_games()?;
        if games.is_empty() {
            return Ok("没有已保存的游戏".to_string());
        }
        let current = self.game.as_ref().map(|g| g.id);
        let lines: Vec<String> = games
            .iter()
            .map(|g| {
                let marker = if Some(g.id) == current { "*" } else { " " };
                format!("{} {}  {}  ({} 名玩家, {} 轮)", marker, g.id, g.title, g.players.len(), g.round_count())
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn current(&self) -> Result<&Game, SessionError> {
        self.game.as_ref().ok_or(SessionError::NoGame)
    }

    /// 写回存储，成功后才替换内存中的当前游戏
    fn commit(&mut self, game: Game) -> Result<(), SessionError> {
        self.repo.save_game(&game)?;
        self.repo.set_current_game(Some(game.id))?;
        self.game = Some(game);
        Ok(())
    }
}
