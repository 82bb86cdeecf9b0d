use tally_core::GameId;

/// 终端里可以输入的命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 新建游戏，可以同时给出玩家名单：`new 标题 : 甲, 乙`
    New { title: String, players: Vec<String> },
    AddPlayer(String),
    /// 按显示顺序（从 1 开始）修改玩家名字
    Rename { index: usize, name: String },
    /// 按名单顺序输入本轮每名玩家的分数，保留原始文本交给输入校验
    Round(Vec<String>),
    Show,
    List,
    Load(GameId),
    Delete(GameId),
    Export,
    Help,
    Exit,
}

pub const HELP: &str = "\
可用命令:
  new <标题> [: 玩家1, 玩家2, ...]   - 新建游戏
  player <名字>                      - 添加玩家
  rename <序号> <名字>               - 修改玩家名字
  round <分数1> <分数2> ...          - 记录一轮得分（按玩家顺序）
  show                               - 显示计分表
  list                               - 列出已保存的游戏
  load <游戏ID>                      - 载入游戏
  delete <游戏ID>                    - 删除游戏
  export                             - 输出当前游戏的序列化文本
  help                               - 显示帮助
  exit                               - 退出";

impl Command {
    /// 解析一行输入。空行返回 `Ok(None)`，无法识别时返回用法提示。
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "new" => {
                let (title, players) = match rest.split_once(':') {
                    Some((title, list)) => (
                        title.trim(),
                        list.split(',').map(|n| n.trim().to_string()).filter(|n| !n.is_empty()).collect(),
                    ),
                    None => (rest, Vec::new()),
                };
                if title.is_empty() {
                    return Err("用法: new <标题> [: 玩家1, 玩家2, ...]".to_string());
                }
                Command::New { title: title.to_string(), players }
            }
            "player" => Command::AddPlayer(rest.to_string()),
            "rename" => {
                let (index, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match index.parse::<usize>() {
                    Ok(index) if index > 0 && !name.trim().is_empty() => Command::Rename { index, name: name.trim().to_string() },
                    _ => return Err("用法: rename <序号> <名字>".to_string()),
                }
            }
            "round" => Command::Round(rest.split_whitespace().map(str::to_string).collect()),
            "show" => Command::Show,
            "list" => Command::List,
            "load" | "delete" => {
                let id: GameId = rest.parse().map_err(|_| format!("无效的游戏ID: {rest:?}"))?;
                if word == "load" { Command::Load(id) } else { Command::Delete(id) }
            }
            "export" => Command::Export,
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            _ => return Err(format!("未知命令: {line}")),
        };
        Ok(Some(command))
    }
}
