mod board;
mod command;
mod config;
mod input;
mod session;

use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use command::{Command, HELP};
use config::Config;
use session::Session;
use tally_store::{FileStore, GameRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load();
    tracing::info!("数据目录: {}", config.data_dir.display());
    let repo = GameRepository::new(FileStore::new(&config.data_dir));
    let mut session = Session::new(repo, config);

    println!("--- 计分板 ---");
    println!("{HELP}");
    if let Some(game) = session.game() {
        println!("\n继续上次的游戏: {} ({})", game.title, game.id);
    }

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = stdin.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                println!("{usage}");
                continue;
            }
        };
        if command == Command::Exit {
            println!("再见!");
            break;
        }

        match session.handle(command) {
            Ok(reply) => println!("{reply}"),
            Err(e) => println!("错误: {e}"),
        }
    }

    Ok(())
}
