use std::fmt::Write;
use tally_core::{calculated_score, leaders, player_round_score, Game};
use unicode_width::UnicodeWidthStr;

const ROUND_COLUMN: &str = "轮次";
const TOTAL_ROW: &str = "总分";

/// 把游戏渲染成文本计分表：每轮一行，最后是总分和领先者
pub fn render_board(game: &Game) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", game.title);
    if game.players.is_empty() {
        out.push_str("（还没有玩家）\n");
        return out;
    }

    let headers: Vec<String> = game.players.iter().map(|p| p.display_name()).collect();
    let totals = calculated_score(game);
    let widths: Vec<usize> = headers
        .iter()
        .zip(&totals)
        .map(|(h, t)| h.width().max(t.score.to_string().len()).max(4))
        .collect();
    let first_width = ROUND_COLUMN.width().max(TOTAL_ROW.width()).max(game.round_count().to_string().len());

    let row = |label: &str, cells: Vec<String>| -> String {
        let mut line = pad(label, first_width);
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str(" | ");
            line.push_str(&pad(cell, *width));
        }
        line.trim_end().to_string()
    };

    let _ = writeln!(out, "{}", row(ROUND_COLUMN, headers.clone()));
    let rule_len = first_width + widths.iter().map(|w| w + 3).sum::<usize>();
    let _ = writeln!(out, "{}", "-".repeat(rule_len));

    for round in &game.rounds {
        let cells = game
            .players
            .iter()
            .map(|p| player_round_score(game, &p.id, round.number).to_string())
            .collect();
        let _ = writeln!(out, "{}", row(&round.number.to_string(), cells));
    }
    let _ = writeln!(out, "{}", "-".repeat(rule_len));
    let _ = writeln!(out, "{}", row(TOTAL_ROW, totals.iter().map(|t| t.score.to_string()).collect()));

    if game.has_scores() {
        let names: Vec<String> = leaders(&totals)
            .iter()
            .filter_map(|s| game.player(&s.player_id))
            .map(|p| p.display_name())
            .collect();
        let _ = writeln!(out, "领先: {}", names.join(", "));
    }
    out
}

/// 按终端显示宽度补齐，全角字符占两列
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}
