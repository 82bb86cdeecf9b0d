use crate::query::{calculated_score, saturating_total};
use crate::state::*;

/// 不同的总分计算方式。结果按名单顺序排列，排名交给 [`crate::ranked`]。
pub trait ScoringStrategy {
    fn calculate(&self, game: &Game) -> Vec<SingleScore>;

    fn name(&self) -> String;

    fn description(&self) -> String;
}

/// 累加所有轮次的得分
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScoring;

/// 每轮平均分（整数除法）。还没有任何轮次时结果为空。
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageScoring;

/// 只计算每名玩家得分最高的若干轮
#[derive(Debug, Clone, Copy)]
pub struct BestRoundsScoring {
    pub best_rounds: usize,
}

impl Default for BestRoundsScoring {
    fn default() -> Self {
        BestRoundsScoring { best_rounds: 3 }
    }
}

impl ScoringStrategy for StandardScoring {
    fn calculate(&self, game: &Game) -> Vec<SingleScore> {
        calculated_score(game)
    }

    fn name(&self) -> String {
        "Standard Scoring".to_string()
    }

    fn description(&self) -> String {
        "累加每名玩家所有轮次的得分".to_string()
    }
}

impl ScoringStrategy for AverageScoring {
    fn calculate(&self, game: &Game) -> Vec<SingleScore> {
        let round_count = game.round_count() as Points;
        if round_count == 0 {
            return Vec::new();
        }
        calculated_score(game)
            .into_iter()
            .map(|s| SingleScore::new(s.player_id, s.score / round_count))
            .collect()
    }

    fn name(&self) -> String {
        "Average Scoring".to_string()
    }

    fn description(&self) -> String {
        "计算每名玩家每轮的平均得分".to_string()
    }
}

impl ScoringStrategy for BestRoundsScoring {
    fn calculate(&self, game: &Game) -> Vec<SingleScore> {
        game.players
            .iter()
            .map(|player| {
                let mut player_scores: Vec<Points> = game.rounds.iter().filter_map(|r| r.score_of(&player.id)).collect();
                player_scores.sort_unstable_by(|a, b| b.cmp(a));
                let total = saturating_total(player_scores.into_iter().take(self.best_rounds));
                SingleScore::new(player.id, total)
            })
            .collect()
    }

    fn name(&self) -> String {
        format!("Best {} Rounds", self.best_rounds)
    }

    fn description(&self) -> String {
        format!("只计算每名玩家得分最高的 {} 轮", self.best_rounds)
    }
}
