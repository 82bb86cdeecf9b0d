use crate::state::*;

/// 查询某位玩家在某一轮的得分
///
/// 该轮还没有进行，或者该轮没有这名玩家的记录时，返回 0。
pub fn player_round_score(game: &Game, player_id: &PlayerId, round: u32) -> Points {
    game.rounds
        .iter()
        .find(|r| r.number == round)
        .and_then(|r| r.score_of(player_id))
        .unwrap_or(0)
}

/// 计算每名玩家在所有轮次中的总分
///
/// 结果按名单顺序排列，每名玩家一条。每次都从轮次记录重新累加，不做缓存。
/// 超出 `Points` 范围的总分停在边界值上。
pub fn calculated_score(game: &Game) -> Vec<SingleScore> {
    game.players
        .iter()
        .map(|player| SingleScore::new(player.id, saturating_total(game.rounds.iter().filter_map(|r| r.score_of(&player.id)))))
        .collect()
}

pub(crate) fn saturating_total(scores: impl IntoIterator<Item = Points>) -> Points {
    scores.into_iter().fold(0, Points::saturating_add)
}

/// 按分数从高到低排序，分数相同时保持原来的顺序
pub fn ranked(scores: &[SingleScore]) -> Vec<SingleScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted
}

pub fn winning_score(scores: &[SingleScore]) -> Option<Points> {
    scores.iter().map(|s| s.score).max()
}

/// 当前领先的玩家（并列时返回全部）
pub fn leaders(scores: &[SingleScore]) -> Vec<SingleScore> {
    let Some(best) = winning_score(scores) else {
        return Vec::new();
    };
    scores.iter().filter(|s| s.score == best).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::add_score;
    use crate::registry::{add_player, create_game};
    use uuid::Uuid;

    fn setup_test_game(names: &[&str]) -> (Game, Vec<PlayerId>) {
        let mut game = create_game("Night Game");
        let ids = names.iter().map(|n| add_player(&mut game, n)).collect();
        (game, ids)
    }

    fn play(game: &mut Game, ids: &[PlayerId], points: &[Points]) {
        let scores: Vec<_> = ids.iter().zip(points).map(|(id, s)| SingleScore::new(*id, *s)).collect();
        add_score(game, &scores).unwrap();
    }

    #[test]
    fn test_totals_zero_without_rounds() {
        let (game, p) = setup_test_game(&["Ann", "Bo"]);
        let totals = calculated_score(&game);
        assert_eq!(totals, vec![SingleScore::new(p[0], 0), SingleScore::new(p[1], 0)]);
    }

    #[test]
    fn test_round_score_lookup() {
        let (mut game, p) = setup_test_game(&["Ann", "Bo"]);
        play(&mut game, &p, &[10, 5]);

        assert_eq!(player_round_score(&game, &p[0], 1), 10);
        assert_eq!(player_round_score(&game, &p[1], 1), 5);
        // 第 2 轮还没有进行
        assert_eq!(player_round_score(&game, &p[0], 2), 0);
        assert_eq!(player_round_score(&game, &p[0], 0), 0);
    }

    #[test]
    fn test_round_score_unknown_player_defaults_to_zero() {
        let (mut game, p) = setup_test_game(&["Ann", "Bo"]);
        play(&mut game, &p, &[10, 5]);
        assert_eq!(player_round_score(&game, &Uuid::new_v4(), 1), 0);
    }

    #[test]
    fn test_totals_accumulate_across_rounds() {
        let (mut game, p) = setup_test_game(&["Ann", "Bo"]);
        play(&mut game, &p, &[10, 5]);
        play(&mut game, &p, &[3, 7]);

        let totals = calculated_score(&game);
        assert_eq!(totals, vec![SingleScore::new(p[0], 13), SingleScore::new(p[1], 12)]);
    }

    #[test]
    fn test_totals_with_negative_scores() {
        let (mut game, p) = setup_test_game(&["Ann", "Bo", "Cem"]);
        play(&mut game, &p, &[-101, 202, 0]);
        play(&mut game, &p, &[50, -300, 4]);

        let totals: Vec<_> = calculated_score(&game).iter().map(|s| s.score).collect();
        assert_eq!(totals, vec![-51, -98, 4]);
    }

    #[test]
    fn test_totals_keep_roster_order() {
        let (mut game, p) = setup_test_game(&["Ann", "Bo", "Cem"]);
        play(&mut game, &p, &[1, 30, 20]);
        let order: Vec<_> = calculated_score(&game).iter().map(|s| s.player_id).collect();
        assert_eq!(order, p);
    }

    #[test]
    fn test_late_player_missing_entries_count_as_zero() {
        let (mut game, mut p) = setup_test_game(&["Ann", "Bo"]);
        play(&mut game, &p, &[10, 5]);
        p.push(add_player(&mut game, "Cem"));
        play(&mut game, &p, &[1, 1, 8]);

        assert_eq!(player_round_score(&game, &p[2], 1), 0);
        let totals = calculated_score(&game);
        assert_eq!(totals[2], SingleScore::new(p[2], 8));
        assert_eq!(totals[0].score, 11);
    }

    #[test]
    fn test_totals_saturate_for_decoded_extremes() {
        // 解码得到的状态不经过 add_score 的范围检查
        let (mut game, p) = setup_test_game(&["Ann", "Bo"]);
        for (number, points) in [(1, [Points::MAX, Points::MIN]), (2, [1, -1])] {
            let scores = p.iter().copied().zip(points).collect();
            game.rounds.push(Round { number, scores });
        }

        let totals: Vec<_> = calculated_score(&game).iter().map(|s| s.score).collect();
        assert_eq!(totals, vec![Points::MAX, Points::MIN]);
    }

    #[test]
    fn test_ranked_is_stable() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let scores = [SingleScore::new(a, 5), SingleScore::new(b, 9), SingleScore::new(c, 5)];
        let order: Vec<_> = ranked(&scores).iter().map(|s| s.player_id).collect();
        assert_eq!(order, vec![b, a, c]);
    }

    #[test]
    fn test_leaders_single_and_tied() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let single = [SingleScore::new(a, 5), SingleScore::new(b, 9)];
        assert_eq!(leaders(&single), vec![SingleScore::new(b, 9)]);

        let tied = [SingleScore::new(a, 9), SingleScore::new(b, 3), SingleScore::new(c, 9)];
        assert_eq!(leaders(&tied), vec![SingleScore::new(a, 9), SingleScore::new(c, 9)]);
    }

    #[test]
    fn test_leaders_empty() {
        assert!(leaders(&[]).is_empty());
        assert_eq!(winning_score(&[]), None);
    }
}
