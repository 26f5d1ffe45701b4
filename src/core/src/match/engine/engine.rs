use crate::r#match::engine::Poisson;
use crate::r#match::{
    MatchEvent, MatchEventType, MatchPlayer, MatchPlayerStatistics, MatchResult, MatchSide,
    MatchSquad,
};
use crate::utils::{FloatUtils, IntegerUtils};
use log::debug;
use rand::RngExt;
use rand::seq::IndexedRandom;

const HOME_ADVANTAGE: f64 = 3.0;
const STRENGTH_VARIANCE: f64 = 15.0;

const BASELINE_STRENGTH: f64 = 30.0;
const STRENGTH_PER_GOAL: f64 = 20.0;

const MIN_SHOTS: i32 = 5;
const MAX_SHOTS: i32 = 20;
const MIN_SHOTS_ON_TARGET: i32 = 2;

const MAX_CARD_INCIDENTS: i32 = 6;
const RED_CARD_CHANCE: f64 = 0.05;
const ASSIST_CHANCE: f64 = 0.7;

const RATING_BASE: f32 = 3.0;
const RATING_VARIANCE: f64 = 1.5;
const RATING_GOAL_BONUS: f32 = 0.5;
const RATING_MIN: f32 = 1.0;
const RATING_MAX: f32 = 10.0;

const UNKNOWN_PLAYER: &str = "Unknown";

/// Resolves a fixture in a single pass from aggregate team strength.
pub struct MatchEngine;

impl MatchEngine {
    pub fn play<R: RngExt + ?Sized>(
        match_id: u32,
        home: &MatchSquad,
        away: &MatchSquad,
        rng: &mut R,
    ) -> MatchResult {
        let home_strength = Self::strength(home.rating, rng) + HOME_ADVANTAGE;
        let away_strength = Self::strength(away.rating, rng);

        let mut result = MatchResult::new(match_id, home, away);

        let (home_possession, away_possession) = Self::possession(home_strength, away_strength);

        result.home_possession = home_possession;
        result.away_possession = away_possession;

        (result.home_shots, result.home_shots_on_target) = Self::shots(rng);
        (result.away_shots, result.away_shots_on_target) = Self::shots(rng);

        result.home_score = Self::goals(home_strength, rng);
        result.away_score = Self::goals(away_strength, rng);

        for _ in 0..result.home_score {
            Self::score_goal(home, MatchSide::Home, &mut result, rng);
        }

        for _ in 0..result.away_score {
            Self::score_goal(away, MatchSide::Away, &mut result, rng);
        }

        Self::book_players(home, away, &mut result, rng);

        // sort_by_key is stable, same-minute events keep creation order
        result.events.sort_by_key(|event| event.minute);

        Self::rate_players(home, &mut result, rng);
        Self::rate_players(away, &mut result, rng);

        debug!(
            "⚽ {} {} - {} {} (strength {:.1} / {:.1})",
            home.club_name,
            result.home_score,
            result.away_score,
            away.club_name,
            home_strength,
            away_strength
        );

        result
    }

    fn strength<R: RngExt + ?Sized>(rating: u8, rng: &mut R) -> f64 {
        rating as f64 + FloatUtils::random(rng, -STRENGTH_VARIANCE, STRENGTH_VARIANCE)
    }

    pub fn possession(home_strength: f64, away_strength: f64) -> (u8, u8) {
        let total = home_strength + away_strength;

        if total <= 0.0 {
            return (50, 50);
        }

        let home = (100.0 * home_strength / total).round().clamp(0.0, 100.0) as u8;

        (home, 100 - home)
    }

    fn shots<R: RngExt + ?Sized>(rng: &mut R) -> (u8, u8) {
        let shots = IntegerUtils::random(rng, MIN_SHOTS, MAX_SHOTS);
        let on_target = IntegerUtils::random(rng, MIN_SHOTS_ON_TARGET, shots);

        (shots as u8, on_target as u8)
    }

    pub fn expected_goals(strength: f64) -> f64 {
        ((strength - BASELINE_STRENGTH) / STRENGTH_PER_GOAL).max(0.0)
    }

    fn goals<R: RngExt + ?Sized>(strength: f64, rng: &mut R) -> u8 {
        Poisson::sample(Self::expected_goals(strength), rng).min(u8::MAX as u32) as u8
    }

    fn score_goal<R: RngExt + ?Sized>(
        squad: &MatchSquad,
        side: MatchSide,
        result: &mut MatchResult,
        rng: &mut R,
    ) {
        let minute = IntegerUtils::random(rng, 1, 90) as u8;

        let Some(scorer) = Self::pick_scorer(&squad.main_squad, rng) else {
            result
                .events
                .push(MatchEvent::goal(minute, UNKNOWN_PLAYER.to_string(), side, None));
            return;
        };

        let assistant = if rng.random_bool(ASSIST_CHANCE) {
            let teammates: Vec<&MatchPlayer> = squad
                .main_squad
                .iter()
                .filter(|p| p.id != scorer.id)
                .collect();

            teammates.choose(rng).copied()
        } else {
            None
        };

        result.statistics_mut(scorer.id).goals += 1;

        if let Some(assistant) = assistant {
            result.statistics_mut(assistant.id).assists += 1;
        }

        result.events.push(MatchEvent::goal(
            minute,
            scorer.name.clone(),
            side,
            assistant.map(|p| p.name.clone()),
        ));
    }

    /// Attackers first, then any outfield player, then anyone at all.
    fn pick_scorer<'p, R: RngExt + ?Sized>(
        players: &'p [MatchPlayer],
        rng: &mut R,
    ) -> Option<&'p MatchPlayer> {
        let attackers: Vec<&MatchPlayer> = players.iter().filter(|p| p.is_attacking()).collect();

        if let Some(&scorer) = attackers.choose(rng) {
            return Some(scorer);
        }

        let outfield: Vec<&MatchPlayer> = players.iter().filter(|p| !p.is_goalkeeper()).collect();

        if let Some(&scorer) = outfield.choose(rng) {
            return Some(scorer);
        }

        players.choose(rng)
    }

    fn book_players<R: RngExt + ?Sized>(
        home: &MatchSquad,
        away: &MatchSquad,
        result: &mut MatchResult,
        rng: &mut R,
    ) {
        let incidents = IntegerUtils::random(rng, 0, MAX_CARD_INCIDENTS);

        for _ in 0..incidents {
            let (squad, side) = if rng.random_bool(0.5) {
                (home, MatchSide::Home)
            } else {
                (away, MatchSide::Away)
            };

            let minute = IntegerUtils::random(rng, 1, 90) as u8;

            let event_type = if rng.random_bool(RED_CARD_CHANCE) {
                MatchEventType::RedCard
            } else {
                MatchEventType::YellowCard
            };

            let player_name = match squad.main_squad.choose(rng) {
                Some(player) => {
                    let statistics = result.statistics_mut(player.id);

                    match event_type {
                        MatchEventType::RedCard => statistics.red_cards += 1,
                        _ => statistics.yellow_cards += 1,
                    }

                    player.name.clone()
                }
                None => UNKNOWN_PLAYER.to_string(),
            };

            result
                .events
                .push(MatchEvent::new(minute, event_type, player_name, side));
        }
    }

    fn rate_players<R: RngExt + ?Sized>(squad: &MatchSquad, result: &mut MatchResult, rng: &mut R) {
        for player in &squad.main_squad {
            let variance = FloatUtils::random(rng, -RATING_VARIANCE, RATING_VARIANCE) as f32;

            let mut rating =
                (player.overall as f32 / 15.0 + RATING_BASE + variance).clamp(RATING_MIN, RATING_MAX);

            let goals = result
                .player_statistics
                .get(&player.id)
                .map(|s| s.goals)
                .unwrap_or(0);

            if goals > 0 {
                rating = (rating + RATING_GOAL_BONUS).clamp(RATING_MIN, RATING_MAX);
            }

            result
                .player_ratings
                .insert(player.id, FloatUtils::round_to(rating, 1));
        }
    }
}

impl MatchResult {
    fn statistics_mut(&mut self, player_id: u32) -> &mut MatchPlayerStatistics {
        self.player_statistics.entry(player_id).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerPositionType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn possession_is_bounded_and_sums_to_hundred() {
        assert_eq!(MatchEngine::possession(50.0, 50.0), (50, 50));
        assert_eq!(MatchEngine::possession(0.0, 0.0), (50, 50));
        assert_eq!(MatchEngine::possession(-10.0, -5.0), (50, 50));
        assert_eq!(MatchEngine::possession(-5.0, 40.0), (0, 100));
        assert_eq!(MatchEngine::possession(75.0, 25.0), (75, 25));
    }

    #[test]
    fn expected_goals_floor_at_zero() {
        assert_eq!(MatchEngine::expected_goals(10.0), 0.0);
        assert_eq!(MatchEngine::expected_goals(30.0), 0.0);
        assert_eq!(MatchEngine::expected_goals(70.0), 2.0);
    }

    #[test]
    fn match_statistics_are_bounded() {
        let home = squad(1, 75);
        let away = squad(2, 60);
        let mut rng = StdRng::seed_from_u64(99);

        for match_id in 0..500 {
            let result = MatchEngine::play(match_id, &home, &away, &mut rng);

            assert_eq!(result.home_possession as u16 + result.away_possession as u16, 100);
            assert!(result.home_possession <= 100);

            assert!((5..=20).contains(&result.home_shots));
            assert!((5..=20).contains(&result.away_shots));
            assert!(result.home_shots_on_target >= 2);
            assert!(result.home_shots_on_target <= result.home_shots);
            assert!(result.away_shots_on_target <= result.away_shots);

            assert_eq!(result.player_ratings.len(), 22);
            assert!(
                result
                    .player_ratings
                    .values()
                    .all(|r| (1.0..=10.0).contains(r))
            );

            assert!(result.events.iter().all(|e| (1..=90).contains(&e.minute)));
            assert!(result.events.windows(2).all(|w| w[0].minute <= w[1].minute));

            let home_goals = result
                .events
                .iter()
                .filter(|e| e.is_goal() && e.side == MatchSide::Home)
                .count();
            assert_eq!(home_goals, result.home_score as usize);
        }
    }

    #[test]
    fn scorers_and_assists_are_credited() {
        let home = squad(1, 95);
        let away = squad(2, 40);
        let mut rng = StdRng::seed_from_u64(3);

        for match_id in 0..200 {
            let result = MatchEngine::play(match_id, &home, &away, &mut rng);

            let goals: u32 = result.player_statistics.values().map(|s| s.goals as u32).sum();
            assert_eq!(goals, result.home_score as u32 + result.away_score as u32);

            for event in result.events.iter().filter(|e| e.is_goal()) {
                assert_ne!(event.player_name, UNKNOWN_PLAYER);
                assert_ne!(event.assist_name.as_deref(), Some(event.player_name.as_str()));
            }

            for (id, statistics) in &result.player_statistics {
                if statistics.goals > 0 {
                    // Goalkeepers are only a fallback
                    assert!(*id % 100 != 0, "goalkeeper scored");
                }
            }
        }
    }

    #[test]
    fn stronger_side_scores_more() {
        let strong = squad(1, 90);
        let weak = squad(2, 40);
        let mut rng = StdRng::seed_from_u64(1000);

        let mut strong_goals = 0u32;
        let mut weak_goals = 0u32;

        for match_id in 0..1000 {
            let (home, away) = if match_id % 2 == 0 {
                (&strong, &weak)
            } else {
                (&weak, &strong)
            };

            let result = MatchEngine::play(match_id, home, away, &mut rng);

            if home.club_id == strong.club_id {
                strong_goals += result.home_score as u32;
                weak_goals += result.away_score as u32;
            } else {
                strong_goals += result.away_score as u32;
                weak_goals += result.home_score as u32;
            }
        }

        let strong_mean = strong_goals as f64 / 1000.0;
        let weak_mean = weak_goals as f64 / 1000.0;

        assert!(strong_mean > weak_mean + 1.0, "{} vs {}", strong_mean, weak_mean);
    }

    #[test]
    fn empty_squads_degrade_to_unknown() {
        let home = MatchSquad::empty(1, "Home", 99);
        let away = MatchSquad::empty(2, "Away", 99);
        let mut rng = StdRng::seed_from_u64(5);

        let mut saw_goal = false;

        for match_id in 0..100 {
            let result = MatchEngine::play(match_id, &home, &away, &mut rng);

            assert!(result.player_ratings.is_empty());
            assert!(result.player_statistics.is_empty());
            assert!(result.events.iter().all(|e| e.player_name == UNKNOWN_PLAYER));

            saw_goal |= result.home_score + result.away_score > 0;
        }

        assert!(saw_goal);
    }

    #[test]
    fn goalkeeper_only_squad_still_scores() {
        let mut home = MatchSquad::empty(1, "Home", 99);
        home.main_squad.push(player(100, PlayerPositionType::Goalkeeper, 70));

        let away = MatchSquad::empty(2, "Away", 1);
        let mut rng = StdRng::seed_from_u64(8);

        for match_id in 0..50 {
            let result = MatchEngine::play(match_id, &home, &away, &mut rng);

            for event in result.events.iter().filter(|e| e.is_goal() && e.side == MatchSide::Home) {
                assert_eq!(event.player_name, "Keeper 100");
                assert_eq!(event.assist_name, None);
            }
        }
    }

    #[test]
    fn scorer_bonus_is_applied_once() {
        let mut home = MatchSquad::empty(1, "Home", 100);
        home.main_squad.push(player(101, PlayerPositionType::Striker, 15));

        let away = MatchSquad::empty(2, "Away", 1);
        let mut rng = StdRng::seed_from_u64(21);

        let mut saw_brace = false;

        for match_id in 0..2000 {
            let result = MatchEngine::play(match_id, &home, &away, &mut rng);

            let goals = result.player_statistics.get(&101).map_or(0, |s| s.goals);
            let rating = result.player_ratings[&101];

            // 15 / 15 + 3.0 + 1.5 variance + 0.5 bonus
            assert!(rating <= 6.0, "rating {} with {} goals", rating, goals);

            saw_brace |= goals > 1;
        }

        assert!(saw_brace);
    }

    #[test]
    fn same_seed_same_result() {
        let home = squad(1, 70);
        let away = squad(2, 65);

        let first = MatchEngine::play(1, &home, &away, &mut StdRng::seed_from_u64(77));
        let second = MatchEngine::play(1, &home, &away, &mut StdRng::seed_from_u64(77));

        assert_eq!(first.home_score, second.home_score);
        assert_eq!(first.away_score, second.away_score);
        assert_eq!(first.events, second.events);
        assert_eq!(first.player_ratings, second.player_ratings);
    }

    // Goalkeeper ids end in 00
    fn squad(club_id: u32, rating: u8) -> MatchSquad {
        use PlayerPositionType::*;

        let positions = [
            Goalkeeper,
            DefenderLeft,
            DefenderCenter,
            DefenderCenter,
            DefenderRight,
            WingerLeft,
            MidfielderCenter,
            MidfielderCenter,
            WingerRight,
            Striker,
            Striker,
        ];

        let mut squad = MatchSquad::empty(club_id, &format!("Club {}", club_id), rating);

        squad.main_squad = positions
            .iter()
            .enumerate()
            .map(|(idx, &position)| player(club_id * 100 + idx as u32, position, rating))
            .collect();

        squad
    }

    fn player(id: u32, position: PlayerPositionType, overall: u8) -> MatchPlayer {
        let name = if position.is_goalkeeper() {
            format!("Keeper {}", id)
        } else {
            format!("Player {}", id)
        };

        MatchPlayer {
            id,
            name,
            position,
            overall,
        }
    }
}
