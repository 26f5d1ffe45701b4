use crate::club::{AcademyContext, InjuryType, PlayerTraining};
use crate::simulator::SimulatorData;
use log::{debug, info};
use rand::RngExt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjuryProcessingResult {
    pub recovered: Vec<u32>,
    pub injured: Vec<u32>,
}

pub struct InjuryProcessor;

impl InjuryProcessor {
    /// One week of recovery for the injured, a fresh roll for everyone else
    /// under contract.
    pub fn process<R: RngExt + ?Sized>(
        data: &mut SimulatorData,
        injury_chance: f64,
        rng: &mut R,
    ) -> InjuryProcessingResult {
        let mut result = InjuryProcessingResult::default();
        let now = data.date;

        for player in data.players.iter_mut() {
            if player.injury.is_injured {
                if player.injury.recover_week() {
                    debug!("👤 {} recovered from injury", player.full_name);
                    result.recovered.push(player.id);
                }
            } else if !player.is_free_agent() && rng.random_bool(injury_chance) {
                let injury_type = InjuryType::random_injury(rng, player.age(now));
                let weeks = injury_type.random_duration(rng);

                player.injury.set(injury_type, weeks);

                debug!(
                    "👤 {} injured: {} ({} weeks)",
                    player.full_name, injury_type, weeks
                );

                result.injured.push(player.id);
            }
        }

        result
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingResult {
    pub improved: usize,
    pub declined: usize,
}

pub struct TrainingProcessor;

impl TrainingProcessor {
    pub fn process<R: RngExt + ?Sized>(data: &mut SimulatorData, rng: &mut R) -> TrainingResult {
        let mut result = TrainingResult::default();
        let now = data.date;

        for player in data.players.iter_mut().filter(|p| !p.is_free_agent()) {
            match PlayerTraining::train(player, now, rng) {
                delta if delta > 0 => result.improved += 1,
                delta if delta < 0 => result.declined += 1,
                _ => {}
            }
        }

        debug!(
            "training: {} players improved, {} declined",
            result.improved, result.declined
        );

        result
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YouthIntakeResult {
    pub players: Vec<u32>,
}

pub struct YouthIntakeProcessor;

impl YouthIntakeProcessor {
    pub fn process<R: RngExt + ?Sized>(data: &mut SimulatorData, rng: &mut R) -> YouthIntakeResult {
        let mut new_players = Vec::new();

        for club in &data.clubs {
            let squad_size = data.players.iter().filter(|p| p.plays_for(club.id)).count();

            let ctx = AcademyContext {
                club_id: club.id,
                club_name: &club.name,
                club_rating: club.rating,
                squad_size,
                date: data.date,
                people_names: &data.people_names,
            };

            let produced = club
                .academy
                .produce_youth_players(ctx, &mut data.player_ids, rng);

            new_players.extend(produced.players);
        }

        let result = YouthIntakeResult {
            players: new_players.iter().map(|p| p.id).collect(),
        };

        info!("youth intake: {} players joined their clubs", new_players.len());

        data.add_players(new_players);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Club, ClubAcademy, ClubFinances, Player, PlayerPositionType, PlayerSkills};
    use crate::league::LeagueCollection;
    use crate::shared::{FullName, PeopleNameGeneratorData};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn injured_players_recover_week_by_week() {
        let mut data = data();
        data.players[0].injury.set(InjuryType::HamstringStrain, 2);

        let mut rng = StdRng::seed_from_u64(1);

        let first = InjuryProcessor::process(&mut data, 0.0, &mut rng);
        assert!(first.recovered.is_empty());
        assert_eq!(data.players[0].injury.weeks_left, 1);

        let second = InjuryProcessor::process(&mut data, 0.0, &mut rng);
        assert_eq!(second.recovered, vec![data.players[0].id]);
        assert!(!data.players[0].injury.is_injured);
    }

    #[test]
    fn certain_injury_spares_free_agents() {
        let mut data = data();
        let mut rng = StdRng::seed_from_u64(1);

        let result = InjuryProcessor::process(&mut data, 1.0, &mut rng);

        assert_eq!(result.injured.len(), 2);
        assert!(data.players[2].is_free_agent());
        assert!(!data.players[2].injury.is_injured);
        assert!(data.players[0].injury.weeks_left >= 1);
    }

    #[test]
    fn training_skips_free_agents() {
        let mut data = data();
        let before = data.players[2].skills;
        let mut rng = StdRng::seed_from_u64(1);

        let result = TrainingProcessor::process(&mut data, &mut rng);

        // Both affiliated players are 19 with room to grow
        assert_eq!(result.improved, 2);
        assert_eq!(data.players[2].skills, before);
    }

    #[test]
    fn youth_intake_joins_club() {
        let mut data = data();
        let before = data.players.len();
        let mut rng = StdRng::seed_from_u64(4);

        let result = YouthIntakeProcessor::process(&mut data, &mut rng);

        // Level 10 academy always produces at least one player
        assert!(!result.players.is_empty());
        assert_eq!(data.players.len(), before + result.players.len());

        for id in &result.players {
            let player = data.player(*id).unwrap();
            assert_eq!(player.club_id, Some(1));
            assert!(player.age(data.date) <= 17);
        }
    }

    fn data() -> SimulatorData {
        let club = Club::new(
            1,
            "Academy FC".to_string(),
            1,
            60,
            "4-4-2".to_string(),
            ClubFinances::new(0, 0, 0),
            ClubAcademy::new(10),
        );

        let players = vec![player(1, Some(1)), player(2, Some(1)), player(3, None)];

        SimulatorData::new(
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            LeagueCollection::default(),
            vec![club],
            players,
            PeopleNameGeneratorData::new(vec!["John".to_string()], vec!["Smith".to_string()]),
        )
    }

    fn player(id: u32, club_id: Option<u32>) -> Player {
        Player::builder()
            .id(id)
            .full_name(FullName::new("Test".to_string(), format!("Player{}", id)))
            .birth_date(NaiveDate::from_ymd_opt(2005, 1, 1).unwrap())
            .position(PlayerPositionType::Striker)
            .skills(PlayerSkills::new(50, 50, 50, 50))
            .potential_peak(80)
            .club_id(club_id)
            .build()
            .unwrap()
    }
}
