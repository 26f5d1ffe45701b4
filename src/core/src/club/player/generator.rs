use crate::club::player::{PlayerPositionType, PlayerSkills};
use crate::shared::{FullName, PeopleNameGeneratorData};
use crate::utils::IntegerUtils;
use crate::Player;
use chrono::{Datelike, NaiveDate};
use rand::RngExt;

pub struct PlayerGenerator<'n> {
    people_names: &'n PeopleNameGeneratorData,
}

impl<'n> PlayerGenerator<'n> {
    pub fn with_people_names(people_names: &'n PeopleNameGeneratorData) -> Self {
        PlayerGenerator { people_names }
    }

    /// Generate a player whose ability scales with `level` (a club rating, 1-100).
    #[allow(clippy::too_many_arguments)]
    pub fn generate<R: RngExt + ?Sized>(
        &self,
        rng: &mut R,
        id: u32,
        now: NaiveDate,
        position: PlayerPositionType,
        level: u8,
        min_age: i32,
        max_age: i32,
        club_id: Option<u32>,
    ) -> Player {
        let level = level.clamp(1, 100) as i32;

        let year = IntegerUtils::random(rng, now.year() - max_age, now.year() - min_age);
        let month = IntegerUtils::random(rng, 1, 12) as u32;
        let day = IntegerUtils::random(rng, 1, 28) as u32;
        let birth_date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(now);

        let age = now.year() - year;

        // Young players start further away from their level
        let youth_penalty = (21 - age).max(0) * 4;
        let overall = IntegerUtils::random(rng, level - 12, level + 6) - youth_penalty;
        let overall = overall.clamp(20, 95) as u8;

        let growth_room = if age < 24 {
            IntegerUtils::random(rng, 5, 25)
        } else {
            IntegerUtils::random(rng, 0, 4)
        };
        let potential_peak = (overall as i32 + growth_room).min(99) as u8;

        let physical = IntegerUtils::random(rng, overall as i32 - 10, overall as i32 + 10)
            .clamp(1, 99) as u8;

        let wage = (level * level * IntegerUtils::random(rng, 8, 15)) as u32;

        Player::builder()
            .id(id)
            .full_name(FullName::new(
                self.people_names.first_name(rng),
                self.people_names.last_name(rng),
            ))
            .birth_date(birth_date)
            .position(position)
            .skills(PlayerSkills::for_group(overall, physical, position.position_group()))
            .potential_peak(potential_peak)
            .club_id(club_id)
            .wage(if club_id.is_some() { wage } else { 0 })
            .contract_years(if club_id.is_some() { IntegerUtils::random(rng, 1, 5) as u8 } else { 0 })
            .morale(IntegerUtils::random(rng, 40, 80) as u8)
            .build()
            .expect("Failed to build Player")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generated_player_respects_age_range() {
        let names = PeopleNameGeneratorData::default();
        let generator = PlayerGenerator::with_people_names(&names);
        let mut rng = StdRng::seed_from_u64(3);
        let now = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        for id in 0..50 {
            let player = generator.generate(
                &mut rng, id, now, PlayerPositionType::Striker, 70, 16, 17, Some(1),
            );

            let age = player.age(now);
            assert!((15..=17).contains(&age), "age {}", age);
            assert!(player.potential_peak >= player.skills.overall);
            assert_eq!(player.club_id, Some(1));
        }
    }

    #[test]
    fn stronger_level_gives_stronger_players() {
        let names = PeopleNameGeneratorData::new(vec!["Ivan".to_string()], vec!["Petrov".to_string()]);
        let generator = PlayerGenerator::with_people_names(&names);
        let mut rng = StdRng::seed_from_u64(11);
        let now = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let average = |rng: &mut StdRng, level: u8| -> f32 {
            let total: u32 = (0..200)
                .map(|id| {
                    generator
                        .generate(rng, id, now, PlayerPositionType::MidfielderCenter, level, 24, 30, None)
                        .skills
                        .overall as u32
                })
                .sum();
            total as f32 / 200.0
        };

        let strong = average(&mut rng, 85);
        let weak = average(&mut rng, 40);

        assert!(strong > weak + 20.0);
    }

    #[test]
    fn free_agents_have_no_contract() {
        let names = PeopleNameGeneratorData::default();
        let generator = PlayerGenerator::with_people_names(&names);
        let mut rng = StdRng::seed_from_u64(5);
        let now = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let player = generator.generate(&mut rng, 1, now, PlayerPositionType::Goalkeeper, 50, 20, 30, None);

        assert!(player.is_free_agent());
        assert_eq!(player.wage, 0);
        assert_eq!(player.contract_years, 0);
    }
}
