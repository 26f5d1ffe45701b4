use crate::generators::SquadGenerator;
use crate::{ClubEntity, DatabaseEntity, LeagueEntity};
use chrono::NaiveDate;
use log::info;
use rand::RngExt;
use season_core::club::academy::ClubAcademy;
use season_core::league::{League, LeagueCollection};
use season_core::shared::{IdSequence, PeopleNameGeneratorData};
use season_core::{Club, ClubFinances, PlayerGenerator, SimulatorData};

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate<R: RngExt + ?Sized>(
        data: &DatabaseEntity,
        start_date: NaiveDate,
        rng: &mut R,
    ) -> SimulatorData {
        let people_names = PeopleNameGeneratorData::new(
            data.names.first_names.clone(),
            data.names.last_names.clone(),
        );

        let leagues = LeagueCollection::new(
            data.leagues.iter().map(DatabaseGenerator::generate_league).collect(),
        );

        let clubs: Vec<Club> = data
            .clubs
            .iter()
            .map(|club| DatabaseGenerator::generate_club(club, &leagues))
            .collect();

        let player_generator = PlayerGenerator::with_people_names(&people_names);
        let squad_generator = SquadGenerator::new(&player_generator);

        let mut ids = IdSequence::default();

        let players = clubs
            .iter()
            .flat_map(|club| squad_generator.generate(club.id, club.rating, start_date, &mut ids, rng))
            .collect::<Vec<_>>();

        info!(
            "database generated: {} leagues, {} clubs, {} players",
            leagues.len(),
            clubs.len(),
            players.len()
        );

        SimulatorData::new(start_date, leagues, clubs, players, people_names)
    }

    fn generate_league(league: &LeagueEntity) -> League {
        League::new(
            league.id,
            league.name.clone(),
            league.slug.clone(),
            league.country.clone(),
            league.tier,
        )
        .with_max_rating(league.max_rating)
        .with_national_cup(league.has_national_cup)
        .with_movement(league.promotion_slots, league.relegation_slots)
    }

    fn generate_club(club: &ClubEntity, leagues: &LeagueCollection) -> Club {
        // Division ceiling caps the rating
        let rating = leagues
            .get(club.league_id)
            .map(|league| club.rating.min(league.max_rating))
            .unwrap_or(club.rating);

        Club::new(
            club.id,
            club.name.clone(),
            club.league_id,
            rating,
            club.formation.clone(),
            ClubFinances::new(
                club.finance.balance,
                club.finance.wage_budget,
                club.finance.transfer_budget,
            ),
            ClubAcademy::new(club.academy_level),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generates_full_squads_for_every_club() {
        let database = DatabaseLoader::load().unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let data = DatabaseGenerator::generate(&database, start_date(), &mut rng);

        assert_eq!(data.clubs.len(), database.clubs.len());
        assert_eq!(data.leagues.len(), database.leagues.len());

        for club in &data.clubs {
            let squad = data.club_players(club.id);

            assert_eq!(squad.len(), SquadGenerator::squad_size());
            assert!(squad.iter().filter(|p| p.position.is_goalkeeper()).count() >= 2);
        }

        assert_eq!(data.free_agents().count(), 0);
    }

    #[test]
    fn player_ids_are_unique() {
        let database = DatabaseLoader::load().unwrap();
        let mut rng = StdRng::seed_from_u64(2);

        let data = DatabaseGenerator::generate(&database, start_date(), &mut rng);

        let mut ids: Vec<u32> = data.players.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), data.players.len());
    }

    #[test]
    fn stronger_clubs_get_stronger_players() {
        let database = DatabaseLoader::load().unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let data = DatabaseGenerator::generate(&database, start_date(), &mut rng);

        let average = |club_id: u32| {
            let squad = data.club_players(club_id);
            squad.iter().map(|p| p.skills.overall as f32).sum::<f32>() / squad.len() as f32
        };

        let strongest = data.clubs.iter().max_by_key(|c| c.rating).unwrap();
        let weakest = data.clubs.iter().min_by_key(|c| c.rating).unwrap();

        assert!(average(strongest.id) > average(weakest.id));
    }

    #[test]
    fn ratings_respect_league_ceiling() {
        let database = DatabaseLoader::load().unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let data = DatabaseGenerator::generate(&database, start_date(), &mut rng);

        for club in &data.clubs {
            let league = data.leagues.get(club.league_id).unwrap();
            assert!(club.rating <= league.max_rating);
        }
    }

    fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()
    }
}
