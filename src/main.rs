use chrono::NaiveDate;
use database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use season_core::utils::TimeEstimation;
use season_core::{DayResult, FootballSimulator, SimulationSettings};
use std::env;

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_SEED: u64 = 2024;
const DEFAULT_MAX_DAYS: u32 = 400;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let seed = env_or("SEED", DEFAULT_SEED);
    let max_days = env_or("DAYS", DEFAULT_MAX_DAYS);

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let start_date = NaiveDate::from_ymd_opt(2024, 7, 1)
        .ok_or_else(|| color_eyre::eyre::eyre!("invalid start date"))?;

    let mut rng = StdRng::seed_from_u64(seed);
    let data = DatabaseGenerator::generate(&database, start_date, &mut rng);

    let club_id = env_or("CLUB_ID", data.clubs.first().map(|c| c.id).unwrap_or(1));

    let mut simulator = FootballSimulator::new(data, SimulationSettings::default(), seed);

    let Some(report) = simulator.start_new_game(club_id) else {
        return Err(color_eyre::eyre::eyre!("club {} not found", club_id));
    };

    if let Some(cup) = &report.cup {
        if let Some(dropped) = cup.dropped_club_id {
            warn!("club {} dropped from the cup draw", dropped);
        }
    }

    let (_, estimated) = TimeEstimation::estimate(|| {
        while simulator.days_elapsed() < max_days && !simulator.is_season_complete() {
            if let DayResult::Blocked { match_id } = simulator.advance_day() {
                simulator.play_match(match_id);

                if let Some(fixture) = simulator.data().fixture(match_id) {
                    info!("⚽ {} {}: {}", fixture.date, fixture.match_type, fixture);
                }
            }
        }
    });

    info!(
        "season simulated to {} in {} days: {} ms",
        simulator.date(),
        simulator.days_elapsed(),
        estimated
    );

    for (position, row) in simulator.current_league_standings().iter().enumerate() {
        info!(
            "{:>2}. {:<24} {:>2} {:>2} {:>2} {:>2} {:>3}:{:<3} {:>3}",
            position + 1,
            row.club_name,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.goals_for,
            row.goals_against,
            row.points()
        );
    }

    Ok(())
}
