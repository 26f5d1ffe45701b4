use crate::club::Club;
use crate::league::League;
use crate::league::schedule::{CupDraw, FriendlyScheduler, RoundRobin, ScheduleSettings};
use crate::r#match::{Match, MatchType};
use crate::shared::IdSequence;
use crate::utils::DateUtils;
use chrono::NaiveDate;
use log::{debug, info, warn};
use rand::RngExt;
use std::collections::HashMap;

pub struct ScheduleContext<'a> {
    pub leagues: &'a [League],
    pub clubs: &'a [Club],
    pub managed_club_id: u32,
    pub today: NaiveDate,
}

/// Diagnostics collected while building a season. Informational only.
#[derive(Debug, Clone, Default)]
pub struct ScheduleReport {
    pub skipped_leagues: Vec<u32>,
    pub dropped_byes: usize,
    pub cup: Option<CupDraw>,
    pub cup_date: Option<NaiveDate>,
    pub matchday_dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub fixtures: Vec<Match>,
    pub report: ScheduleReport,
}

pub struct FixtureScheduler {
    settings: ScheduleSettings,
}

impl FixtureScheduler {
    pub fn new(settings: ScheduleSettings) -> Self {
        FixtureScheduler { settings }
    }

    pub fn generate<R: RngExt + ?Sized>(
        &self,
        ctx: &ScheduleContext<'_>,
        ids: &mut IdSequence,
        rng: &mut R,
    ) -> Schedule {
        let mut report = ScheduleReport::default();

        let club_names: HashMap<u32, &str> = ctx
            .clubs
            .iter()
            .map(|club| (club.id, club.name.as_str()))
            .collect();

        let mut league_rounds = Vec::with_capacity(ctx.leagues.len());

        for league in ctx.leagues {
            let club_ids: Vec<u32> = ctx
                .clubs
                .iter()
                .filter(|club| club.league_id == league.id)
                .map(|club| club.id)
                .collect();

            match RoundRobin::generate(&club_ids, rng) {
                Some(round_robin) => {
                    report.dropped_byes += round_robin.dropped_byes;
                    league_rounds.push((league.id, round_robin.rounds));
                }
                None => {
                    warn!("league {} has {} clubs, skipped", league.name, club_ids.len());
                    report.skipped_leagues.push(league.id);
                }
            }
        }

        let managed_club = ctx.clubs.iter().find(|club| club.id == ctx.managed_club_id);

        let cup = managed_club
            .and_then(|club| ctx.leagues.iter().find(|league| league.id == club.league_id))
            .and_then(|league| {
                let club_ids: Vec<u32> = ctx
                    .clubs
                    .iter()
                    .filter(|club| club.league_id == league.id)
                    .map(|club| club.id)
                    .collect();

                CupDraw::draw(league, &club_ids, ctx.managed_club_id, self.settings.cup_size, rng)
            });

        let mut fixtures = Vec::new();

        let mut create_match = |home: u32, away: u32, match_type: MatchType, date: NaiveDate| {
            let home_name = club_names.get(&home).copied().unwrap_or("Unknown");
            let away_name = club_names.get(&away).copied().unwrap_or("Unknown");

            Match::new(ids.next_id(), (home, home_name), (away, away_name), match_type, date)
        };

        let rounds_count = league_rounds
            .iter()
            .map(|(_, rounds)| rounds.len())
            .max()
            .unwrap_or(0);

        let mut date = DateUtils::add_months(ctx.today, self.settings.season_start_offset_months);
        let mut cup_pending = cup.is_some();

        for round_index in 0..rounds_count {
            let matchday = round_index + 1;

            for (league_id, rounds) in &league_rounds {
                if let Some(pairings) = rounds.get(round_index) {
                    for &(home, away) in pairings {
                        fixtures.push(
                            create_match(home, away, MatchType::League, date)
                                .with_league(*league_id, matchday as u8),
                        );
                    }
                }
            }

            report.matchday_dates.push(date);

            // Late insertion when the season is shorter than the configured cup slot
            let cup_slot = matchday == self.settings.cup_after_matchday || matchday == rounds_count;

            if cup_pending && cup_slot {
                let cup_date = DateUtils::add_days(date, self.settings.cup_days_after_matchday);

                if let Some(draw) = &cup {
                    for &(home, away) in &draw.ties {
                        fixtures.push(create_match(home, away, MatchType::NationalCup, cup_date));
                    }
                }

                report.cup_date = Some(cup_date);
                cup_pending = false;

                date = DateUtils::add_days(cup_date, self.settings.cup_days_before_next_matchday);
            } else {
                let gap = rng.random_range(self.settings.matchday_gap_days.clone());
                date = DateUtils::add_days(date, gap);
            }
        }

        if cup_pending {
            if let Some(draw) = &cup {
                for &(home, away) in &draw.ties {
                    fixtures.push(create_match(home, away, MatchType::NationalCup, date));
                }

                report.cup_date = Some(date);
            }
        }

        if let Some(managed_club) = managed_club {
            fixtures.extend(FriendlyScheduler::generate(
                managed_club,
                ctx.clubs,
                ctx.today,
                self.settings.friendlies_count,
                self.settings.friendly_interval_days,
                ids,
                rng,
            ));
        }

        fixtures.sort_by_key(|m| m.date);

        info!(
            "⚽ season scheduled: {} fixtures, {} matchdays, {} leagues skipped",
            fixtures.len(),
            rounds_count,
            report.skipped_leagues.len()
        );

        if let Some(cup_date) = report.cup_date {
            debug!("cup round on {}", cup_date);
        }

        report.cup = cup;

        Schedule { fixtures, report }
    }
}
