use crate::club::academy::result::ProduceYouthPlayersResult;
use crate::club::academy::settings::AcademySettings;
use crate::club::player::{PlayerGenerator, PlayerPositionType};
use crate::shared::{IdSequence, PeopleNameGeneratorData};
use crate::utils::IntegerUtils;
use chrono::NaiveDate;
use log::debug;
use rand::RngExt;

pub struct AcademyContext<'a> {
    pub club_id: u32,
    pub club_name: &'a str,
    pub club_rating: u8,
    pub squad_size: usize,
    pub date: NaiveDate,
    pub people_names: &'a PeopleNameGeneratorData,
}

#[derive(Debug, Clone)]
pub struct ClubAcademy {
    settings: AcademySettings,
    pub level: u8,
}

impl ClubAcademy {
    pub fn new(level: u8) -> Self {
        ClubAcademy {
            settings: AcademySettings::default(),
            level: level.clamp(1, 10),
        }
    }

    pub fn produce_youth_players<R: RngExt + ?Sized>(
        &self,
        ctx: AcademyContext<'_>,
        ids: &mut IdSequence,
        rng: &mut R,
    ) -> ProduceYouthPlayersResult {
        let space_available = self.settings.max_squad_size.saturating_sub(ctx.squad_size);
        let players_to_produce = self.calculate_intake(rng).min(space_available);

        if players_to_produce == 0 {
            debug!("ℹ️ academy: {} at full capacity, no new players produced", ctx.club_name);
            return ProduceYouthPlayersResult::empty(ctx.club_id);
        }

        let generator = PlayerGenerator::with_people_names(ctx.people_names);

        // Academy quality lifts prospects towards the club's level
        let prospect_level = (ctx.club_rating as i32 - 30 + self.level as i32 * 3).clamp(10, 90) as u8;

        let players = (0..players_to_produce)
            .map(|index| {
                let position = self.select_position_for_youth_player(index, players_to_produce, rng);

                let player = generator.generate(
                    rng,
                    ids.next_id(),
                    ctx.date,
                    position,
                    prospect_level,
                    *self.settings.youth_age_range.start(),
                    *self.settings.youth_age_range.end(),
                    Some(ctx.club_id),
                );

                debug!(
                    "👤 academy: {} generated youth player: {} ({}, age {})",
                    ctx.club_name,
                    player.full_name,
                    position.get_short_name(),
                    player.age(ctx.date)
                );

                player
            })
            .collect();

        ProduceYouthPlayersResult::new(ctx.club_id, players)
    }

    fn calculate_intake<R: RngExt + ?Sized>(&self, rng: &mut R) -> usize {
        // Level 1-3: poor academy, 7-10: good academy
        let (min_intake, max_intake) = match self.level {
            1..=3 => (0, 1),
            4..=6 => (1, 2),
            _ => (1, 3),
        };

        IntegerUtils::random(rng, min_intake, max_intake) as usize
    }

    fn select_position_for_youth_player<R: RngExt + ?Sized>(
        &self,
        index: usize,
        total_players: usize,
        rng: &mut R,
    ) -> PlayerPositionType {
        if total_players >= 3 && index == 0 {
            return PlayerPositionType::Goalkeeper;
        }

        match IntegerUtils::random(rng, 0, 100) {
            0..=7 => PlayerPositionType::Goalkeeper,
            8..=35 => match IntegerUtils::random(rng, 0, 2) {
                0 => PlayerPositionType::DefenderLeft,
                1 => PlayerPositionType::DefenderRight,
                _ => PlayerPositionType::DefenderCenter,
            },
            36..=70 => match IntegerUtils::random(rng, 0, 2) {
                0 => PlayerPositionType::DefensiveMidfielder,
                1 => PlayerPositionType::AttackingMidfielder,
                _ => PlayerPositionType::MidfielderCenter,
            },
            _ => match IntegerUtils::random(rng, 0, 2) {
                0 => PlayerPositionType::WingerLeft,
                1 => PlayerPositionType::WingerRight,
                _ => PlayerPositionType::Striker,
            },
        }
    }
}
