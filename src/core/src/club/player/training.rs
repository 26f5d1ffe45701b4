use crate::Player;
use chrono::NaiveDate;
use rand::RngExt;

pub struct PlayerTraining;

impl PlayerTraining {
    /// Apply one training cycle. Returns the change in overall.
    pub fn train<R: RngExt + ?Sized>(player: &mut Player, now: NaiveDate, rng: &mut R) -> i16 {
        if player.injury.is_injured {
            return 0;
        }

        let age = player.age(now);
        let room = player.potential_peak as i16 - player.skills.overall as i16;

        let delta: i16 = match age {
            0..=23 if room > 0 => rng.random_range(1..=3).min(room),
            24..=29 if room > 0 => rng.random_range(0..=1),
            30..=32 => rng.random_range(-1..=0),
            33.. => rng.random_range(-2..=-1),
            _ => 0,
        };

        if delta != 0 {
            player.skills.apply_change(delta);
        }

        if age >= 30 && player.skills.physical > 1 {
            player.skills.physical -= 1;
        }

        delta
    }
}
