use chrono::{Datelike, Duration, Months, NaiveDate};

pub struct DateUtils;

impl DateUtils {
    pub fn age(birthdate: NaiveDate, now: NaiveDate) -> u8 {
        let mut age = now.year() - birthdate.year();

        if (now.month(), now.day()) < (birthdate.month(), birthdate.day()) {
            age -= 1;
        }

        age.clamp(0, u8::MAX as i32) as u8
    }

    pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
        date + Duration::days(days)
    }

    /// Same day of the next `months` month(s), clamped to the month end.
    pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
        date.checked_add_months(Months::new(months))
            .unwrap_or(date + Duration::days(30 * months as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_before_and_after_birthday() {
        let birth = NaiveDate::from_ymd_opt(2000, 8, 15).unwrap();

        assert_eq!(DateUtils::age(birth, NaiveDate::from_ymd_opt(2024, 8, 14).unwrap()), 23);
        assert_eq!(DateUtils::age(birth, NaiveDate::from_ymd_opt(2024, 8, 15).unwrap()), 24);
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        assert_eq!(DateUtils::add_months(date, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
