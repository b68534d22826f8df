use super::*;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub const WINDOW_DAYS: i64 = 7;
pub const UPCOMING_DATE_FORMAT: &str = "%Y.%m.%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
    pub days_away: i64,
}

impl UpcomingBirthday {
    /// The occurrence as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.date.format(UPCOMING_DATE_FORMAT).to_string()
    }
}

/// Day offset from `today` to the birthday's occurrence in `today`'s year.
///
/// Only the current year is considered, so a birthday earlier in the year
/// gives a negative offset. `None` when the month/day does not exist that year
/// (29 February outside leap years).
pub fn days_until(birthday: Birthday, today: NaiveDate) -> Option<(NaiveDate, i64)> {
    let born = birthday.date();
    let occurrence = NaiveDate::from_ymd_opt(today.year(), born.month(), born.day())?;
    let offset = i64::from(occurrence.num_days_from_ce()) - i64::from(today.num_days_from_ce());
    Some((occurrence, offset))
}

impl ContactManager {
    /// Records whose birthday falls 0 to 7 days after `today`, in store order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.contact_list()
            .iter()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;
                let Some((date, days_away)) = days_until(birthday, today) else {
                    debug!(name = contact.name(), "birthday has no occurrence this year");
                    return None;
                };

                (0..=WINDOW_DAYS).contains(&days_away).then(|| UpcomingBirthday {
                    name: contact.name().to_string(),
                    date,
                    days_away,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    fn manager_with(birthdays: &[(&str, &str)]) -> Result<ContactManager, AppError> {
        let mut manager = ContactManager::new();
        for (name, birthday) in birthdays {
            let mut contact = Contact::new(*name);
            contact.add_birthday(Birthday::parse(birthday)?);
            manager.add_contact(contact);
        }
        Ok(manager)
    }

    #[test]
    fn birthday_five_days_ahead_is_upcoming() -> Result<(), AppError> {
        let manager = manager_with(&[("Bob", "15.06.1990")])?;

        let upcoming = manager.upcoming_birthdays(date(2024, 6, 10));

        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Bob");
        assert_eq!(upcoming[0].formatted_date(), "2024.06.15");
        assert_eq!(upcoming[0].days_away, 5);
        Ok(())
    }

    #[test]
    fn january_birthday_is_excluded_in_june() -> Result<(), AppError> {
        let manager = manager_with(&[("Cid", "01.01.1990")])?;

        assert!(manager.upcoming_birthdays(date(2024, 6, 10)).is_empty());
        Ok(())
    }

    #[test]
    fn window_bounds_are_inclusive() -> Result<(), AppError> {
        let manager = manager_with(&[
            ("Today", "10.06.1980"),
            ("Seven", "17.06.1980"),
            ("Eight", "18.06.1980"),
            ("Yesterday", "09.06.1980"),
        ])?;

        let names: Vec<String> = manager
            .upcoming_birthdays(date(2024, 6, 10))
            .into_iter()
            .map(|b| b.name)
            .collect();

        assert_eq!(names, vec!["Today", "Seven"]);
        Ok(())
    }

    #[test]
    fn late_december_does_not_wrap_into_january() -> Result<(), AppError> {
        let manager = manager_with(&[("Jan", "01.01.1990")])?;

        assert_eq!(
            days_until(Birthday::parse("01.01.1990")?, date(2024, 12, 31)),
            Some((date(2024, 1, 1), -365))
        );
        assert!(manager.upcoming_birthdays(date(2024, 12, 31)).is_empty());
        Ok(())
    }

    #[test]
    fn leap_day_birthday_is_skipped_in_common_years() -> Result<(), AppError> {
        let manager = manager_with(&[("Leap", "29.02.2000")])?;

        assert!(manager.upcoming_birthdays(date(2023, 2, 25)).is_empty());

        let leap_year = manager.upcoming_birthdays(date(2024, 2, 25));
        assert_eq!(leap_year.len(), 1);
        assert_eq!(leap_year[0].formatted_date(), "2024.02.29");
        Ok(())
    }

    #[test]
    fn records_without_birthday_are_ignored() -> Result<(), AppError> {
        let mut manager = manager_with(&[("Bob", "12.06.1990")])?;
        manager.add_contact(Contact::new("NoDate"));

        let upcoming = manager.upcoming_birthdays(date(2024, 6, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Bob");
        Ok(())
    }
}
