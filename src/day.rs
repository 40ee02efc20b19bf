//! Weekday tags, used both to scope a listing and as a task attribute

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};

/// One of the seven weekday tags understood by the remote store.
///
/// On the wire, a day is its lowercase 3-letter English abbreviation (`"mon"`, `"tue"`...)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// The seven tags, in week order
    pub fn all() -> [Day; 7] {
        [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri, Day::Sat, Day::Sun]
    }

    /// The tag of the current local date
    pub fn today() -> Self {
        Self::from(Local::now().weekday())
    }

    /// The tag as sent to the remote store
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        }
    }
}

impl Default for Day {
    fn default() -> Self {
        Day::Mon
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    /// Accepts the wire tags as well as full English day names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Day::all()
            .iter()
            .find(|day| lower == day.as_str() || lower == full_name(**day))
            .copied()
            .ok_or_else(|| format!("Unknown day tag {:?}", s))
    }
}

fn full_name(day: Day) -> &'static str {
    match day {
        Day::Mon => "monday",
        Day::Tue => "tuesday",
        Day::Wed => "wednesday",
        Day::Thu => "thursday",
        Day::Fri => "friday",
        Day::Sat => "saturday",
        Day::Sun => "sunday",
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Mon,
            Weekday::Tue => Day::Tue,
            Weekday::Wed => Day::Wed,
            Weekday::Thu => Day::Thu,
            Weekday::Fri => Day::Fri,
            Weekday::Sat => Day::Sat,
            Weekday::Sun => Day::Sun,
        }
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Mon => Weekday::Mon,
            Day::Tue => Weekday::Tue,
            Day::Wed => Weekday::Wed,
            Day::Thu => Weekday::Thu,
            Day::Fri => Weekday::Fri,
            Day::Sat => Weekday::Sat,
            Day::Sun => Weekday::Sun,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_days() {
        assert_eq!("tue".parse::<Day>().unwrap(), Day::Tue);
        assert_eq!("SUN".parse::<Day>().unwrap(), Day::Sun);
        assert_eq!("Wednesday".parse::<Day>().unwrap(), Day::Wed);
        assert!("pzt".parse::<Day>().is_err());
        assert!("".parse::<Day>().is_err());
    }

    #[test]
    fn wire_format() {
        assert_eq!(serde_json::to_string(&Day::Thu).unwrap(), "\"thu\"");
        let day: Day = serde_json::from_str("\"sat\"").unwrap();
        assert_eq!(day, Day::Sat);
        assert!(serde_json::from_str::<Day>("\"Saturday\"").is_err());
    }

    #[test]
    fn today_is_a_weekday() {
        let today = Day::today();
        assert!(Day::all().contains(&today));
        assert_eq!(Weekday::from(today), Local::now().weekday());
    }

    #[test]
    fn week_order() {
        let all = Day::all();
        assert_eq!(all[0], Day::default());
        assert_eq!(all.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
                   vec!["mon", "tue", "wed", "thu", "fri", "sat", "sun"]);
        for day in all.iter() {
            assert_eq!(Day::from(Weekday::from(*day)), *day);
        }
    }
}
