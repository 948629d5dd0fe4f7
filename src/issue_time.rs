//! Resolution of the most recent KMA forecast issue that is safe to request.
//!
//! KMA publishes a short-term forecast batch eight times a day. A batch only
//! becomes reliably available a few minutes after its nominal issue time, so
//! a request made inside that window has to fall back to the previous batch.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Daily issue hours, ascending
pub const ISSUE_HOURS: [u32; 8] = [2, 5, 8, 11, 14, 17, 20, 23];

/// Minutes after an issue hour before its batch can be requested
pub const PUBLICATION_LAG_MINUTES: u32 = 10;

/// A forecast batch, identified the way the API expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueTime {
    pub date: NaiveDate,
    pub hour: u32,
}

impl IssueTime {
    /// `base_date` query value, `YYYYMMDD`
    pub fn base_date(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }

    /// `base_time` query value, `HHMM`
    pub fn base_time(&self) -> String {
        format!("{:02}00", self.hour)
    }
}

impl fmt::Display for IssueTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.base_date(), self.base_time())
    }
}

/// Returns the latest issue published (lag included) at `now`.
///
/// Before 02:10 no batch of the current day is available yet and the last
/// batch of the previous day is used.
pub fn resolve_issue_time(now: NaiveDateTime) -> IssueTime {
    let today = now.date();
    let last_hour = ISSUE_HOURS[ISSUE_HOURS.len() - 1];
    let previous_day_last = IssueTime {
        date: today.pred_opt().unwrap_or(today),
        hour: last_hour,
    };

    if now.hour() < ISSUE_HOURS[0] {
        return previous_day_last;
    }

    let pending = ISSUE_HOURS
        .iter()
        .position(|&issue_hour| !is_published(issue_hour, now.hour(), now.minute()));

    match pending {
        Some(0) => previous_day_last,
        Some(i) => IssueTime {
            date: today,
            hour: ISSUE_HOURS[i - 1],
        },
        None => IssueTime {
            date: today,
            hour: last_hour,
        },
    }
}

fn is_published(issue_hour: u32, hour: u32, minute: u32) -> bool {
    hour > issue_hour || (hour == issue_hour && minute >= PUBLICATION_LAG_MINUTES)
}
