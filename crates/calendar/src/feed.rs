//! Contribution feed parsing.
//!
//! The input document is the GitHub GraphQL contribution calendar shape:
//! `data.user.contributionsCollection.contributionCalendar.weeks[]`, each
//! week holding `contributionDays[] { date, contributionCount }`. The core
//! only needs the flat sequence of `{date, count}` pairs; everything else in
//! the document is ignored.
//!
//! Parsing fails fast: one unparseable date, a negative count, or a
//! duplicate date aborts the whole load with [`CalendarError::MalformedRecord`].

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CalendarError;

/// One day of activity, immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Deserialize)]
struct FeedDocument {
    data: FeedData,
}

#[derive(Deserialize)]
struct FeedData {
    user: FeedUser,
}

#[derive(Deserialize)]
struct FeedUser {
    #[serde(rename = "contributionsCollection")]
    contributions_collection: ContributionsCollection,
}

#[derive(Deserialize)]
struct ContributionsCollection {
    #[serde(rename = "contributionCalendar")]
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
struct ContributionCalendar {
    weeks: Vec<FeedWeek>,
}

#[derive(Deserialize)]
struct FeedWeek {
    #[serde(rename = "contributionDays")]
    contribution_days: Vec<FeedDay>,
}

#[derive(Deserialize)]
struct FeedDay {
    date: String,
    // Deserialized signed so a negative count is our error, not serde's.
    #[serde(rename = "contributionCount")]
    contribution_count: i64,
}

/// Parses the feed document and flattens it to day records.
///
/// The returned order is the document order (week by week); callers that
/// need a deterministic layout re-bucket and sort via
/// [`crate::months::bucket_by_month`].
pub fn parse_feed(text: &str) -> Result<Vec<DayRecord>, CalendarError> {
    let doc: FeedDocument = serde_json::from_str(text)
        .map_err(|e| CalendarError::MalformedRecord(format!("invalid feed document: {e}")))?;

    let weeks = doc
        .data
        .user
        .contributions_collection
        .contribution_calendar
        .weeks;

    let mut seen = HashSet::new();
    let mut days = Vec::new();
    for week in weeks {
        for day in week.contribution_days {
            let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").map_err(|e| {
                CalendarError::MalformedRecord(format!("unparseable date {:?}: {e}", day.date))
            })?;
            if day.contribution_count < 0 {
                return Err(CalendarError::MalformedRecord(format!(
                    "negative count {} on {date}",
                    day.contribution_count
                )));
            }
            if !seen.insert(date) {
                return Err(CalendarError::MalformedRecord(format!(
                    "duplicate date {date}"
                )));
            }
            days.push(DayRecord {
                date,
                count: day.contribution_count as u32,
            });
        }
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(weeks_json: &str) -> String {
        format!(
            r#"{{"data":{{"user":{{"contributionsCollection":{{"contributionCalendar":{{"weeks":{weeks_json}}}}}}}}}}}"#
        )
    }

    #[test]
    fn test_parse_flattens_weeks() {
        let text = wrap(
            r#"[
                {"contributionDays":[
                    {"date":"2024-03-01","contributionCount":45},
                    {"date":"2024-03-02","contributionCount":0}
                ]},
                {"contributionDays":[
                    {"date":"2024-03-03","contributionCount":7}
                ]}
            ]"#,
        );
        let days = parse_feed(&text).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(
            days[0].date,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(days[0].count, 45);
        assert_eq!(days[2].count, 7);
    }

    #[test]
    fn test_unparseable_date_fails_fast() {
        let text = wrap(r#"[{"contributionDays":[{"date":"03/01/2024","contributionCount":1}]}]"#);
        let err = parse_feed(&text).unwrap_err();
        assert!(matches!(err, CalendarError::MalformedRecord(_)));
        assert!(err.to_string().contains("03/01/2024"));
    }

    #[test]
    fn test_negative_count_rejected() {
        let text = wrap(r#"[{"contributionDays":[{"date":"2024-03-01","contributionCount":-3}]}]"#);
        let err = parse_feed(&text).unwrap_err();
        assert!(err.to_string().contains("negative count"));
    }

    #[test]
    fn test_duplicate_date_rejected() {
        let text = wrap(
            r#"[{"contributionDays":[
                {"date":"2024-03-01","contributionCount":1},
                {"date":"2024-03-01","contributionCount":2}
            ]}]"#,
        );
        let err = parse_feed(&text).unwrap_err();
        assert!(err.to_string().contains("duplicate date"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = parse_feed("{not json").unwrap_err();
        assert!(matches!(err, CalendarError::MalformedRecord(_)));
    }
}
