use chrono::NaiveDate;

use crate::models::{MatchedScheme, SortBy};

/// Ordering key for schemes without a deadline, past every dated one.
const NO_DEADLINE: i64 = 9_999_999_999_999;

/// Keep only matches in the given category. `None` and "all" disable the
/// filter.
pub fn filter_by_category(
    matches: Vec<MatchedScheme>,
    category: Option<&str>,
) -> Vec<MatchedScheme> {
    match category {
        Some(category) if category != "all" => matches
            .into_iter()
            .filter(|entry| entry.scheme.category == category)
            .collect(),
        _ => matches,
    }
}

/// Re-order matches for presentation.
///
/// Relevance keeps the ranking the matcher produced. The date sorts are
/// stable, so schemes sharing a date stay in relevance order. Undated
/// schemes sort last under both date orders.
pub fn sort_matches(matches: &mut [MatchedScheme], sort_by: SortBy) {
    match sort_by {
        SortBy::Relevance => {}
        SortBy::Newest => {
            matches.sort_by_key(|entry| {
                std::cmp::Reverse(date_millis(entry.scheme.launch_date.as_deref()).unwrap_or(0))
            });
        }
        SortBy::Deadline => {
            matches.sort_by_key(|entry| {
                date_millis(entry.scheme.deadline.as_deref()).unwrap_or(NO_DEADLINE)
            });
        }
    }
}

/// Epoch-millisecond key for a catalog date. Accepts "YYYY-MM-DD" or a bare
/// year, which counts as January 1st.
fn date_millis(value: Option<&str>) -> Option<i64> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok().or_else(|| {
        raw.parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
    })?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis())
}
