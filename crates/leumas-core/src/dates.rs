//! Display-date generation for the blog.
//!
//! Dates are derived from an explicit reference instant so callers decide what
//! "now" is; the blog recomputes them on every request.

use std::fmt::Display;

use chrono::{DateTime, TimeDelta, TimeZone};

/// Day, abbreviated English month, year: `07 Mar, 2025`.
pub const DISPLAY_DATE_FORMAT: &str = "%d %b, %Y";

/// Number of dates generated for the blog, one per post.
pub const BLOG_DATE_COUNT: usize = 14;

/// Days between consecutive blog dates.
pub const BLOG_DATE_STEP_DAYS: i64 = 2;

/// Instants `reference - k * step_days` for `k` in `0..count`.
///
/// `None` when the oldest instant falls outside chrono's representable range
/// (only reachable with extreme `step_days` or `reference`).
pub fn display_instants<Tz: TimeZone>(
    count: usize,
    step_days: i64,
    reference: &DateTime<Tz>,
) -> Option<Vec<DateTime<Tz>>> {
    (0..count)
        .map(|k| {
            let days = i64::try_from(k).ok()?.checked_mul(step_days)?;
            reference.clone().checked_sub_signed(TimeDelta::try_days(days)?)
        })
        .collect()
}

pub fn format_display_date<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Exactly `count` formatted dates, newest first, or `None` on overflow
/// (see [`display_instants`]).
///
/// Precondition: `count` covers every record that indexes into the result.
/// This is not checked here.
pub fn generate_display_dates<Tz>(
    count: usize,
    step_days: i64,
    reference: &DateTime<Tz>,
) -> Option<Vec<String>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let instants = display_instants(count, step_days, reference)?;
    Some(instants.iter().map(format_display_date).collect())
}
