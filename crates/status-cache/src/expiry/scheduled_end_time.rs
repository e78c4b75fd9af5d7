//! Expiry computation for the "clear status after" choices.
//!
//! All values are milliseconds since the Unix epoch, the unit the date picker
//! works in. The wire format uses seconds; see [`to_wire_seconds`].

use chrono::{DateTime, Local, NaiveDateTime, Offset, TimeDelta, TimeZone};
use serde::Serialize;
use status_core::TimeKey;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 60 * MINUTE_MS;

/// Absolute end time for every [`TimeKey`], relative to one "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledEndTimes {
    /// Always absent; present so the serialized map has every key
    pub never: Option<i64>,
    pub in_thirty_minutes: i64,
    pub in_one_hour: i64,
    pub today_five_pm: i64,
    pub tomorrow: i64,
    pub custom: Option<i64>,
}

impl ScheduledEndTimes {
    /// Look up the end time for a symbolic choice
    pub fn get(&self, key: TimeKey) -> Option<i64> {
        match key {
            TimeKey::Never => self.never,
            TimeKey::InThirtyMinutes => Some(self.in_thirty_minutes),
            TimeKey::InOneHour => Some(self.in_one_hour),
            TimeKey::TodayFivePm => Some(self.today_five_pm),
            TimeKey::Tomorrow => Some(self.tomorrow),
            TimeKey::Custom => self.custom,
        }
    }
}

/// Compute end times against the local wall clock
pub fn compute_scheduled_end_time(custom_time_selected: Option<i64>) -> ScheduledEndTimes {
    compute_scheduled_end_time_at(&Local::now(), custom_time_selected)
}

/// Compute end times against an explicit "now".
///
/// "now" is truncated to the minute, so two calls within the same minute give
/// identical results. `today_five_pm` is not rolled over when it is already
/// past 17:00.
pub fn compute_scheduled_end_time_at<Tz: TimeZone>(
    now: &DateTime<Tz>,
    custom_time_selected: Option<i64>,
) -> ScheduledEndTimes {
    let now_ms = truncate_to_minute(now.timestamp_millis());

    let tz = now.timezone();
    let offset = now.offset().fix();
    let today = now.date_naive();
    let midnight_today = today.and_time(chrono::NaiveTime::MIN);
    let midnight_tomorrow = today
        .succ_opt()
        .map_or(midnight_today + TimeDelta::days(1), |d| {
            d.and_time(chrono::NaiveTime::MIN)
        });

    ScheduledEndTimes {
        never: None,
        in_thirty_minutes: now_ms + 30 * MINUTE_MS,
        in_one_hour: now_ms + HOUR_MS,
        today_five_pm: local_to_millis(&tz, midnight_today + TimeDelta::hours(17), offset),
        tomorrow: local_to_millis(&tz, midnight_tomorrow, offset),
        custom: custom_time_selected,
    }
}

/// Convert a millisecond end time into the whole seconds the server expects
#[inline]
pub fn to_wire_seconds(millis: i64) -> i64 {
    millis.div_euclid(1000)
}

#[inline]
fn truncate_to_minute(millis: i64) -> i64 {
    millis - millis.rem_euclid(MINUTE_MS)
}

/// Resolve a local wall-clock time, stepping forward over DST gaps
fn local_to_millis<Tz: TimeZone>(
    tz: &Tz,
    naive: NaiveDateTime,
    fallback: chrono::FixedOffset,
) -> i64 {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + TimeDelta::hours(1))).earliest())
        .map_or_else(
            || (naive - TimeDelta::seconds(i64::from(fallback.local_minus_utc())))
                .and_utc()
                .timestamp_millis(),
            |dt| dt.timestamp_millis(),
        )
}
