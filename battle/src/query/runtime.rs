//! Running-time formatting for launched battles

use chrono::{DateTime, TimeDelta, Utc};

/// "Running for ..." text, `None` while the battle has not started
pub fn friendly_runtime(start_time: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<String> {
    let start_time = start_time?;
    Some(format!("Running for {}", format_runtime(now - start_time)))
}

/// Format a duration as "1 hour 2 minutes 3 seconds"
///
/// Zero components are omitted; negative durations count as zero.
pub fn format_runtime(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);

    let parts: Vec<String> = [(hours, "hour"), (minutes, "minute"), (seconds, "second")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| {
            if value == 1 {
                format!("{} {}", value, unit)
            } else {
                format!("{} {}s", value, unit)
            }
        })
        .collect();

    if parts.is_empty() {
        "0 seconds".to_string()
    } else {
        parts.join(" ")
    }
}
