//! Short "remaining/total" display strings for quota and expiry.
//!
//! The display unit is chosen from the magnitude of the values, not from
//! a fixed configuration, so short-lived trial accounts render in hours
//! while long plans render in days. These functions never fail: absent
//! or degenerate inputs collapse to `"-"` or the best partial string.

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

const HOUR_SECS: i64 = 3_600;
const DAY_SECS: i64 = 86_400;

/// Totals shorter than this render in hours rather than days.
pub const HOURS_TOTAL_CUTOFF_SECS: i64 = 2 * DAY_SECS;

/// Remaining lifetimes shorter than this render in hours rather than
/// days, regardless of the total.
pub const HOURS_REMAINING_CUTOFF_SECS: i64 = DAY_SECS;

/// Render a data quota pair as `"{remaining}/{total}{unit}"`,
/// `"{remaining}{unit}/∞"` for unlimited plans, or `"-"` when nothing is
/// known. Unit is `gb` once either side reaches 1 GiB, else `mb`; both
/// sides round half away from zero to integers in the chosen unit.
pub fn format_quota_pair(remaining_bytes: Option<u64>, total_bytes: Option<u64>) -> String {
    if remaining_bytes.is_none() && total_bytes.is_none() {
        return "-".to_string();
    }

    let use_gb = remaining_bytes.unwrap_or(0) >= GIB || total_bytes.unwrap_or(0) >= GIB;
    let (unit, label) = if use_gb { (GIB, "gb") } else { (MIB, "mb") };
    let to_units = |bytes: u64| ((bytes as f64) / (unit as f64)).round() as u64;

    let remaining = to_units(remaining_bytes.unwrap_or(0));
    match total_bytes.map(to_units) {
        Some(total) if total > 0 => format!("{}/{}{}", remaining, total, label),
        // No usable total in the chosen unit: unlimited plan.
        _ => format!("{}{}/∞", remaining, label),
    }
}

/// Render an expiry pair as `"{elapsed}/{total}{unit}"`,
/// `"{elapsed}{unit}"` when no total exists (unlimited duration), or
/// `"-"` when neither side can be computed. Uses the current wall clock;
/// see [`format_expiry_pair_at`] for the deterministic variant.
pub fn format_expiry_pair(
    remaining_seconds: Option<i64>,
    created_at: Option<i64>,
    expire: Option<i64>,
) -> String {
    format_expiry_pair_at(remaining_seconds, created_at, expire, chrono::Utc::now().timestamp())
}

/// Expiry pair rendering against an explicit `now` epoch.
///
/// Remaining prefers the panel-reported seconds, else derives from
/// `expire - now`; both clamp at zero. A total exists only when both
/// `created_at` and `expire` are known. Elapsed values inside (0, 1)
/// unit round up to 1 so an account created seconds ago never shows as
/// `0`; the total rounds up with a floor of 1.
pub fn format_expiry_pair_at(
    remaining_seconds: Option<i64>,
    created_at: Option<i64>,
    expire: Option<i64>,
    now: i64,
) -> String {
    let remaining = remaining_seconds
        .map(|r| r.max(0))
        .or_else(|| expire.map(|e| (e - now).max(0)));

    let total = match (created_at, expire) {
        (Some(c), Some(e)) => Some((e - c).max(0)),
        _ => None,
    };

    let elapsed = match total {
        Some(t) => {
            let rem = remaining.unwrap_or(0);
            Some((t - rem).max(0))
        }
        // No created/expire pairing: fall back to account age when the
        // creation time alone is known (unlimited-duration plans).
        None => created_at.map(|c| (now - c).max(0)),
    };

    let Some(elapsed) = elapsed else {
        return "-".to_string();
    };

    let use_hours = total.is_some_and(|t| t < HOURS_TOTAL_CUTOFF_SECS)
        || remaining.is_some_and(|r| r < HOURS_REMAINING_CUTOFF_SECS)
        || (total.is_none() && remaining.is_none() && elapsed < HOURS_TOTAL_CUTOFF_SECS);
    let (unit, label) = if use_hours { (HOUR_SECS, "h") } else { (DAY_SECS, "day") };

    let elapsed_units = floor_with_min_one(elapsed, unit);
    match total {
        Some(t) if t > 0 => {
            let total_units = div_ceil(t, unit).max(1);
            format!("{}/{}{}", elapsed_units, total_units, label)
        }
        _ => format!("{}{}", elapsed_units, label),
    }
}

/// Floor division, except values in (0, unit) round up to 1.
fn floor_with_min_one(value: i64, unit: i64) -> i64 {
    if value <= 0 {
        0
    } else if value < unit {
        1
    } else {
        value / unit
    }
}

fn div_ceil(value: i64, unit: i64) -> i64 {
    (value + unit - 1) / unit
}
