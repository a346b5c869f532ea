//! # fleet-metrics
//!
//! Pure aggregation over dashboard counters and fleet snapshots. Nothing here
//! panics or produces NaN: every ratio goes through [`percentage`].

mod breakdown;

pub use breakdown::{DashboardBreakdown, FleetStatusBreakdown, MaintenanceBreakdown, StatusShare};

/// Integer percentage of `numerator` over `denominator`, rounded half-up.
///
/// A zero denominator yields `0`. A numerator larger than the denominator is
/// clamped, so the result always lies in `0..=100`.
#[must_use]
pub fn percentage(numerator: u64, denominator: u64) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let n = u128::from(numerator.min(denominator));
    let d = u128::from(denominator);
    u32::try_from((200 * n + d) / (2 * d)).unwrap_or(100)
}
