//! Consecutive-day study streaks.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Count consecutive calendar days with at least one entry, ending at the
/// most recent entry date.
///
/// Several entries on the same day count once; an empty input yields 0.
#[must_use]
pub fn streak_days<I>(dates: I) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = dates.into_iter().collect();
    let mut iter = days.iter().rev();
    let Some(mut current) = iter.next().copied() else {
        return 0;
    };

    let mut streak = 1_u32;
    for &day in iter {
        match current.pred_opt() {
            Some(prev) if prev == day => {
                streak = streak.saturating_add(1);
                current = day;
            }
            _ => break,
        }
    }
    streak
}
