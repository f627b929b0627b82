use crate::models::{ItemView, ProgressRecord, ProgressView};
use crate::storage::KeyValueStore;
use crate::store::DailyProgressStore;
use chrono::NaiveDate;

pub fn build_view<S: KeyValueStore>(
    store: &DailyProgressStore<S>,
    record: &ProgressRecord,
    just_completed: bool,
) -> ProgressView {
    let catalog = store.catalog();
    let items = catalog
        .iter()
        .map(|platform| ItemView {
            id: platform.id.clone(),
            name: platform.name.clone(),
            url: platform.url.clone(),
            checked: record.is_checked(&platform.id),
        })
        .collect();
    let checked_count = store.checked_count(record);

    ProgressView {
        items,
        checked_count,
        total: catalog.len(),
        percent: percent(checked_count, catalog.len()),
        complete: store.is_complete(record),
        streak: record.streak,
        last_completed: record
            .last_completed_date
            .map(format_display_date)
            .unwrap_or_default(),
        applications_today: record.applications_today,
        just_completed,
    }
}

/// Share of checked items, rounded to the nearest whole percent.
pub fn percent(checked: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let checked = checked.min(total);
    ((checked * 100 + total / 2) / total) as u8
}

/// Human-readable day, e.g. `15 Feb 2026`.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
