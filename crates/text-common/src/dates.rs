use chrono::NaiveDateTime;

/// Render as `mm/dd/YYYY`, or `mm/dd/YYYY HH:MM` with `include_time`; `-` when absent.
pub fn friendly_date(date: Option<&NaiveDateTime>, include_time: bool) -> String {
    let Some(date) = date else {
        return "-".to_string();
    };
    let format = if include_time {
        "%m/%d/%Y %H:%M"
    } else {
        "%m/%d/%Y"
    };
    date.format(format).to_string()
}
