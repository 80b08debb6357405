use chrono::DateTime;

use crate::types::Track;

pub fn callback_url(addr: &str) -> String {
    format!("http://{}/callback", addr)
}

pub fn format_uts(uts: &str) -> String {
    uts.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| uts.to_string())
}

pub fn played_label(track: &Track) -> String {
    let nowplaying = track
        .attr
        .as_ref()
        .and_then(|attr| attr.nowplaying.as_deref())
        == Some("true");
    if nowplaying {
        return "now playing".to_string();
    }

    track
        .date
        .as_ref()
        .map(|date| format_uts(&date.uts))
        .unwrap_or_default()
}
