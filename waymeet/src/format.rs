//! Display helpers (pt-BR).

use chrono::{DateTime, Datelike, NaiveDate, Utc};

const WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];
const EARTH_RADIUS_KM: f64 = 6371.0;

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// `2025-03-15` -> `Sáb • 15/03`. Unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_day(value) {
        Some(day) => format!(
            "{} • {:02}/{:02}",
            WEEKDAYS[day.weekday().num_days_from_sunday() as usize],
            day.day(),
            day.month()
        ),
        None => value.to_string(),
    }
}

/// `19:30` -> `19h30`
pub fn format_time(value: &str) -> String {
    value.replacen(':', "h", 1)
}

pub fn format_event_date_time(date: &str, time: &str) -> String {
    format!("{} • {}", format_date(date), format_time(time))
}

pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "Grátis".to_string();
    }
    format!("R$ {price:.2}").replacen('.', ",", 1)
}

pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.1}km")
    }
}

/// Compact relative age: `agora`, `5min`, `3h`, `2d`, `1sem`.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        "agora".to_string()
    } else if minutes < 60 {
        format!("{minutes}min")
    } else if hours < 24 {
        format!("{hours}h")
    } else if days < 7 {
        format!("{days}d")
    } else {
        format!("{}sem", days / 7)
    }
}

/// Great-circle distance in kilometres (haversine).
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Bom dia"
    } else if hour < 18 {
        "Boa tarde"
    } else {
        "Boa noite"
    }
}

/// Cut to `max_len` characters including the trailing `...`.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}
