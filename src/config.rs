use std::env;
use std::str::FromStr;
use chrono::{NaiveDate, NaiveTime};
use crate::domain::services::reservation_form::FormSettings;
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub booking_window_start: NaiveDate,
    pub booking_window_end: NaiveDate,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub slot_interval_min: u32,
    pub notification_duration_ms: u64,
    pub seed_sample_slots: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source; unset variables take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let config = Self {
            port: parse_value("PORT", &var("PORT", "3000"))?,
            booking_window_start: parse_date("BOOKING_WINDOW_START", &var("BOOKING_WINDOW_START", "2024-07-24"))?,
            booking_window_end: parse_date("BOOKING_WINDOW_END", &var("BOOKING_WINDOW_END", "2024-07-31"))?,
            opening_time: parse_time("OPENING_TIME", &var("OPENING_TIME", "18:00"))?,
            closing_time: parse_time("CLOSING_TIME", &var("CLOSING_TIME", "22:00"))?,
            slot_interval_min: parse_value("SLOT_INTERVAL_MIN", &var("SLOT_INTERVAL_MIN", "30"))?,
            notification_duration_ms: parse_value("NOTIFICATION_DURATION_MS", &var("NOTIFICATION_DURATION_MS", "3000"))?,
            seed_sample_slots: parse_value("SEED_SAMPLE_SLOTS", &var("SEED_SAMPLE_SLOTS", "true"))?,
        };

        if config.booking_window_end < config.booking_window_start {
            return Err(AppError::Config("BOOKING_WINDOW_END must not be before BOOKING_WINDOW_START".into()));
        }
        if config.closing_time <= config.opening_time {
            return Err(AppError::Config("CLOSING_TIME must be after OPENING_TIME".into()));
        }
        if config.slot_interval_min == 0 {
            return Err(AppError::Config("SLOT_INTERVAL_MIN must be positive".into()));
        }

        Ok(config)
    }

    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            min_date: self.booking_window_start,
            max_date: self.booking_window_end,
            opening_time: self.opening_time,
            closing_time: self.closing_time,
            slot_interval_min: self.slot_interval_min,
            notification_duration_ms: self.notification_duration_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let settings = FormSettings::default();
        Self {
            port: 3000,
            booking_window_start: settings.min_date,
            booking_window_end: settings.max_date,
            opening_time: settings.opening_time,
            closing_time: settings.closing_time,
            slot_interval_min: settings.slot_interval_min,
            notification_duration_ms: settings.notification_duration_ms,
            seed_sample_slots: true,
        }
    }
}

fn parse_value<T: FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.parse().map_err(|_| AppError::Config(format!("{} has an invalid value: {}", name, raw)))
}

fn parse_date(name: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Config(format!("{} must be a date (YYYY-MM-DD), got {}", name, raw)))
}

fn parse_time(name: &str, raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| AppError::Config(format!("{} must be a time (HH:MM), got {}", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.booking_window_start, NaiveDate::from_ymd_opt(2024, 7, 24).unwrap());
        assert_eq!(config.booking_window_end, NaiveDate::from_ymd_opt(2024, 7, 31).unwrap());
        assert_eq!(config.opening_time, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        assert_eq!(config.closing_time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(config.slot_interval_min, 30);
        assert_eq!(config.notification_duration_ms, 3000);
        assert!(config.seed_sample_slots);

        let default = Config::default();
        assert_eq!(default.booking_window_start, config.booking_window_start);
        assert_eq!(default.closing_time, config.closing_time);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            ("PORT", "8080"),
            ("OPENING_TIME", "12:00"),
            ("CLOSING_TIME", "14:00"),
            ("SLOT_INTERVAL_MIN", "60"),
            ("SEED_SAMPLE_SLOTS", "false"),
        ]).unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.seed_sample_slots);

        let settings = config.form_settings();
        assert_eq!(settings.opening_time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(settings.slot_interval_min, 60);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(config_with(&[("PORT", "abc")]), Err(AppError::Config(_))));
        assert!(matches!(config_with(&[("BOOKING_WINDOW_START", "24.07.2024")]), Err(AppError::Config(_))));
        assert!(matches!(config_with(&[("CLOSING_TIME", "17:00")]), Err(AppError::Config(_))));
        assert!(matches!(config_with(&[("BOOKING_WINDOW_END", "2024-07-01")]), Err(AppError::Config(_))));
        assert!(matches!(config_with(&[("SLOT_INTERVAL_MIN", "0")]), Err(AppError::Config(_))));
    }
}
