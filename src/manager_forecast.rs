use std::collections::HashMap;
use std::fmt;
use crate::errors::ForecastError;
use crate::manager_openmeteo::models::{DailySeries, HourlySeries};
use crate::weather_icons::WeatherCode;

/// Highest relative humidity of a day, or the explicit marker for days without hourly readings
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Humidity {
    Available(u8),
    NotAvailable,
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Humidity::Available(h) => write!(f, "{}%", h),
            Humidity::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// One day of the forecast table, temperatures are `None` where the API sent `null`
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: String,
    pub min_temp: Option<f64>,
    pub max_temp: Option<f64>,
    pub condition: WeatherCode,
    pub sunrise: String,
    pub sunset: String,
    pub humidity: Humidity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub date: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub condition: WeatherCode,
}

/// Builds one summary per day in the daily series, in the same order.
///
/// Hourly humidity readings are grouped on the date part of their timestamp and reduced to
/// the highest reading of each day. Missing (null) readings are skipped, a day without any
/// reading gets `Humidity::NotAvailable`.
///
/// # Arguments
///
/// * 'hourly' - hourly timestamps and humidity readings
/// * 'daily' - daily dates, temperatures, weather codes, sunrise and sunset
pub fn daily_summaries(hourly: &HourlySeries, daily: &DailySeries) -> Result<Vec<DailySummary>, ForecastError> {
    let days = daily.time.len();
    check_len("daily temperature_2m_min", daily.min_temps.len(), days)?;
    check_len("daily temperature_2m_max", daily.max_temps.len(), days)?;
    check_len("daily weathercode", daily.codes.len(), days)?;
    check_len("daily sunrise", daily.sunrise.len(), days)?;
    check_len("daily sunset", daily.sunset.len(), days)?;
    check_len("hourly relativehumidity_2m", hourly.humidity.len(), hourly.time.len())?;

    let humidity = max_humidity_by_day(hourly);

    let mut summaries: Vec<DailySummary> = Vec::with_capacity(days);
    for i in 0..days {
        let date = &daily.time[i];
        summaries.push(DailySummary {
            date: date.clone(),
            min_temp: daily.min_temps[i],
            max_temp: daily.max_temps[i],
            condition: WeatherCode::from(daily.codes[i]),
            sunrise: time_of_day(&daily.sunrise[i])?.to_string(),
            sunset: time_of_day(&daily.sunset[i])?.to_string(),
            humidity: humidity.get(date.as_str())
                .map_or(Humidity::NotAvailable, |h| Humidity::Available(*h)),
        });
    }

    Ok(summaries)
}

/// Zips the daily temperature range and weather codes into chart points
///
/// Days missing either temperature are left out, a missing code becomes `Unknown`.
///
/// # Arguments
///
/// * 'daily' - daily series, sunrise and sunset are not needed
pub fn chart_points(daily: &DailySeries) -> Result<Vec<ChartPoint>, ForecastError> {
    let days = daily.time.len();
    check_len("daily temperature_2m_min", daily.min_temps.len(), days)?;
    check_len("daily temperature_2m_max", daily.max_temps.len(), days)?;
    check_len("daily weathercode", daily.codes.len(), days)?;

    let points = daily.time.iter()
        .zip(daily.min_temps.iter())
        .zip(daily.max_temps.iter())
        .zip(daily.codes.iter())
        .filter_map(|(((date, min), max), code)| match (min, max) {
            (Some(min), Some(max)) => Some(ChartPoint {
                date: date.clone(),
                min_temp: *min,
                max_temp: *max,
                condition: WeatherCode::from(*code),
            }),
            _ => None,
        })
        .collect();

    Ok(points)
}

fn max_humidity_by_day(hourly: &HourlySeries) -> HashMap<&str, u8> {
    let mut by_day: HashMap<&str, u8> = HashMap::new();

    for (time, humidity) in hourly.time.iter().zip(hourly.humidity.iter()) {
        if let Some(h) = humidity {
            let day = time.split('T').next().unwrap_or(time);
            by_day.entry(day)
                .and_modify(|max| *max = (*max).max(*h))
                .or_insert(*h);
        }
    }

    by_day
}

fn time_of_day(timestamp: &str) -> Result<&str, ForecastError> {
    timestamp.split_once('T')
        .map(|(_, time)| time)
        .ok_or_else(|| ForecastError(format!("timestamp without time part: '{}'", timestamp)))
}

fn check_len(name: &str, len: usize, expected: usize) -> Result<(), ForecastError> {
    if len != expected {
        return Err(ForecastError(format!("{} has {} values, expected {}", name, len, expected)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn two_days() -> DailySeries {
        DailySeries {
            time: strings(&["2024-01-01", "2024-01-02"]),
            min_temps: vec![Some(1.0), Some(2.0)],
            max_temps: vec![Some(5.0), Some(6.0)],
            codes: vec![Some(0), Some(61)],
            sunrise: strings(&["2024-01-01T07:00", "2024-01-02T07:01"]),
            sunset: strings(&["2024-01-01T17:00", "2024-01-02T17:01"]),
        }
    }

    #[test]
    fn summarizes_worked_example() {
        let hourly = HourlySeries {
            time: strings(&["2024-01-01T03:00", "2024-01-01T15:00", "2024-01-02T09:00"]),
            humidity: vec![Some(40), Some(70), Some(55)],
        };

        let summaries = daily_summaries(&hourly, &two_days()).unwrap();

        assert_eq!(summaries, vec![
            DailySummary {
                date: "2024-01-01".to_string(),
                min_temp: Some(1.0),
                max_temp: Some(5.0),
                condition: WeatherCode::ClearSky,
                sunrise: "07:00".to_string(),
                sunset: "17:00".to_string(),
                humidity: Humidity::Available(70),
            },
            DailySummary {
                date: "2024-01-02".to_string(),
                min_temp: Some(2.0),
                max_temp: Some(6.0),
                condition: WeatherCode::SlightRain,
                sunrise: "07:01".to_string(),
                sunset: "17:01".to_string(),
                humidity: Humidity::Available(55),
            },
        ]);
        assert_eq!(summaries[0].condition.label(), "☀️ Clear sky");
        assert_eq!(summaries[1].condition.label(), "🌦️ Slight rain");
    }

    #[test]
    fn empty_hourly_series_gives_not_available() {
        let summaries = daily_summaries(&HourlySeries::default(), &two_days()).unwrap();

        assert_eq!(summaries.len(), 2);
        assert!(summaries.iter().all(|s| s.humidity == Humidity::NotAvailable));
    }

    #[test]
    fn day_without_readings_gives_not_available() {
        let hourly = HourlySeries {
            time: strings(&["2024-01-01T00:00", "2024-01-02T00:00", "2024-01-02T01:00"]),
            humidity: vec![Some(0), None, None],
        };

        let summaries = daily_summaries(&hourly, &two_days()).unwrap();

        assert_eq!(summaries[0].humidity, Humidity::Available(0));
        assert_eq!(summaries[1].humidity, Humidity::NotAvailable);
        assert_eq!(summaries[1].humidity.to_string(), "N/A");
    }

    #[test]
    fn max_over_a_full_day() {
        let readings: Vec<u8> = vec![88, 91, 93, 90, 72, 64, 59, 61, 77, 95, 80, 85];
        let hourly = HourlySeries {
            time: (0..readings.len()).map(|h| format!("2024-01-01T{:02}:00", h * 2)).collect(),
            humidity: readings.iter().map(|h| Some(*h)).collect(),
        };

        let summaries = daily_summaries(&hourly, &two_days()).unwrap();

        assert_eq!(summaries[0].humidity, Humidity::Available(95));
        assert_eq!(summaries[0].humidity.to_string(), "95%");
    }

    #[test]
    fn hours_outside_daily_range_are_ignored() {
        let hourly = HourlySeries {
            time: strings(&["2023-12-31T23:00", "2024-01-02T12:00"]),
            humidity: vec![Some(99), Some(42)],
        };

        let summaries = daily_summaries(&hourly, &two_days()).unwrap();

        assert_eq!(summaries[0].humidity, Humidity::NotAvailable);
        assert_eq!(summaries[1].humidity, Humidity::Available(42));
    }

    #[test]
    fn keeps_daily_order_and_length() {
        let mut daily = two_days();
        daily.time.reverse();
        daily.sunrise.reverse();
        daily.sunset.reverse();

        let summaries = daily_summaries(&HourlySeries::default(), &daily).unwrap();

        let dates: Vec<&str> = summaries.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-02", "2024-01-01"]);
    }

    #[test]
    fn unknown_code_gets_fallback_label() {
        let mut daily = two_days();
        daily.codes = vec![Some(42), Some(61)];

        let summaries = daily_summaries(&HourlySeries::default(), &daily).unwrap();
        let points = chart_points(&daily).unwrap();

        assert_eq!(summaries[0].condition.label(), "❓ Unknown");
        assert_eq!(points[0].condition.glyph(), "?");
    }

    #[test]
    fn empty_daily_series_gives_no_summaries() {
        let summaries = daily_summaries(&HourlySeries::default(), &DailySeries::default()).unwrap();

        assert!(summaries.is_empty());
    }

    #[test]
    fn mismatched_daily_lengths_are_rejected() {
        let mut daily = two_days();
        daily.max_temps.pop();

        let err = daily_summaries(&HourlySeries::default(), &daily).unwrap_err();

        assert!(err.to_string().contains("temperature_2m_max has 1 values, expected 2"));
    }

    #[test]
    fn mismatched_hourly_lengths_are_rejected() {
        let hourly = HourlySeries {
            time: strings(&["2024-01-01T00:00", "2024-01-01T01:00"]),
            humidity: vec![Some(50)],
        };

        assert!(daily_summaries(&hourly, &two_days()).is_err());
    }

    #[test]
    fn sunrise_without_time_is_rejected() {
        let mut daily = two_days();
        daily.sunrise[1] = "2024-01-02".to_string();

        let err = daily_summaries(&HourlySeries::default(), &daily).unwrap_err();

        assert!(err.to_string().contains("2024-01-02"));
    }

    #[test]
    fn chart_points_do_not_need_sun_times() {
        let mut daily = two_days();
        daily.sunrise.clear();
        daily.sunset.clear();

        let points = chart_points(&daily).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[1], ChartPoint {
            date: "2024-01-02".to_string(),
            min_temp: 2.0,
            max_temp: 6.0,
            condition: WeatherCode::SlightRain,
        });
    }

    #[test]
    fn chart_points_reject_missing_codes() {
        let mut daily = two_days();
        daily.codes.clear();

        assert!(chart_points(&daily).is_err());
    }

    #[test]
    fn null_daily_values_are_summarized_as_missing() {
        let mut daily = two_days();
        daily.max_temps = vec![Some(5.0), None];
        daily.codes = vec![None, Some(61)];

        let summaries = daily_summaries(&HourlySeries::default(), &daily).unwrap();

        assert_eq!(summaries[0].max_temp, Some(5.0));
        assert_eq!(summaries[0].condition, WeatherCode::Unknown(None));
        assert_eq!(summaries[1].min_temp, Some(2.0));
        assert_eq!(summaries[1].max_temp, None);
    }

    #[test]
    fn chart_points_skip_days_without_temperatures() {
        let mut daily = two_days();
        daily.max_temps = vec![Some(5.0), None];
        daily.codes = vec![None, Some(61)];

        let points = chart_points(&daily).unwrap();

        assert_eq!(points, vec![ChartPoint {
            date: "2024-01-01".to_string(),
            min_temp: 1.0,
            max_temp: 5.0,
            condition: WeatherCode::Unknown(None),
        }]);
    }
}
