use crate::manager_forecast::DailySummary;
use crate::manager_openmeteo::models::CurrentWeather;
use crate::weather_icons::WeatherCode;

const STYLE: &str = "body{font-family:sans-serif;max-width:960px;margin:0 auto;padding:20px}\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:6px;text-align:center}\
.error{color:#b00020}\
.recent form{display:inline}\
.recent button{margin:2px}";

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub windspeed: f64,
    pub condition: WeatherCode,
}

impl From<&CurrentWeather> for CurrentConditions {
    fn from(current: &CurrentWeather) -> Self {
        CurrentConditions {
            temperature: current.temperature,
            windspeed: current.windspeed,
            condition: WeatherCode::from(current.weathercode),
        }
    }
}

/// Everything shown on the search page, all parts are optional
#[derive(Debug, Default)]
pub struct Page {
    pub city: Option<String>,
    pub current: Option<CurrentConditions>,
    pub forecast: Vec<DailySummary>,
    pub error: Option<String>,
    pub recent_cities: Vec<String>,
}

impl Page {
    pub fn render(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Weather App</title>");
        html.push_str(&format!("<style>{}</style></head><body>", STYLE));
        html.push_str("<h1>Weather App</h1>");
        html.push_str("<form method=\"post\" action=\"/\">\
            <input type=\"text\" name=\"city\" placeholder=\"Enter city\" required>\
            <button type=\"submit\">Get weather</button></form>");

        if let Some(error) = &self.error {
            html.push_str(&format!("<p class=\"error\">{}</p>", escape_html(error)));
        }

        if !self.recent_cities.is_empty() {
            html.push_str("<div class=\"recent\"><h3>Recent searches</h3>");
            for city in &self.recent_cities {
                let city = escape_html(city);
                html.push_str(&format!(
                    "<form method=\"post\" action=\"/\"><button type=\"submit\" name=\"city\" value=\"{}\">{}</button></form>",
                    city, city
                ));
            }
            html.push_str("</div>");
        }

        if let (Some(city), Some(current)) = (&self.city, &self.current) {
            html.push_str(&format!("<h2>Weather in {}</h2>", escape_html(city)));
            html.push_str(&format!(
                "<p>Temperature: {}°C<br>Condition: {}<br>Wind speed: {} km/h</p>",
                current.temperature, current.condition, current.windspeed
            ));
        }

        if !self.forecast.is_empty() {
            html.push_str(&self.forecast_table());

            if let Some(city) = &self.city {
                html.push_str(&format!(
                    "<h3>Temperature chart</h3><img src=\"/forecast_chart?city={}\" alt=\"Forecast chart for {}\">",
                    escape_html(&urlencoding::encode(city)), escape_html(city)
                ));
            }
        }

        html.push_str("</body></html>");
        html
    }

    fn forecast_table(&self) -> String {
        let mut table = String::from("<h3>Forecast</h3><table><tr>\
            <th>Date</th><th>Condition</th><th>Min</th><th>Max</th>\
            <th>Sunrise</th><th>Sunset</th><th>Max humidity</th></tr>");

        for day in &self.forecast {
            table.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&day.date),
                day.condition,
                temperature(day.min_temp),
                temperature(day.max_temp),
                escape_html(&day.sunrise),
                escape_html(&day.sunset),
                day.humidity,
            ));
        }

        table.push_str("</table>");
        table
    }
}

fn temperature(value: Option<f64>) -> String {
    value.map_or("N/A".to_string(), |t| format!("{}°C", t))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
