use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder};
use log::{info, log, warn, Level};
use serde::Deserialize;
use crate::AppState;
use crate::errors::RequestError;
use crate::manager_forecast::{chart_points, daily_summaries, DailySummary};
use crate::manager_nominatim::errors::NominatimError;
use crate::page::{CurrentConditions, Page};

const DEFAULT_CHART_CITY: &str = "London";

#[derive(Deserialize, Debug)]
struct SearchForm {
    city: String,
}

#[derive(Deserialize, Debug)]
struct ChartParams {
    city: Option<String>,
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(search)
        .service(forecast_chart);
}

#[get("/")]
async fn index(data: web::Data<AppState>) -> impl Responder {
    search_form(&data).await
}

#[post("/")]
async fn search(form: web::Form<SearchForm>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", form);

    let city = form.city.trim();
    if city.is_empty() {
        return search_form(&data).await;
    }

    let recent_cities = {
        let mut recent = data.recent_cities.lock().await;
        recent.add(city);
        recent.to_vec()
    };

    let page = match weather_report(&data, city).await {
        Ok((current, forecast)) => Page {
            city: Some(city.to_string()),
            current: Some(current),
            forecast,
            error: None,
            recent_cities,
        },
        Err(e) => {
            warn!("failed to get weather for '{}': {}", city, e);
            Page {
                error: Some(page_message(city, &e)),
                recent_cities,
                ..Default::default()
            }
        }
    };

    html(page)
}

#[get("/forecast_chart")]
async fn forecast_chart(params: web::Query<ChartParams>, data: web::Data<AppState>) -> impl Responder {
    info!("{:?}", params);

    let city = params.city.as_deref().map(str::trim).unwrap_or(DEFAULT_CHART_CITY);

    match chart(&data, city).await {
        Ok(png) => HttpResponse::Ok().content_type("image/png").body(png),
        Err(e) => {
            let (status, message) = chart_failure(&e);
            log!(failure_level(status), "failed to draw chart for '{}': {}", city, e);
            HttpResponse::build(status)
                .content_type("text/plain; charset=utf-8")
                .body(message)
        }
    }
}

/// Geocodes the city and builds current conditions and daily summaries from its forecast
///
/// # Arguments
///
/// * 'data' - application state holding the upstream clients
/// * 'city' - the city to report on
async fn weather_report(data: &AppState, city: &str) -> Result<(CurrentConditions, Vec<DailySummary>), RequestError> {
    let coordinates = data.nominatim.coordinates(city).await?;
    let forecast = data.open_meteo.full_forecast(&coordinates).await?;
    let summaries = daily_summaries(&forecast.hourly, &forecast.daily)?;

    Ok((CurrentConditions::from(&forecast.current_weather), summaries))
}

/// Geocodes the city and draws its daily forecast as a PNG image
///
/// # Arguments
///
/// * 'data' - application state holding the upstream clients and the chart renderer
/// * 'city' - the city to draw a chart for
async fn chart(data: &AppState, city: &str) -> Result<Vec<u8>, RequestError> {
    let coordinates = data.nominatim.coordinates(city).await?;
    let forecast = data.open_meteo.daily_forecast(&coordinates).await?;
    let points = chart_points(&forecast.daily)?;

    Ok(data.chart.render(city, &points)?)
}

fn page_message(city: &str, e: &RequestError) -> String {
    match e {
        RequestError::Geocoding(NominatimError::NotFound(_)) => format!("City '{}' not found.", city),
        RequestError::Geocoding(e) => format!("Geocoding error: {}", e),
        RequestError::Weather(e) => format!("Weather API error: {}", e),
        RequestError::Forecast(e) => format!("Forecast data error: {}", e),
        RequestError::Chart(e) => format!("Chart error: {}", e),
    }
}

fn chart_failure(e: &RequestError) -> (StatusCode, String) {
    match e {
        RequestError::Geocoding(NominatimError::NotFound(_)) =>
            (StatusCode::BAD_REQUEST, "City not found".to_string()),
        RequestError::Geocoding(e) =>
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Geocoding error: {}", e)),
        RequestError::Weather(e) =>
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Weather API error: {}", e)),
        RequestError::Forecast(e) =>
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Weather API error: {}", e)),
        RequestError::Chart(e) =>
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Chart error: {}", e)),
    }
}

/// Client mistakes such as an unknown city are warnings, everything else is an error
fn failure_level(status: StatusCode) -> Level {
    if status.is_client_error() { Level::Warn } else { Level::Error }
}

async fn search_form(data: &AppState) -> HttpResponse {
    let page = Page {
        recent_cities: data.recent_cities.lock().await.to_vec(),
        ..Default::default()
    };

    html(page)
}

fn html(page: Page) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page.render())
}
