mod errors;
mod logging;
mod initialization;
mod handlers;
mod page;
mod recent_cities;
mod weather_icons;
mod manager_chart;
mod manager_forecast;
mod manager_nominatim;
mod manager_openmeteo;

use actix_web::{web, App, HttpServer};
use tokio::sync::Mutex;
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_chart::ChartRenderer;
use crate::manager_nominatim::Nominatim;
use crate::manager_openmeteo::OpenMeteo;
use crate::recent_cities::RecentCities;

struct AppState {
    nominatim: Nominatim,
    open_meteo: OpenMeteo,
    chart: ChartRenderer,
    recent_cities: Mutex<RecentCities>,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let state = web::Data::new(AppState {
        nominatim: Nominatim::new(
            &config.nominatim.url,
            &config.nominatim.user_agent,
            config.nominatim.timeout_secs,
        )?,
        open_meteo: OpenMeteo::new(&config.open_meteo.url, config.open_meteo.timeout_secs)?,
        chart: ChartRenderer::new(config.chart.width, config.chart.height, &config.chart.font_path),
        recent_cities: Mutex::new(RecentCities::new(config.recent_cities.capacity)),
    });

    info!("starting web server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::routes)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}
