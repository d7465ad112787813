pub mod errors;

use std::fs;
use std::io::Cursor;
use chrono::NaiveDate;
use image::{ImageFormat, RgbImage};
use log::{info, warn};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{register_font, FontStyle};
use crate::manager_chart::errors::ChartError;
use crate::manager_forecast::ChartPoint;

const FONT_FAMILY: &str = "sans-serif";
const BAND_COLOR: RGBColor = RGBColor(211, 211, 211);

/// Renders daily min/max temperature charts as PNG images
pub struct ChartRenderer {
    width: u32,
    height: u32,
    text: bool,
}

impl ChartRenderer {
    /// Returns a ChartRenderer drawing images of the given size
    ///
    /// The font is read once and registered for the whole process. Without a usable font
    /// the charts still show series and markers, but no title, axis labels or legend.
    ///
    /// # Arguments
    ///
    /// * 'width' - image width in pixels
    /// * 'height' - image height in pixels
    /// * 'font_path' - path to a TrueType font
    pub fn new(width: u32, height: u32, font_path: &str) -> ChartRenderer {
        let text = match fs::read(font_path) {
            Ok(bytes) => {
                let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
                match register_font(FONT_FAMILY, FontStyle::Normal, bytes) {
                    Ok(()) => {
                        info!("chart font loaded from {}", font_path);
                        true
                    },
                    Err(_) => {
                        warn!("invalid chart font {}, charts will be drawn without text", font_path);
                        false
                    }
                }
            },
            Err(e) => {
                warn!("unable to read chart font {}: {}, charts will be drawn without text", font_path, e);
                false
            }
        };

        ChartRenderer { width, height, text }
    }

    /// Draws max and min temperature per day with the band between them shaded and the weather
    /// glyph of each day above its max temperature
    ///
    /// # Arguments
    ///
    /// * 'city' - city named in the title
    /// * 'points' - one point per day, in date order
    pub fn render(&self, city: &str, points: &[ChartPoint]) -> Result<Vec<u8>, ChartError> {
        if points.is_empty() {
            return Err(ChartError::NoData(format!("no forecast days for {}", city)));
        }

        let mut buffer = vec![0u8; self.width as usize * self.height as usize * 3];
        self.draw(&mut buffer, city, points)?;

        let image = RgbImage::from_raw(self.width, self.height, buffer)
            .ok_or_else(|| ChartError::Encoding("bitmap size does not match image size".to_string()))?;
        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png)?;

        Ok(png.into_inner())
    }

    fn draw(&self, buffer: &mut [u8], city: &str, points: &[ChartPoint]) -> Result<(), ChartError> {
        let root = BitMapBackend::with_buffer(buffer, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let lowest = points.iter().map(|p| p.min_temp).fold(f64::INFINITY, f64::min);
        let highest = points.iter().map(|p| p.max_temp).fold(f64::NEG_INFINITY, f64::max);
        let x_range = -0.5..(points.len() as f64 - 0.5);
        let y_range = (lowest - 2.0)..(highest + 3.0);

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20);
        if self.text {
            builder
                .caption(format!("7-Day Forecast for {}", title_case(city)), (FONT_FAMILY, 24))
                .x_label_area_size(50)
                .y_label_area_size(50);
        }
        let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

        if self.text {
            let tick_label = |x: &f64| date_label(points, *x);
            chart
                .configure_mesh()
                .x_labels(points.len())
                .x_label_formatter(&tick_label)
                .x_desc("Date")
                .y_desc("Temperature (°C)")
                .light_line_style(BLACK.mix(0.1))
                .draw()?;
        }

        let band: Vec<(f64, f64)> = points.iter().enumerate()
            .map(|(i, p)| (i as f64, p.max_temp))
            .chain(points.iter().enumerate().rev().map(|(i, p)| (i as f64, p.min_temp)))
            .collect();
        chart.draw_series(std::iter::once(Polygon::new(band, BAND_COLOR.mix(0.3).filled())))?;

        chart
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (i as f64, p.max_temp)),
                RED.stroke_width(2),
            ).point_size(4))?
            .label("Max Temp (°C)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .draw_series(LineSeries::new(
                points.iter().enumerate().map(|(i, p)| (i as f64, p.min_temp)),
                BLUE.stroke_width(2),
            ).point_size(4))?
            .label("Min Temp (°C)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        if self.text {
            let glyph_style = TextStyle::from((FONT_FAMILY, 18).into_font())
                .pos(Pos::new(HPos::Center, VPos::Bottom));
            chart.draw_series(points.iter().enumerate().map(|(i, p)| {
                Text::new(p.condition.glyph().to_string(), (i as f64, p.max_temp + 1.0), glyph_style.clone())
            }))?;

            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8))
                .border_style(BLACK)
                .draw()?;
        }

        root.present()?;

        Ok(())
    }
}

/// Tick label for an x value, the weekday and date when the value sits on a day
fn date_label(points: &[ChartPoint], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }

    match points.get(i as usize) {
        Some(p) => match NaiveDate::parse_from_str(&p.date, "%Y-%m-%d") {
            Ok(date) => date.format("%a %d %b").to_string(),
            Err(_) => p.date.clone(),
        },
        None => String::new(),
    }
}

/// Upper cases the first letter of every word and lower cases the rest
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            result.push(c);
            word_start = true;
        }
    }

    result
}
