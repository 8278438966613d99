//! Chart rendering for methylation tracks
//!
//! Draws the prepared series as line tracks over the queried region using
//! plotters, with optional gene-span shading and breakpoint markers. The
//! value axis is fixed to 0-100 (percent modified); the position axis spans
//! the region. Output backend is chosen by file extension (.png or .svg).

use plotters::chart::SeriesLabelPosition;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use std::collections::HashSet;
use std::path::Path;

use crate::core::{GenomicRegion, PlotError, Series};

/// A shaded horizontal span, typically a gene body
#[derive(Debug, Clone, PartialEq)]
pub struct SpanAnnotation {
    pub label: String,
    pub start: u64,
    pub end: u64,
}

/// A labeled vertical marker, e.g. a tandem-repeat breakpoint
#[derive(Debug, Clone, PartialEq)]
pub struct LineAnnotation {
    pub label: String,
    pub position: u64,
}

/// Rendering options
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    pub line_width: u32,
    pub title: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 700,
            line_width: 2,
            title: String::new(),
        }
    }
}

/// Render series to `out_path`
///
/// Empty series are skipped from drawing but tolerated; legend entries are
/// deduplicated by label.
pub fn render_series(
    series: &[Series],
    region: &GenomicRegion,
    spans: &[SpanAnnotation],
    vlines: &[LineAnnotation],
    config: &PlotConfig,
    out_path: &Path,
) -> Result<(), PlotError> {
    let extension = out_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "png" => {
            let root =
                BitMapBackend::new(out_path, (config.width, config.height)).into_drawing_area();
            draw_chart(&root, series, region, spans, vlines, config)
        }
        "svg" => {
            let root =
                SVGBackend::new(out_path, (config.width, config.height)).into_drawing_area();
            draw_chart(&root, series, region, spans, vlines, config)
        }
        _ => Err(PlotError::UnsupportedFormat(out_path.to_path_buf())),
    }
}

fn backend_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Backend(e.to_string())
}

fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    series: &[Series],
    region: &GenomicRegion,
    spans: &[SpanAnnotation],
    vlines: &[LineAnnotation],
    config: &PlotConfig,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(backend_err)?;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(15)
        .x_label_area_size(55)
        .y_label_area_size(65);
    if !config.title.is_empty() {
        builder.caption(&config.title, ("sans-serif", 28));
    }
    let mut chart = builder
        .build_cartesian_2d(region.start as f64..region.end as f64, 0f64..100f64)
        .map_err(backend_err)?;

    chart
        .configure_mesh()
        .x_desc("Genomic position")
        .y_desc("% modified (windowed mean)")
        .axis_desc_style(("sans-serif", 20))
        .label_style(("sans-serif", 16))
        // No scientific notation on genomic coordinates
        .x_label_formatter(&|v| format!("{:.0}", v))
        .light_line_style(&BLACK.mix(0.1))
        .draw()
        .map_err(backend_err)?;

    let mut seen_labels: HashSet<String> = HashSet::new();

    // Gene spans behind the tracks
    for span in spans {
        let (mut s, mut e) = (span.start as f64, span.end as f64);
        if s > e {
            std::mem::swap(&mut s, &mut e);
        }
        let style = RGBAColor(128, 128, 128, 0.12).filled();
        let drawn = chart
            .draw_series(std::iter::once(Rectangle::new([(s, 0.0), (e, 100.0)], style)))
            .map_err(backend_err)?;
        if seen_labels.insert(span.label.clone()) {
            drawn.label(span.label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 16, y + 6)], RGBAColor(128, 128, 128, 0.4).filled())
            });
        }
    }

    for (idx, s) in series.iter().enumerate() {
        if s.is_empty() {
            // No data in the region for this sample; keep it out of the
            // legend but the caller still has its (empty) series.
            continue;
        }
        let color = Palette99::pick(idx).to_rgba();
        let points: Vec<(f64, f64)> = s
            .positions
            .iter()
            .zip(s.values.iter())
            .map(|(&x, &y)| (x, y))
            .collect();
        let drawn = chart
            .draw_series(LineSeries::new(
                points,
                color.stroke_width(config.line_width),
            ))
            .map_err(backend_err)?;
        if seen_labels.insert(s.name.clone()) {
            let legend_color = color;
            drawn.label(s.name.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], legend_color.stroke_width(2))
            });
        }
    }

    for vline in vlines {
        let x = vline.position as f64;
        let drawn = chart
            .draw_series(DashedLineSeries::new(
                [(x, 0.0), (x, 100.0)],
                8,
                5,
                RED.stroke_width(2),
            ))
            .map_err(backend_err)?;
        if seen_labels.insert(vline.label.clone()) {
            drawn.label(vline.label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2))
            });
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK.mix(0.3))
        .label_font(("sans-serif", 16))
        .draw()
        .map_err(backend_err)?;

    root.present().map_err(backend_err)?;
    Ok(())
}
