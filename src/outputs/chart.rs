//! Bar chart of the number of headlines found on each portal.

use crate::error::AppError;
use crate::models::Portal;
use plotters::prelude::*;
use std::path::Path;
use tracing::{info, instrument};

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const SIZE: (u32, u32) = (640, 480);

/// Draw one bar per portal, in the order given, to an SVG file at `path`.
#[instrument(level = "info", skip(counts), fields(path = %path.display()))]
pub fn render_trend_chart(
    path: &Path,
    keyword: &str,
    counts: &[(Portal, usize)],
) -> Result<(), AppError> {
    draw(path, keyword, counts).map_err(|e| AppError::Chart(e.to_string()))?;
    info!(bars = counts.len(), "Wrote trend chart");
    Ok(())
}

fn draw(
    path: &Path,
    keyword: &str,
    counts: &[(Portal, usize)],
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let labels: Vec<&str> = counts.iter().map(|(p, _)| p.key()).collect();
    let n = counts.len().max(1) as u32;
    // Leave headroom above the tallest bar; an empty search still gets a 0..1 axis.
    let y_max = counts.iter().map(|(_, c)| *c as u32).max().unwrap_or(0) + 1;

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Article count per portal for: \"{keyword}\""),
            ("sans-serif", 22),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0u32..n).into_segmented(), 0u32..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Portal")
        .y_desc("Articles")
        .x_labels(labels.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).copied().unwrap_or("").to_string(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(SKY_BLUE.filled())
            .margin(20)
            .data(counts.iter().enumerate().map(|(i, (_, c))| (i as u32, *c as u32))),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend_banjir.svg");
        let counts = vec![(Portal::Kompas, 10), (Portal::Detik, 7), (Portal::Liputan6, 0)];

        render_trend_chart(&path, "banjir", &counts).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("banjir"));
    }

    #[test]
    fn test_render_all_zero_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trend_kosong.svg");
        let counts: Vec<_> = Portal::ALL.iter().map(|p| (*p, 0)).collect();
        render_trend_chart(&path, "kosong", &counts).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/trend.svg");
        let err = render_trend_chart(&path, "x", &[(Portal::Kompas, 1)]).unwrap_err();
        assert!(matches!(err, AppError::Chart(_)));
    }
}
