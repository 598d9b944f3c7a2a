//! Chart rendering for the three metric series.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;

/// Render accuracy, precision and recall as line series over the window index.
///
/// The y axis always covers at least 0.0..=1.0 with eleven labels (0.0 to 1.0
/// in steps of 0.1); samples outside that band widen the plotted range but the
/// label count stays fixed. Series of differing lengths are each drawn over
/// their own index range. No chart title is set.
pub fn plot_metric_values<P: AsRef<Path>>(
    accuracy: &[f64],
    precision: &[f64],
    recall: &[f64],
    path: P,
) -> Result<()> {
    let max_window = accuracy
        .len()
        .max(precision.len())
        .max(recall.len())
        .saturating_sub(1)
        .max(1);
    let (y_min, y_max) = y_range(
        accuracy
            .iter()
            .chain(precision.iter())
            .chain(recall.iter()),
    );

    let root = SVGBackend::new(path.as_ref(), (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..max_window as f64, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("windows")
        .y_desc("metric value")
        .y_labels(11)
        .y_label_formatter(&|v| format!("{:.1}", v))
        .draw()?;

    chart
        .draw_series(LineSeries::new(indexed(accuracy), &BLUE))?
        .label("Accuracy")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(indexed(precision), &GREEN))?
        .label("Precision")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .draw_series(LineSeries::new(indexed(recall), &RED))?
        .label("Recall")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Pair each sample with its 0-based window index.
fn indexed(values: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    values.iter().enumerate().map(|(i, v)| (i as f64, *v))
}

/// Y range covering the fixed 0..1 band plus any out-of-range samples.
/// NaN and infinite samples do not widen the range.
fn y_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let mut min = 0.0f64;
    let mut max = 1.0f64;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}
