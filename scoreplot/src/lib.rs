use plotters::prelude::*;

use itertools::Itertools;

use scoreseries::Series;

use std::error::Error;
use std::path::Path;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            (($colour & 0x0000FF) >> 0) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0xAA0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x117733),
    hexcolour!(0x882255),
    hexcolour!(0x999933),
    hexcolour!(0x332288),
    hexcolour!(0x44AA99),
    hexcolour!(0xCC6677),
];

/// The knobs the chart exposes. Everything else about the styling is fixed.
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_min: u32,
    pub size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfig {
            title: "Jobshop optimization".to_owned(),
            x_label: "iteration number".to_owned(),
            y_label: "makespan".to_owned(),
            y_min: 0,
            size: (1024, 768),
        }
    }
}

/// Draws one line-with-markers per series into an SVG at `path`.
/// Named series get a legend entry, unnamed ones are only drawn.
pub fn render<P: AsRef<Path>>(
    series: &[Series],
    path: P,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();

    let x_max = series.iter().map(|s| s.values.len()).max().unwrap_or(0).max(1);
    let y_hi = series.iter()
        .flat_map(|s| s.values.iter().copied())
        .minmax()
        .into_option()
        .map(|(_, hi)| hi)
        .unwrap_or(config.y_min);
    // A sliver of headroom so the best run does not sit on the chart border.
    let y_top = (y_hi + y_hi / 20 + 1).max(config.y_min + 1);

    let root = SVGBackend::new(path, config.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(config.title.as_str(), ("sans-serif", 40))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0..x_max, config.y_min..y_top)?;

    chart
        .configure_mesh()
        .x_desc(config.x_label.as_str())
        .y_desc(config.y_label.as_str())
        .x_label_style(("sans-serif", 20))
        .y_label_style(("sans-serif", 20))
        .draw()?;

    for (index, run) in series.iter().enumerate() {
        let colour = COLOURS[index % COLOURS.len()];

        let points = run.values.iter().copied().enumerate();
        let anno = chart.draw_series(LineSeries::new(points, colour.stroke_width(2)))?;
        if let Some(name) = &run.name {
            anno.label(name.as_str())
                .legend(move |(x, y)| PathElement::new(vec!((x, y), (x + 20, y)), colour));
        }

        let markers = run.values.iter().copied().enumerate();
        chart.draw_series(markers.map(|(x, y)| Circle::new((x, y), 3, colour.filled())))?;
    }

    if series.iter().any(|s| s.name.is_some()) {
        chart
            .configure_series_labels()
            .background_style(WHITE.filled())
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
