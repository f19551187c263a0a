use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

use emission_viewer::SeriesView;

use crate::color::ValueGradient;
use crate::state::{AppState, ChartKind};

// ---------------------------------------------------------------------------
// Chart geometry
// ---------------------------------------------------------------------------

/// `[position, value]` per element of the view. Elements sit at their index,
/// so a sorted view is drawn in value order and duplicate years don't overlap.
pub fn chart_points(view: &SeriesView) -> Vec<[f64; 2]> {
    view.ys
        .iter()
        .enumerate()
        .map(|(i, &value)| [i as f64, value])
        .collect()
}

/// Tick label for an x-axis position: the year drawn there, or nothing
/// between elements and outside the series.
pub fn year_tick_label(years: &[i64], position: f64) -> String {
    if position.fract() != 0.0 || position < 0.0 {
        return String::new();
    }
    years
        .get(position as usize)
        .map(|year| year.to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Emission chart (central panel)
// ---------------------------------------------------------------------------

/// Render the selected entity's series as bars or a line.
pub fn emission_plot(ui: &mut Ui, state: &AppState) {
    let view = match &state.view {
        Some(view) => view,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Import a CSV file to view emissions  (File → Import…)");
            });
            return;
        }
    };

    let name = view.entity.as_str();
    let points = chart_points(view);
    let years = view.xs.clone();

    Plot::new("emission_plot")
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("CO₂ emissions per capita (t)")
        .x_axis_formatter(move |mark: GridMark, _range| year_tick_label(&years, mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| match state.selection.chart {
            ChartKind::Bars => {
                let gradient = ValueGradient::new(&view.ys);
                let bars: Vec<Bar> = points
                    .iter()
                    .map(|&[position, value]| {
                        Bar::new(position, value)
                            .width(0.8)
                            .fill(gradient.color_for(value))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).name(name));
            }
            ChartKind::Lines => {
                let points: PlotPoints = points.into_iter().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(name)
                        .color(Color32::LIGHT_BLUE)
                        .width(1.5),
                );
            }
        });
}
