use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{outcome_color, ColorMap};
use crate::data::aggregate::{PieSlices, PieSpec, ScatterSpec};
use crate::state::AppState;

/// Arc resolution of the pie, in segments per full turn.
const PIE_SEGMENTS: f64 = 96.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the dashboard heading and both charts.
pub fn charts(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(28.0)
                .color(Color32::from_rgb(0x50, 0x3D, 0x36)),
        );
    });
    ui.separator();

    let charts = match (&state.dataset, &state.charts) {
        (Some(_), Some(charts)) => charts,
        (Some(_), None) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label("No chart for the current selection.");
            });
            return;
        }
        (None, _) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a launch records file  (File → Open…)");
            });
            return;
        }
    };

    let chart_height = (ui.available_height() / 2.0 - 40.0).max(120.0);
    pie_chart(ui, &charts.pie, state.site_colors.as_ref(), chart_height);
    ui.add_space(8.0);
    scatter_chart(ui, &charts.scatter, state.booster_colors.as_ref(), chart_height);
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, pie: &PieSpec, site_colors: Option<&ColorMap>, height: f32) {
    ui.strong(&pie.title);

    let total = pie.total();
    if total == 0 {
        ui.label(RichText::new("No launches to show.").italics().weak());
        return;
    }

    // Slice colours: sites from the dataset-wide map, outcomes fixed.
    let colors: Vec<Color32> = match &pie.slices {
        PieSlices::SuccessesBySite(by_site) => by_site
            .keys()
            .map(|site| site_colors.map_or(Color32::GRAY, |m| m.color_for(site)))
            .collect(),
        PieSlices::OutcomeCounts(by_outcome) => {
            by_outcome.keys().map(|o| outcome_color(*o)).collect()
        }
    };

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            let mut start = FRAC_PI_2;
            for ((label, value), color) in pie.labeled_slices().into_iter().zip(colors) {
                if value == 0 {
                    continue;
                }
                let fraction = value as f64 / total as f64;
                let sweep = fraction * TAU;

                for wedge in wedge_polygons(start, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge))
                            .name(&label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", fraction * 100.0))
                        .color(Color32::WHITE)
                        .strong(),
                ));
                start -= sweep;
            }
        });
}

/// Unit-radius wedge from angle `start` sweeping clockwise by `sweep`
/// radians, split so every polygon spans at most a quarter turn and stays
/// convex.
fn wedge_polygons(start: f64, sweep: f64) -> Vec<Vec<[f64; 2]>> {
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let piece_sweep = sweep / pieces as f64;
    let steps = ((piece_sweep / TAU) * PIE_SEGMENTS).ceil().max(1.0) as usize;

    (0..pieces)
        .map(|p| {
            let from = start - p as f64 * piece_sweep;
            let mut points = Vec::with_capacity(steps + 2);
            points.push([0.0, 0.0]);
            for s in 0..=steps {
                let angle = from - piece_sweep * s as f64 / steps as f64;
                points.push([angle.cos(), angle.sin()]);
            }
            points
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

fn scatter_chart(
    ui: &mut Ui,
    scatter: &ScatterSpec,
    booster_colors: Option<&ColorMap>,
    height: f32,
) {
    ui.strong(&scatter.title);

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in scatter.series() {
                let color = booster_colors.map_or(Color32::LIGHT_BLUE, |m| m.color_for(category));
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(category)
                        .color(color)
                        .radius(4.0),
                );
            }
        });

    if scatter.points.is_empty() {
        ui.label(
            RichText::new("No launches in the selected payload range.")
                .italics()
                .weak(),
        );
    }
}
