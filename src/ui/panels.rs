use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{SiteSelection, ALL_SITES};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection controls
// ---------------------------------------------------------------------------

/// Render the site dropdown and the payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone what we need so we can mutate state afterwards.
    let sites: Vec<String> = dataset.sites().iter().map(str::to_string).collect();
    let (min_payload, max_payload) = (dataset.min_payload(), dataset.max_payload());

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(state.site.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.site == SiteSelection::All, "All Sites")
                .clicked()
            {
                picked = Some(ALL_SITES.to_string());
            }
            for site in &sites {
                if ui
                    .selectable_label(state.site.value() == site.as_str(), site)
                    .clicked()
                {
                    picked = Some(site.clone());
                }
            }
        });
    if let Some(value) = picked {
        state.select_site(&value);
    }

    ui.add_space(12.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let step = state.config.payload_step;

    let mut low = state.payload_low;
    if ui
        .add(
            egui::Slider::new(&mut low, min_payload..=max_payload)
                .step_by(step)
                .text("From"),
        )
        .changed()
    {
        state.set_payload_low(low);
    }

    let mut high = state.payload_high;
    if ui
        .add(
            egui::Slider::new(&mut high, min_payload..=max_payload)
                .step_by(step)
                .text("To"),
        )
        .changed()
    {
        state.set_payload_high(high);
    }

    ui.label(
        RichText::new(format!("{min_payload:.0} – {max_payload:.0} kg in dataset"))
            .small()
            .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let shown = state
                .charts
                .as_ref()
                .map(|c| c.scatter.points.len())
                .unwrap_or(0);
            ui.label(format!("{} launches loaded, {} in range", ds.len(), shown));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "tsv", "tab", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("Tab separated", &["tsv", "tab"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
