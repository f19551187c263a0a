use eframe::egui::{self, Color32, RichText, Ui};

use crate::app::QUIT_SHORTCUT;
use crate::state::{AppState, ChartKind, SortDirection};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets and statistics
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Selection");
    ui.separator();

    if state.entities.is_empty() {
        ui.label("No dataset loaded.");
        return;
    }

    // Edit a copy; the state recomputes its view only if something changed.
    let mut selection = state.selection.clone();

    ui.strong("Entity");
    let current = selection.entity.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("entity")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for entity in &state.entities {
                if ui.selectable_label(current == *entity, entity).clicked() {
                    selection.entity = Some(entity.clone());
                }
            }
        });
    ui.separator();

    ui.strong("Chart type");
    ui.radio_value(&mut selection.chart, ChartKind::Bars, "Bars");
    ui.radio_value(&mut selection.chart, ChartKind::Lines, "Lines");
    ui.separator();

    ui.checkbox(&mut selection.sorted, "Sort by value");
    ui.add_enabled_ui(selection.sorted, |ui: &mut Ui| {
        ui.radio_value(&mut selection.direction, SortDirection::Ascending, "Ascending");
        ui.radio_value(&mut selection.direction, SortDirection::Descending, "Descending");
    });

    state.set_selection(selection);
    ui.separator();

    ui.strong("Statistics");
    match &state.summary {
        Some(summary) => {
            ui.label(RichText::new(summary.to_string()).monospace());
        }
        None => {
            ui.label("No statistics available.");
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Import…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let quit = egui::Button::new("Quit")
                .shortcut_text(ui.ctx().format_shortcut(&QUIT_SHORTCUT));
            if ui.add(quit).clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("Help", |ui: &mut Ui| {
            if ui.button("About").clicked() {
                state.show_about = true;
                ui.close_menu();
            }
            if ui.button("Data info").clicked() {
                state.show_info = true;
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = ds
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!("{} rows loaded from {source}", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Dialog windows
// ---------------------------------------------------------------------------

/// Render the About and Data info windows when open.
pub fn windows(ctx: &egui::Context, state: &mut AppState) {
    egui::Window::new("About")
        .open(&mut state.show_about)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.label(format!("Emission Viewer {}", env!("CARGO_PKG_VERSION")));
            ui.label(env!("CARGO_PKG_DESCRIPTION"));
        });

    let info_text = match &state.info {
        Some(info) => info.to_string(),
        None => "There is no data to report.".to_string(),
    };
    let ignored = state
        .dataset
        .as_ref()
        .filter(|ds| !ds.ignored_columns.is_empty())
        .map(|ds| ds.ignored_columns.join(", "));

    egui::Window::new("Data info")
        .open(&mut state.show_info)
        .collapsible(false)
        .show(ctx, |ui: &mut Ui| {
            ui.label(RichText::new(info_text).monospace());
            if let Some(ignored) = ignored {
                ui.label(format!("Ignored source columns: {ignored}"));
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Import emissions")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.import(&path);
    }
}
