use eframe::egui::{self, Key, KeyboardShortcut, Modifiers};

use crate::state::AppState;
use crate::ui::{panels, plot};

/// Ctrl+Q (Cmd+Q on macOS), also listed next to File → Quit.
pub const QUIT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Q);

/// Whether this frame's input asks to close the viewer. Consumes the shortcut.
pub fn quit_requested(ctx: &egui::Context) -> bool {
    ctx.input_mut(|i| i.consume_shortcut(&QUIT_SHORTCUT))
}

pub struct EmissionViewerApp {
    pub state: AppState,
}

impl EmissionViewerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for EmissionViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if quit_requested(ctx) {
            log::info!("Quit requested from keyboard");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // Selection + statistics; the chart takes the remaining space.
        egui::SidePanel::left("selection_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::emission_plot(ui, &self.state);
        });

        panels::windows(ctx, &mut self.state);
    }
}
