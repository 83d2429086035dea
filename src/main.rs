//! Map Layer Editor.
//!
//! Layer-Liste einer GIS-Karte: Overlays, Layer und Styles als Baum mit
//! Selektion, Drag-and-Drop-Umsortierung und Datei-Import.

use std::path::PathBuf;

use eframe::egui;
use map_layer_editor::core::sample::sample_document;
use map_layer_editor::{ui, AppController, AppIntent, AppState, EditorOptions, StringResources};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Map Layer Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Dateien von der Kommandozeile werden beim Start importiert
        let startup_files: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 720.0])
                .with_drag_and_drop(true)
                .with_title("Map Layer Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Map Layer Editor",
            options,
            Box::new(move |_cc| Ok(Box::new(EditorApp::new(startup_files)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
}

impl EditorApp {
    fn new(startup_files: Vec<PathBuf>) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        let strings = StringResources::load_or_default(editor_options.strings_path.as_deref());

        let mut state = AppState::with_document(sample_document());
        state.apply_options(editor_options);
        state.strings = strings;

        let mut app = Self {
            state,
            controller: AppController::new(),
        };
        if !startup_files.is_empty() {
            app.process_events(vec![AppIntent::LayerFilesSelected {
                target: None,
                paths: startup_files,
            }]);
        }
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ClickTimerTick { .. }));

        self.process_events(events);
        self.drain_refresh_requests();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_layer_panel(ctx, &self.state));
        events.extend(ui::collect_keyboard_intents(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_style_editor(ctx, &self.state));
        events.extend(ui::show_message(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            let label = match self.state.document.current_extent {
                Some(extent) => format!(
                    "{} ({:.2} x {:.2})",
                    self.state.document.name,
                    extent.width(),
                    extent.height()
                ),
                None => self.state.document.name.clone(),
            };
            ui.centered_and_justified(|ui| ui.label(label));
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Refresh-Anforderungen gehen an die Karten-Engine; hier werden sie nur protokolliert.
    fn drain_refresh_requests(&mut self) {
        for request in self.state.document.take_refresh_requests() {
            log::debug!("Karten-Refresh für {} Overlays", request.overlays.len());
        }
        if self.state.document.plugins_dirty {
            self.state.document.plugins_dirty = false;
            log::debug!("Plugin-Panels benachrichtigt");
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || self.state.drag.is_active() || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
        if !self.state.clicks.is_idle() {
            ctx.request_repaint_after(self.state.clicks.interval());
        }
    }
}
