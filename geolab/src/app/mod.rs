mod components;
pub mod config;
mod events;

use self::components::{Calculator, Plotter};
use app_core::event::{apply_events, EventQueue};
use config::Config;
use events::{ResetPlotter, SelectFigure, SetPlotterMode};

pub struct EguiApp {
    config: Config,
    plotter: Plotter,
    calculator: Calculator,
    shortcuts_modal_open: bool,
    ui_selection: UISelection,
    event_queue: EventQueue<Self>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum UISelection {
    Plotter,
    Calculator,
}

impl UISelection {
    fn next(&self) -> Self {
        match self {
            UISelection::Plotter => Self::Calculator,
            UISelection::Calculator => Self::Plotter,
        }
    }
}

impl EguiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: Config) -> Self {
        Self {
            plotter: Plotter::new(config.plotter_settings()),
            calculator: Calculator::new(config.diagram_settings()),
            config,
            shortcuts_modal_open: false,
            ui_selection: UISelection::Plotter,
            event_queue: EventQueue::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Apply everything the UI queued during the previous frame. Returns the
    /// number of events that succeeded.
    pub fn run_events(&mut self) -> usize {
        let events = self.event_queue.take_events();
        if events.is_empty() {
            return 0;
        }
        apply_events(events, self)
    }

    /// Bring both tools back to their initial state.
    fn reset_state(&mut self) {
        self.event_queue.discard_events();
        self.event_queue.queue_event(Box::new(ResetPlotter::new()));
        let key = self.calculator.active().key().to_string();
        self.event_queue.queue_event(Box::new(SelectFigure::new(key)));
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_events();

        let mut should_quit = false;

        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            // Cycle main window view.
            if i.key_pressed(egui::Key::F3) {
                self.ui_selection = self.ui_selection.next();
            }
            // Cycle plotter mode.
            if i.key_pressed(egui::Key::F4) {
                let mode = self.plotter.state.mode().next();
                self.event_queue
                    .queue_event(Box::new(SetPlotterMode::new(mode)));
            }
            if i.key_pressed(egui::Key::F10) {
                should_quit = true;
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.central_panel(ui, ctx);
        });

        // Events queued while drawing are applied in the next frame.
        if !self.event_queue.is_empty() {
            ctx.request_repaint();
        }

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl EguiApp {
    fn central_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        use UISelection as U;
        match self.ui_selection {
            U::Plotter => self.plotter.render(&mut self.event_queue, ui),
            U::Calculator => self.calculator.render(&mut self.event_queue, ui, ctx),
        }
    }

    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Zurücksetzen").clicked() {
                    self.reset_state();
                    ui.close_menu();
                }
                if ui.button("Beenden").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // Selection of ui view.
            ui.menu_button("Ansicht", |ui| {
                ui.selectable_value(
                    &mut self.ui_selection,
                    UISelection::Plotter,
                    "Koordinatenebene",
                );
                ui.selectable_value(
                    &mut self.ui_selection,
                    UISelection::Calculator,
                    "Figurenrechner",
                );
            });

            ui.toggle_value(&mut self.shortcuts_modal_open, "Hilfe (F1)");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Tastenkürzel");
                    ui.separator();
                    ui.label("F1 = Tastenkürzel anzeigen");
                    ui.separator();
                    ui.label("F3 = Ansicht wechseln");
                    ui.separator();
                    ui.label("F4 = Modus wechseln (Punkt setzen / Strecke messen)");
                    ui.separator();
                    ui.label("F10 = Programm beenden");
                    ui.separator();
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}
