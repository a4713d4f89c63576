use std::time::Duration;

use egui::RichText;

use crate::models::settings::Settings;
use crate::services::config;
use crate::services::gateway::worker::{GatewayCommand, GatewayWorker};
use crate::services::gateway::RestGateway;
use crate::services::store::EventStore;
use crate::ui_egui::event_dialog::{render_event_dialog, EventDialogResult, EventDialogState};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{MonthView, MonthViewAction};
use crate::utils::date::DisplayMonth;

pub struct SchedulerApp {
    settings: Settings,
    store: EventStore,
    worker: GatewayWorker,
    display_month: DisplayMonth,
    /// Some = dialog open; `event_id` inside discriminates create vs edit
    dialog_state: Option<EventDialogState>,
    theme: CalendarTheme,
}

impl SchedulerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> anyhow::Result<Self> {
        let settings = config::load();
        let gateway = RestGateway::new(
            &settings.api_base_url,
            Duration::from_secs(settings.request_timeout_secs),
        )?;
        let worker = GatewayWorker::spawn(gateway);

        // Initial load; the result is drained on the first frames
        worker.submit(GatewayCommand::Refresh);

        let theme = CalendarTheme::for_mode(settings.dark_mode);
        Self::apply_visuals(&cc.egui_ctx, settings.dark_mode);

        Ok(Self {
            settings,
            store: EventStore::new(),
            worker,
            display_month: DisplayMonth::current(),
            dialog_state: None,
            theme,
        })
    }

    fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
        ctx.set_visuals(if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    /// Pull refreshed collections off the worker channel. Each result
    /// replaces the cache wholesale; with overlapping requests the last
    /// one drained wins.
    fn drain_worker_results(&mut self, ctx: &egui::Context) {
        while let Some(result) = self.worker.try_recv_events() {
            self.store.replace(result);
            ctx.request_repaint();
        }
    }

    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("< Prev").clicked() {
                self.display_month = self.display_month.previous();
            }
            if ui.button("Today").clicked() {
                self.display_month = DisplayMonth::current();
            }
            if ui.button("Next >").clicked() {
                self.display_month = self.display_month.next();
            }

            ui.add_space(12.0);
            ui.heading(RichText::new(self.display_month.title()).size(18.0));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if self.settings.dark_mode {
                    "Light mode"
                } else {
                    "Dark mode"
                };
                if ui.button(label).clicked() {
                    self.settings.dark_mode = !self.settings.dark_mode;
                    self.theme = CalendarTheme::for_mode(self.settings.dark_mode);
                    Self::apply_visuals(ui.ctx(), self.settings.dark_mode);
                }
            });
        });
    }

    fn render_dialog(&mut self, ctx: &egui::Context) {
        let mut close_dialog = false;

        if let Some(state) = self.dialog_state.as_mut() {
            match render_event_dialog(ctx, state) {
                EventDialogResult::Save => {
                    let payload = state.payload();
                    let command = match state.event_id {
                        Some(id) => GatewayCommand::Update(id, payload),
                        None => GatewayCommand::Create(payload),
                    };
                    self.worker.submit(command);
                    close_dialog = true;
                }
                EventDialogResult::Delete(id) => {
                    self.worker.submit(GatewayCommand::Delete(id));
                    close_dialog = true;
                }
                EventDialogResult::Cancel => close_dialog = true,
                EventDialogResult::None => {}
            }
        }

        // Save, delete and cancel all discard the draft
        if close_dialog {
            self.dialog_state = None;
        }
    }
}

impl eframe::App for SchedulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker_results(ctx);

        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new("Baseball Scheduling").size(24.0).strong());
                ui.label(
                    RichText::new("Organize your games and events with ease!")
                        .color(self.theme.text_muted),
                );
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_navigation(ui);
            ui.add_space(8.0);

            let action = MonthView::show(ui, self.display_month, &self.store, &self.theme);

            // Grid clicks only open a dialog when none is already open
            if self.dialog_state.is_none() {
                match action {
                    MonthViewAction::CreateEvent(date) => {
                        self.dialog_state = Some(EventDialogState::new_event(date));
                    }
                    MonthViewAction::EditEvent(_, event) => {
                        self.dialog_state = Some(EventDialogState::from_event(&event));
                    }
                    MonthViewAction::None => {}
                }
            }
        });

        self.render_dialog(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = config::save(&self.settings) {
            log::warn!("Failed to persist settings on exit: {:#}", err);
        }
    }
}
