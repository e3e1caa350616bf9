use eframe::egui;

use midtown_hub::model::message::StatusMessage;
use midtown_hub::model::solution::Solution;
use midtown_hub::{Hub, HubCommand};

use super::cipher_panel::draw_cipher_panel;
use super::menu_panel::draw_menu_panel;
use super::rps_panel::draw_rps_panel;
use super::settings::HubSettings;
use super::table_panel::draw_table_panel;
use super::view::HubView;

/* =========================
   App
   ========================= */

pub struct HubApp {
    hub: Hub,
    view: HubView,
    settings: HubSettings,
}

impl HubApp {
    pub fn new(settings: HubSettings) -> Self {
        Self {
            hub: Hub::new(),
            view: HubView::new(settings.default_bound),
            settings,
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for HubApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.scale());

        // Widgets only queue commands; the hub runs them once drawing is done.
        let mut commands = Vec::new();
        let selected = self.hub.selected();

        /* MENU */
        draw_menu_panel(ctx, selected, &mut commands);

        /* SOLUTION */
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(solution) = selected else {
                draw_landing(ui);
                return;
            };

            draw_title(ui, solution);
            egui::ScrollArea::vertical().show(ui, |ui| match solution {
                Solution::RockPaperScissors => {
                    draw_rps_panel(ui, &mut self.view, &self.settings, &mut commands)
                }
                Solution::MultiplicationTable => {
                    draw_table_panel(ui, &mut self.view, &self.settings, &mut commands)
                }
                Solution::CaesarCipher => {
                    draw_cipher_panel(ui, &mut self.view, &self.settings, &mut commands)
                }
            });
        });

        for command in commands {
            self.hub.handle(command, &mut self.view);
        }
    }
}

/* =========================
   UI Helpers
   ========================= */

pub fn status_label(ui: &mut egui::Ui, settings: &HubSettings, message: Option<&StatusMessage>) {
    if let Some(message) = message {
        ui.label(
            egui::RichText::new(&message.text)
                .size(14.0)
                .color(settings.color(message.severity)),
        );
    }
}

fn draw_title(ui: &mut egui::Ui, solution: Solution) {
    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.label(egui::RichText::new(solution.title()).size(30.0).strong());
    });
    ui.separator();
}

fn draw_landing(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading("MidTown IT Training Solutions");
        ui.add_space(10.0);
        ui.label("Pick a solution from the menu:");
        ui.add_space(10.0);
        for solution in Solution::ALL {
            ui.label(format!("• {}", solution.title()));
        }
    });
}
