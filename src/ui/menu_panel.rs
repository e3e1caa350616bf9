use eframe::egui;

use midtown_hub::model::solution::Solution;
use midtown_hub::HubCommand;

pub fn draw_menu_panel(
    ctx: &egui::Context,
    selected: Option<Solution>,
    commands: &mut Vec<HubCommand>,
) {
    egui::SidePanel::left("menu")
        .resizable(false)
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(30.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("MidTown IT").size(34.0).strong());
                ui.label(egui::RichText::new("Training Solutions App").size(18.0));
            });

            ui.add_space(20.0);
            ui.separator();

            for solution in Solution::ALL {
                let button = egui::Button::new(egui::RichText::new(solution.title()).size(15.0))
                    .selected(selected == Some(solution))
                    .min_size(egui::vec2(ui.available_width(), 50.0));

                if ui.add(button).clicked() {
                    commands.push(HubCommand::SelectSolution(solution));
                }
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(30.0);
                let exit = egui::Button::new(egui::RichText::new("Exit Application").strong())
                    .min_size(egui::vec2(220.0, 50.0));

                if ui.add(exit).clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
}
