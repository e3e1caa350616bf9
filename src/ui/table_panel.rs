use eframe::egui;

use midtown_hub::model::input::TableBound;
use midtown_hub::model::message::MessageRegion;
use midtown_hub::HubCommand;

use super::app::status_label;
use super::settings::HubSettings;
use super::view::HubView;

pub fn draw_table_panel(
    ui: &mut egui::Ui,
    view: &mut HubView,
    settings: &HubSettings,
    commands: &mut Vec<HubCommand>,
) {
    let mut generate = false;

    ui.columns(2, |columns| {
        // ---------- Inputs ----------
        columns[0].vertical_centered(|ui| {
            ui.label(egui::RichText::new("Username").size(24.0));
            let user = ui.add(
                egui::TextEdit::singleline(&mut view.username)
                    .hint_text("Enter name")
                    .char_limit(settings.entry_max_len)
                    .desired_width(180.0),
            );

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Multiplier").size(24.0));
            let multiplier = ui.add(
                egui::TextEdit::singleline(&mut view.multiplier)
                    .hint_text("Enter number")
                    .char_limit(settings.entry_max_len)
                    .desired_width(180.0),
            );

            let entered = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if entered && (user.lost_focus() || multiplier.lost_focus()) {
                generate = true;
            }

            ui.add_space(10.0);
            ui.label(egui::RichText::new("Multiplicand Range").size(24.0));
            ui.add(egui::Slider::new(
                &mut view.multiplicand,
                TableBound::MIN..=TableBound::MAX,
            ));

            ui.add_space(20.0);
            status_label(ui, settings, view.status(MessageRegion::Table));
            ui.add_space(10.0);
            if ui.add(egui::Button::new("Generate").min_size(egui::vec2(140.0, 50.0))).clicked() {
                generate = true;
            }
        });

        // ---------- Output ----------
        egui::ScrollArea::both()
            .id_salt("table_output")
            .show(&mut columns[1], |ui| {
                ui.label(egui::RichText::new(&view.table_text).monospace());
            });
    });

    if generate {
        commands.push(HubCommand::GenerateTable);
    }
}
