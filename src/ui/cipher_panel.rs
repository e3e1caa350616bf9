use eframe::egui;

use midtown_hub::model::message::MessageRegion;
use midtown_hub::HubCommand;

use super::app::status_label;
use super::settings::HubSettings;
use super::view::HubView;

pub fn draw_cipher_panel(
    ui: &mut egui::Ui,
    view: &mut HubView,
    settings: &HubSettings,
    commands: &mut Vec<HubCommand>,
) {
    ui.columns(2, |columns| {
        columns[0].label(egui::RichText::new("Plaintext").size(24.0));
        columns[0].add(
            egui::TextEdit::multiline(&mut view.plaintext)
                .desired_rows(12)
                .desired_width(f32::INFINITY),
        );

        columns[1].label(egui::RichText::new("Ciphertext").size(24.0));
        columns[1].add(
            egui::TextEdit::multiline(&mut view.ciphertext)
                .desired_rows(12)
                .desired_width(f32::INFINITY),
        );
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Cipher Key:").size(20.0));
        ui.add(
            egui::TextEdit::singleline(&mut view.cipher_key)
                .hint_text("Enter key")
                .char_limit(settings.entry_max_len)
                .desired_width(180.0),
        );
    });

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        status_label(ui, settings, view.status(MessageRegion::Cipher));
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.add(egui::Button::new("Encrypt").min_size(egui::vec2(140.0, 50.0))).clicked() {
                commands.push(HubCommand::Encrypt);
            }
            if ui.add(egui::Button::new("Decrypt").min_size(egui::vec2(140.0, 50.0))).clicked() {
                commands.push(HubCommand::Decrypt);
            }
        });
    });
}
