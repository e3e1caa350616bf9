use eframe::egui;

use midtown_hub::model::message::MessageRegion;
use midtown_hub::model::rps::{Choice, ChoiceView, Player, RpsScreen};
use midtown_hub::HubCommand;

use super::app::status_label;
use super::settings::HubSettings;
use super::view::HubView;

pub fn draw_rps_panel(
    ui: &mut egui::Ui,
    view: &mut HubView,
    settings: &HubSettings,
    commands: &mut Vec<HubCommand>,
) {
    match view.rps_screen {
        RpsScreen::Login => draw_login(ui, view, settings, commands),
        RpsScreen::Game | RpsScreen::Postgame => draw_game(ui, view, settings, commands),
    }
}

/* =========================
   Login
   ========================= */

fn draw_login(
    ui: &mut egui::Ui,
    view: &mut HubView,
    settings: &HubSettings,
    commands: &mut Vec<HubCommand>,
) {
    let mut start = false;

    ui.add_space(20.0);
    ui.columns(2, |columns| {
        for (column, player) in columns.iter_mut().zip(Player::BOTH) {
            column.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("PLAYER {}", player.index() + 1))
                        .size(22.0)
                        .strong(),
                );

                let response = ui.add(
                    egui::TextEdit::singleline(&mut view.player_names[player.index()])
                        .hint_text(format!("{} Name here", player.tag()))
                        .char_limit(settings.entry_max_len)
                        .desired_width(180.0),
                );

                // Enter in either name entry starts the game
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    start = true;
                }
            });
        }
    });

    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        status_label(ui, settings, view.status(MessageRegion::RpsLogin));
        ui.add_space(10.0);
        if ui.add(egui::Button::new("Start Game").min_size(egui::vec2(140.0, 50.0))).clicked() {
            start = true;
        }
    });

    if start {
        commands.push(HubCommand::StartGame);
    }
}

/* =========================
   Game / Postgame
   ========================= */

fn draw_game(
    ui: &mut egui::Ui,
    view: &HubView,
    settings: &HubSettings,
    commands: &mut Vec<HubCommand>,
) {
    ui.add_space(10.0);
    ui.columns(3, |columns| {
        draw_player(&mut columns[0], view, Player::One, commands);
        columns[1].vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(egui::RichText::new("Vs").size(33.0).strong());
        });
        draw_player(&mut columns[2], view, Player::Two, commands);
    });

    ui.add_space(10.0);
    ui.separator();

    ui.vertical_centered(|ui| match view.rps_screen {
        RpsScreen::Postgame => {
            status_label(ui, settings, view.status(MessageRegion::RpsPostgame));
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.add(egui::Button::new("Quit Game").min_size(egui::vec2(140.0, 50.0))).clicked() {
                    commands.push(HubCommand::QuitGame);
                }
                if ui.add(egui::Button::new("Play Again").min_size(egui::vec2(140.0, 50.0))).clicked() {
                    commands.push(HubCommand::Replay);
                }
            });
        }
        _ => {
            status_label(ui, settings, view.status(MessageRegion::RpsGame));
            ui.add_space(10.0);
            if ui.add(egui::Button::new("Quit Game").min_size(egui::vec2(140.0, 50.0))).clicked() {
                commands.push(HubCommand::QuitGame);
            }
        }
    });
}

fn draw_player(ui: &mut egui::Ui, view: &HubView, player: Player, commands: &mut Vec<HubCommand>) {
    let board = view.player(player);

    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(&board.name).size(22.0).strong());
        ui.label(format!("Score: {}", board.score));

        ui.add_space(5.0);
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(180.0, 180.0));
                ui.centered_and_justified(|ui| {
                    let slot = match board.choice {
                        ChoiceView::Waiting => egui::RichText::new("Waiting for input...").size(14.0),
                        ChoiceView::Hidden => egui::RichText::new("?").size(50.0).strong(),
                        ChoiceView::Revealed(choice) => {
                            egui::RichText::new(choice.label()).size(28.0).strong()
                        }
                    };
                    ui.label(slot);
                });
            });

        ui.add_space(5.0);
        ui.horizontal(|ui| {
            for choice in Choice::ALL {
                if ui
                    .add_enabled(board.enabled, egui::Button::new(choice.label()))
                    .clicked()
                {
                    commands.push(HubCommand::SelectChoice { player, choice });
                }
            }
        });
    });
}
