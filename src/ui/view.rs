use std::collections::HashMap;

use midtown_hub::engine::{cipher, rps, table};
use midtown_hub::model::input::{InputField, Slider, TableBound};
use midtown_hub::model::message::{MessageRegion, OutputRegion, StatusMessage};
use midtown_hub::model::rps::{ChoiceView, Player, RpsScreen};
use midtown_hub::{InputSource, PlayerBoard, ScreenSwitch, StatusSink, TextSink};

#[derive(Debug, Clone)]
pub struct PlayerView {
    pub name: String,
    pub score: u32,
    pub choice: ChoiceView,
    pub enabled: bool,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            name: String::new(),
            score: 0,
            choice: ChoiceView::Waiting,
            enabled: true,
        }
    }
}

/// Everything the panels draw: the editable inputs and whatever the engines
/// last wrote.
#[derive(Debug, Clone)]
pub struct HubView {
    /* -------- Inputs -------- */
    pub player_names: [String; 2],
    pub username: String,
    pub multiplier: String,
    pub multiplicand: u8,
    pub cipher_key: String,
    pub plaintext: String,
    pub ciphertext: String,

    /* -------- Outputs -------- */
    pub table_text: String,
    pub players: [PlayerView; 2],
    pub rps_screen: RpsScreen,
    messages: HashMap<MessageRegion, StatusMessage>,
}

impl HubView {
    pub fn new(default_bound: u8) -> Self {
        let mut messages = HashMap::new();
        messages.insert(MessageRegion::RpsLogin, StatusMessage::info(rps::LOGIN_WELCOME));
        messages.insert(MessageRegion::RpsGame, StatusMessage::info(rps::GAME_PROMPT));
        messages.insert(MessageRegion::Table, StatusMessage::info(table::WELCOME));
        messages.insert(MessageRegion::Cipher, StatusMessage::info(cipher::WELCOME));

        Self {
            player_names: [String::new(), String::new()],
            username: String::new(),
            multiplier: String::new(),
            multiplicand: TableBound::clamped(i64::from(default_bound)).get(),
            cipher_key: String::new(),
            plaintext: String::new(),
            ciphertext: String::new(),
            table_text: String::new(),
            players: [PlayerView::default(), PlayerView::default()],
            rps_screen: RpsScreen::Login,
            messages,
        }
    }

    pub fn status(&self, region: MessageRegion) -> Option<&StatusMessage> {
        self.messages.get(&region)
    }

    pub fn player(&self, player: Player) -> &PlayerView {
        &self.players[player.index()]
    }
}

impl InputSource for HubView {
    fn field_text(&self, field: InputField) -> String {
        match field {
            InputField::Player1Name => self.player_names[0].clone(),
            InputField::Player2Name => self.player_names[1].clone(),
            InputField::Username => self.username.clone(),
            InputField::Multiplier => self.multiplier.clone(),
            InputField::CipherKey => self.cipher_key.clone(),
            InputField::Plaintext => self.plaintext.clone(),
            InputField::Ciphertext => self.ciphertext.clone(),
        }
    }

    fn slider_value(&self, slider: Slider) -> i64 {
        match slider {
            Slider::Multiplicand => i64::from(self.multiplicand),
        }
    }
}

impl StatusSink for HubView {
    fn show_status(&mut self, region: MessageRegion, message: StatusMessage) {
        self.messages.insert(region, message);
    }
}

impl TextSink for HubView {
    fn write_output(&mut self, region: OutputRegion, text: &str) {
        let target = match region {
            OutputRegion::Table => &mut self.table_text,
            OutputRegion::Plaintext => &mut self.plaintext,
            OutputRegion::Ciphertext => &mut self.ciphertext,
        };
        target.clear();
        target.push_str(text);
    }
}

impl PlayerBoard for HubView {
    fn set_player_name(&mut self, player: Player, name: &str) {
        self.players[player.index()].name = name.to_string();
    }

    fn set_player_score(&mut self, player: Player, score: u32) {
        self.players[player.index()].score = score;
    }

    fn set_choice_view(&mut self, player: Player, view: ChoiceView) {
        self.players[player.index()].choice = view;
    }

    fn set_choice_enabled(&mut self, player: Player, enabled: bool) {
        self.players[player.index()].enabled = enabled;
    }
}

impl ScreenSwitch for HubView {
    fn switch_screen(&mut self, screen: RpsScreen) {
        // Login always starts from empty name entries
        if screen == RpsScreen::Login {
            for name in &mut self.player_names {
                name.clear();
            }
        }
        self.rps_screen = screen;
    }
}
