//! A display that records everything the engines write to it.

#![allow(dead_code)]

use std::collections::HashMap;

use midtown_hub::model::input::{InputField, Slider};
use midtown_hub::model::message::{MessageRegion, OutputRegion, StatusMessage};
use midtown_hub::model::rps::{ChoiceView, Player, RpsScreen};
use midtown_hub::{InputSource, PlayerBoard, ScreenSwitch, StatusSink, TextSink};

#[derive(Debug, Default)]
pub struct Recorder {
    pub fields: HashMap<InputField, String>,
    pub multiplicand: i64,

    pub statuses: Vec<(MessageRegion, StatusMessage)>,
    pub outputs: HashMap<OutputRegion, String>,
    pub names: [String; 2],
    pub scores: [u32; 2],
    pub views: [Option<ChoiceView>; 2],
    pub enabled: [bool; 2],
    pub screens: Vec<RpsScreen>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            multiplicand: 12,
            ..Default::default()
        }
    }

    pub fn with(mut self, field: InputField, text: &str) -> Self {
        self.set(field, text);
        self
    }

    pub fn set(&mut self, field: InputField, text: &str) {
        self.fields.insert(field, text.to_string());
    }

    pub fn last_status(&self, region: MessageRegion) -> Option<&StatusMessage> {
        self.statuses
            .iter()
            .rev()
            .find(|(r, _)| *r == region)
            .map(|(_, m)| m)
    }

    pub fn output(&self, region: OutputRegion) -> &str {
        self.outputs.get(&region).map(String::as_str).unwrap_or("")
    }

    pub fn screen(&self) -> Option<RpsScreen> {
        self.screens.last().copied()
    }
}

impl InputSource for Recorder {
    fn field_text(&self, field: InputField) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn slider_value(&self, slider: Slider) -> i64 {
        match slider {
            Slider::Multiplicand => self.multiplicand,
        }
    }
}

impl StatusSink for Recorder {
    fn show_status(&mut self, region: MessageRegion, message: StatusMessage) {
        self.statuses.push((region, message));
    }
}

impl TextSink for Recorder {
    fn write_output(&mut self, region: OutputRegion, text: &str) {
        self.outputs.insert(region, text.to_string());
    }
}

impl PlayerBoard for Recorder {
    fn set_player_name(&mut self, player: Player, name: &str) {
        self.names[player.index()] = name.to_string();
    }

    fn set_player_score(&mut self, player: Player, score: u32) {
        self.scores[player.index()] = score;
    }

    fn set_choice_view(&mut self, player: Player, view: ChoiceView) {
        self.views[player.index()] = Some(view);
    }

    fn set_choice_enabled(&mut self, player: Player, enabled: bool) {
        self.enabled[player.index()] = enabled;
    }
}

impl ScreenSwitch for Recorder {
    fn switch_screen(&mut self, screen: RpsScreen) {
        self.screens.push(screen);
    }
}
