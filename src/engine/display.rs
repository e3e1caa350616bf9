//! Capabilities the solution logic needs from whatever renders it.
//!
//! Each engine asks only for the traits it actually writes to, so tests can
//! hand in a recorder instead of a window.

use crate::model::input::{InputField, Slider};
use crate::model::message::{MessageRegion, OutputRegion, StatusMessage};
use crate::model::rps::{ChoiceView, Player, RpsScreen};

pub trait InputSource {
    /// Current text of a field; empty when blank.
    fn field_text(&self, field: InputField) -> String;

    /// Current slider reading, already clamped by the widget.
    fn slider_value(&self, slider: Slider) -> i64;
}

pub trait StatusSink {
    fn show_status(&mut self, region: MessageRegion, message: StatusMessage);
}

pub trait TextSink {
    /// Replaces the contents of `region`.
    fn write_output(&mut self, region: OutputRegion, text: &str);
}

pub trait PlayerBoard {
    fn set_player_name(&mut self, player: Player, name: &str);
    fn set_player_score(&mut self, player: Player, score: u32);
    fn set_choice_view(&mut self, player: Player, view: ChoiceView);
    fn set_choice_enabled(&mut self, player: Player, enabled: bool);
}

pub trait ScreenSwitch {
    fn switch_screen(&mut self, screen: RpsScreen);
}

/// Everything the hub routes through. Only the hub itself takes this.
pub trait HubDisplay: InputSource + StatusSink + TextSink + PlayerBoard + ScreenSwitch {}

impl<T> HubDisplay for T where T: InputSource + StatusSink + TextSink + PlayerBoard + ScreenSwitch {}
