use log::{debug, info};

use crate::engine::cipher::{self, Direction};
use crate::engine::display::HubDisplay;
use crate::engine::protocol::HubCommand;
use crate::engine::rps::RpsEngine;
use crate::engine::table;
use crate::model::input::{InputField, Slider, TableBound};
use crate::model::solution::Solution;

/// Routes shell commands to the three solutions.
///
/// The table and cipher are stateless; the hub only keeps the RPS session
/// and which solution the menu has selected.
#[derive(Debug, Default)]
pub struct Hub {
    rps: RpsEngine,
    selected: Option<Solution>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rps(&self) -> &RpsEngine {
        &self.rps
    }

    pub fn selected(&self) -> Option<Solution> {
        self.selected
    }

    pub fn handle<D: HubDisplay>(&mut self, command: HubCommand, display: &mut D) {
        debug!("hub: {:?}", command);

        match command {
            HubCommand::SelectSolution(solution) => {
                if self.selected != Some(solution) {
                    info!("hub: showing {}", solution.title());
                }
                self.selected = Some(solution);
            }

            HubCommand::StartGame => {
                let p1 = display.field_text(InputField::Player1Name);
                let p2 = display.field_text(InputField::Player2Name);
                match self.rps.start_session(display, &p1, &p2) {
                    Ok(true) => {}
                    Ok(false) => debug!("hub: start ignored, session already running"),
                    Err(err) => debug!("hub: start rejected: {:?}", err.fields),
                }
            }

            HubCommand::SelectChoice { player, choice } => {
                self.rps.select_choice(display, player, choice);
            }

            HubCommand::Replay => {
                self.rps.replay(display);
            }

            HubCommand::QuitGame => {
                self.rps.quit(display);
            }

            HubCommand::GenerateTable => {
                let username = display.field_text(InputField::Username);
                let multiplier = display.field_text(InputField::Multiplier);
                let bound = TableBound::clamped(display.slider_value(Slider::Multiplicand));
                table::present(display, &username, &multiplier, bound);
            }

            HubCommand::Encrypt => {
                let key = display.field_text(InputField::CipherKey);
                let plaintext = display.field_text(InputField::Plaintext);
                cipher::present(display, Direction::Encrypt, &key, &plaintext);
            }

            HubCommand::Decrypt => {
                let key = display.field_text(InputField::CipherKey);
                let ciphertext = display.field_text(InputField::Ciphertext);
                cipher::present(display, Direction::Decrypt, &key, &ciphertext);
            }
        }
    }
}
