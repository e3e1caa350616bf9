use crate::model::rps::{Choice, Player};
use crate::model::solution::Solution;

/// Discrete user actions the shell hands to the hub. Field contents are not
/// carried here; the hub reads them from the display when it handles the
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubCommand {
    SelectSolution(Solution),

    StartGame,
    SelectChoice { player: Player, choice: Choice },
    Replay,
    QuitGame,

    GenerateTable,

    Encrypt,
    Decrypt,
}
