use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Short tag used in log lines and labels ("P1", "P2").
    pub fn tag(self) -> &'static str {
        match self {
            Player::One => "P1",
            Player::Two => "P2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Position in the Rock → Paper → Scissors cycle. Each choice beats the
    /// one ranked directly below it, modulo 3.
    pub fn rank(self) -> u8 {
        match self {
            Choice::Rock => 0,
            Choice::Paper => 1,
            Choice::Scissors => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a player's choice slot currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceView {
    /// Nothing picked yet this round.
    Waiting,
    /// Picked, but concealed until the other player picks too.
    Hidden,
    Revealed(Choice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RpsScreen {
    #[default]
    Login,
    Game,
    Postgame,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Tie,
    Winner(Player),
}

impl RoundOutcome {
    pub fn of(p1: Choice, p2: Choice) -> Self {
        let diff = (i16::from(p1.rank()) - i16::from(p2.rank())).rem_euclid(3);
        match diff {
            0 => RoundOutcome::Tie,
            1 => RoundOutcome::Winner(Player::One),
            _ => RoundOutcome::Winner(Player::Two),
        }
    }
}

/// A fully resolved round: both choices and who took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub player_one: Choice,
    pub player_two: Choice,
    pub outcome: RoundOutcome,
}

impl RoundResult {
    pub fn resolve(player_one: Choice, player_two: Choice) -> Self {
        Self {
            player_one,
            player_two,
            outcome: RoundOutcome::of(player_one, player_two),
        }
    }

    pub fn choice_of(&self, player: Player) -> Choice {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}
