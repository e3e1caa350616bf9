use log::{debug, info};

use crate::engine::display::{PlayerBoard, ScreenSwitch, StatusSink};
use crate::model::message::{MessageRegion, StatusMessage};
use crate::model::rps::{
    Choice, ChoiceView, Player, RoundOutcome, RoundResult, RpsScreen,
};
use crate::model::validation::{FieldError, ValidationError, Validator};

pub const LOGIN_WELCOME: &str =
    "Welcome to the Rock Paper Scissors game\nPlease enter a name for P1 and P2";
pub const GAME_PROMPT: &str = "P1 and P2 make your selection\nNo Peaking!";
pub const QUIT_FAREWELL: &str = "Thank you for playing!\nPlease enter a name for P1 and P2";

/// Where the session is. Pending choices only exist while a round is open,
/// and a finished round always carries both choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpsState {
    Login,
    Game { pending: [Option<Choice>; 2] },
    Postgame { round: RoundResult },
}

impl RpsState {
    fn open_round() -> Self {
        RpsState::Game { pending: [None, None] }
    }

    pub fn screen(&self) -> RpsScreen {
        match self {
            RpsState::Login => RpsScreen::Login,
            RpsState::Game { .. } => RpsScreen::Game,
            RpsState::Postgame { .. } => RpsScreen::Postgame,
        }
    }
}

/// Two-player Rock Paper Scissors session.
#[derive(Debug, Clone)]
pub struct RpsEngine {
    names: [String; 2],
    scores: [u32; 2],
    state: RpsState,
}

impl Default for RpsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RpsEngine {
    pub fn new() -> Self {
        Self {
            names: [String::new(), String::new()],
            scores: [0, 0],
            state: RpsState::Login,
        }
    }

    pub fn state(&self) -> &RpsState {
        &self.state
    }

    pub fn screen(&self) -> RpsScreen {
        self.state.screen()
    }

    pub fn name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn pending_choice(&self, player: Player) -> Option<Choice> {
        match &self.state {
            RpsState::Game { pending } => pending[player.index()],
            _ => None,
        }
    }

    /* =========================
       Login → Game
       ========================= */

    /// Validates both names together and opens the first round. On failure
    /// the session is left exactly as it was.
    ///
    /// Returns `Ok(false)` when a session is already running and the request
    /// was ignored, like [`replay`](Self::replay) and [`quit`](Self::quit).
    pub fn start_session<D>(
        &mut self,
        display: &mut D,
        name1: &str,
        name2: &str,
    ) -> Result<bool, ValidationError>
    where
        D: StatusSink + PlayerBoard + ScreenSwitch,
    {
        if self.state != RpsState::Login {
            debug!("rps: start ignored in {:?}", self.screen());
            return Ok(false);
        }

        let name1 = name1.trim();
        let name2 = name2.trim();

        let mut check = Validator::new();
        check
            .check(!name1.is_empty(), FieldError::Player1Empty)
            .check(!name2.is_empty(), FieldError::Player2Empty);

        if let Err(err) = check.finish() {
            display.show_status(MessageRegion::RpsLogin, StatusMessage::error(err.to_string()));
            return Err(err);
        }

        self.names = [name1.to_string(), name2.to_string()];
        for player in Player::BOTH {
            display.set_player_name(player, self.name(player));
            display.set_player_score(player, self.score(player));
        }

        info!("rps: session started ({} vs {})", name1, name2);
        self.open_round(display);
        Ok(true)
    }

    /* =========================
       Game
       ========================= */

    /// Records a player's pick. Resolves the round as soon as both players
    /// have picked and returns the result.
    pub fn select_choice<D>(
        &mut self,
        display: &mut D,
        player: Player,
        choice: Choice,
    ) -> Option<RoundResult>
    where
        D: StatusSink + PlayerBoard + ScreenSwitch,
    {
        let RpsState::Game { pending } = &mut self.state else {
            debug!("rps: {} choice ignored in {:?}", player.tag(), self.screen());
            return None;
        };

        pending[player.index()] = Some(choice);
        let picks = *pending;
        display.set_choice_enabled(player, false);

        match picks {
            [Some(p1), Some(p2)] => Some(self.resolve_round(display, p1, p2)),
            _ => {
                display.set_choice_view(player, ChoiceView::Hidden);
                None
            }
        }
    }

    fn resolve_round<D>(&mut self, display: &mut D, p1: Choice, p2: Choice) -> RoundResult
    where
        D: StatusSink + PlayerBoard + ScreenSwitch,
    {
        let round = RoundResult::resolve(p1, p2);

        let message = match round.outcome {
            RoundOutcome::Tie => "It's a tie!\nPlay again?".to_string(),
            RoundOutcome::Winner(winner) => {
                self.scores[winner.index()] += 1;
                display.set_player_score(winner, self.score(winner));
                format!("{} is the victor!\nPlay again?", self.name(winner))
            }
        };
        display.show_status(MessageRegion::RpsPostgame, StatusMessage::info(message));

        for player in Player::BOTH {
            display.set_choice_view(player, ChoiceView::Revealed(round.choice_of(player)));
        }

        info!(
            "rps: {} vs {} -> {:?} (score {}-{})",
            p1, p2, round.outcome, self.scores[0], self.scores[1]
        );

        self.state = RpsState::Postgame { round };
        display.switch_screen(RpsScreen::Postgame);
        round
    }

    /* =========================
       Postgame → Game / Login
       ========================= */

    pub fn replay<D>(&mut self, display: &mut D) -> bool
    where
        D: StatusSink + PlayerBoard + ScreenSwitch,
    {
        if !matches!(self.state, RpsState::Postgame { .. }) {
            debug!("rps: replay ignored in {:?}", self.screen());
            return false;
        }

        self.open_round(display);
        true
    }

    /// Ends the session: names and scores go back to their initial values.
    pub fn quit<D>(&mut self, display: &mut D) -> bool
    where
        D: StatusSink + PlayerBoard + ScreenSwitch,
    {
        if self.state == RpsState::Login {
            debug!("rps: quit ignored at login");
            return false;
        }

        info!("rps: session ended (final score {}-{})", self.scores[0], self.scores[1]);

        self.state = RpsState::Login;
        self.names = [String::new(), String::new()];
        self.scores = [0, 0];

        display.switch_screen(RpsScreen::Login);
        display.show_status(MessageRegion::RpsLogin, StatusMessage::info(QUIT_FAREWELL));
        for player in Player::BOTH {
            display.set_player_name(player, "");
            display.set_player_score(player, 0);
        }
        true
    }

    fn open_round<D>(&mut self, display: &mut D)
    where
        D: StatusSink + PlayerBoard + ScreenSwitch,
    {
        self.state = RpsState::open_round();

        for player in Player::BOTH {
            display.set_choice_enabled(player, true);
            display.set_choice_view(player, ChoiceView::Waiting);
        }
        display.show_status(MessageRegion::RpsGame, StatusMessage::info(GAME_PROMPT));
        display.switch_screen(RpsScreen::Game);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::message::Severity;

    #[derive(Default)]
    struct Board {
        names: [String; 2],
        scores: [u32; 2],
        views: [Option<ChoiceView>; 2],
        enabled: [bool; 2],
        screen: RpsScreen,
        last_status: Option<(MessageRegion, StatusMessage)>,
    }

    impl StatusSink for Board {
        fn show_status(&mut self, region: MessageRegion, message: StatusMessage) {
            self.last_status = Some((region, message));
        }
    }

    impl PlayerBoard for Board {
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

    impl ScreenSwitch for Board {
        fn switch_screen(&mut self, screen: RpsScreen) {
            self.screen = screen;
        }
    }

    fn started() -> (RpsEngine, Board) {
        let mut engine = RpsEngine::new();
        let mut board = Board::default();
        assert!(engine.start_session(&mut board, "Alice", "Bob").unwrap());
        (engine, board)
    }

    #[test]
    fn start_opens_a_round() {
        let (engine, board) = started();

        assert_eq!(engine.screen(), RpsScreen::Game);
        assert_eq!(board.screen, RpsScreen::Game);
        assert_eq!(board.names, ["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(board.enabled, [true, true]);
        assert_eq!(board.views, [Some(ChoiceView::Waiting); 2]);
    }

    #[test]
    fn start_trims_names() {
        let mut engine = RpsEngine::new();
        let mut board = Board::default();
        engine.start_session(&mut board, "  Alice ", "Bob\t").unwrap();
        assert_eq!(engine.name(Player::One), "Alice");
        assert_eq!(engine.name(Player::Two), "Bob");
    }

    #[test]
    fn start_is_ignored_once_running() {
        let (mut engine, mut board) = started();
        engine.select_choice(&mut board, Player::One, Choice::Paper);

        assert_eq!(engine.start_session(&mut board, "Cara", "Dan"), Ok(false));
        assert_eq!(engine.name(Player::One), "Alice");
        assert_eq!(engine.pending_choice(Player::One), Some(Choice::Paper));

        engine.select_choice(&mut board, Player::Two, Choice::Rock);
        assert_eq!(engine.start_session(&mut board, "", ""), Ok(false));
        assert_eq!(engine.screen(), RpsScreen::Postgame);
    }

    #[test]
    fn blank_names_are_all_reported() {
        let mut engine = RpsEngine::new();
        let mut board = Board::default();

        let err = engine.start_session(&mut board, "   ", "").unwrap_err();
        assert_eq!(err.fields, vec![FieldError::Player1Empty, FieldError::Player2Empty]);
        assert_eq!(engine.screen(), RpsScreen::Login);

        let (region, message) = board.last_status.unwrap();
        assert_eq!(region, MessageRegion::RpsLogin);
        assert_eq!(message.severity, Severity::Error);
        assert!(message.text.ends_with("Player 1 empty & Player 2 empty"));
    }

    #[test]
    fn first_pick_is_hidden_and_locks_only_that_player() {
        let (mut engine, mut board) = started();

        assert!(engine.select_choice(&mut board, Player::One, Choice::Rock).is_none());
        assert_eq!(board.views[0], Some(ChoiceView::Hidden));
        assert_eq!(board.enabled, [false, true]);
        assert_eq!(engine.pending_choice(Player::One), Some(Choice::Rock));
    }

    #[test]
    fn repeated_pick_overwrites() {
        let (mut engine, mut board) = started();

        engine.select_choice(&mut board, Player::Two, Choice::Rock);
        engine.select_choice(&mut board, Player::Two, Choice::Paper);
        assert_eq!(engine.pending_choice(Player::Two), Some(Choice::Paper));

        let round = engine
            .select_choice(&mut board, Player::One, Choice::Rock)
            .unwrap();
        assert_eq!(round.outcome, RoundOutcome::Winner(Player::Two));
    }

    #[test]
    fn second_pick_resolves_and_reveals() {
        let (mut engine, mut board) = started();

        engine.select_choice(&mut board, Player::One, Choice::Rock);
        let round = engine
            .select_choice(&mut board, Player::Two, Choice::Scissors)
            .unwrap();

        assert_eq!(round.outcome, RoundOutcome::Winner(Player::One));
        assert_eq!(engine.score(Player::One), 1);
        assert_eq!(engine.score(Player::Two), 0);
        assert_eq!(board.scores, [1, 0]);
        assert_eq!(board.views[0], Some(ChoiceView::Revealed(Choice::Rock)));
        assert_eq!(board.views[1], Some(ChoiceView::Revealed(Choice::Scissors)));
        assert_eq!(board.screen, RpsScreen::Postgame);
        assert_eq!(engine.pending_choice(Player::One), None);

        let (region, message) = board.last_status.unwrap();
        assert_eq!(region, MessageRegion::RpsPostgame);
        assert_eq!(message.text, "Alice is the victor!\nPlay again?");
    }

    #[test]
    fn tie_leaves_scores() {
        let (mut engine, mut board) = started();

        engine.select_choice(&mut board, Player::One, Choice::Paper);
        engine.select_choice(&mut board, Player::Two, Choice::Paper);

        assert_eq!(engine.score(Player::One), 0);
        assert_eq!(engine.score(Player::Two), 0);
        assert_eq!(
            board.last_status.unwrap().1.text,
            "It's a tie!\nPlay again?"
        );
    }

    #[test]
    fn choices_after_resolution_are_ignored() {
        let (mut engine, mut board) = started();

        engine.select_choice(&mut board, Player::One, Choice::Rock);
        engine.select_choice(&mut board, Player::Two, Choice::Paper);
        assert!(engine.select_choice(&mut board, Player::One, Choice::Rock).is_none());
        assert_eq!(engine.score(Player::Two), 1);
    }

    #[test]
    fn replay_keeps_scores_and_reopens() {
        let (mut engine, mut board) = started();

        engine.select_choice(&mut board, Player::One, Choice::Rock);
        engine.select_choice(&mut board, Player::Two, Choice::Paper);
        assert!(engine.replay(&mut board));

        assert_eq!(engine.screen(), RpsScreen::Game);
        assert_eq!(engine.score(Player::Two), 1);
        assert_eq!(board.enabled, [true, true]);
        assert_eq!(board.views, [Some(ChoiceView::Waiting); 2]);
    }

    #[test]
    fn replay_only_from_postgame() {
        let (mut engine, mut board) = started();
        assert!(!engine.replay(&mut board));
        assert_eq!(engine.screen(), RpsScreen::Game);
    }

    #[test]
    fn quit_resets_everything() {
        let (mut engine, mut board) = started();

        engine.select_choice(&mut board, Player::One, Choice::Scissors);
        engine.select_choice(&mut board, Player::Two, Choice::Paper);
        assert!(engine.quit(&mut board));

        assert_eq!(engine.screen(), RpsScreen::Login);
        assert_eq!(engine.score(Player::One), 0);
        assert_eq!(engine.name(Player::One), "");
        assert_eq!(board.scores, [0, 0]);
        assert_eq!(board.screen, RpsScreen::Login);
        assert_eq!(board.last_status.unwrap().1.text, QUIT_FAREWELL);
    }

    #[test]
    fn quit_mid_round_drops_pending_choice() {
        let (mut engine, mut board) = started();

        engine.select_choice(&mut board, Player::One, Choice::Rock);
        engine.quit(&mut board);
        assert_eq!(engine.start_session(&mut board, "Cara", "Dan"), Ok(true));

        assert_eq!(engine.pending_choice(Player::One), None);
        assert_eq!(engine.score(Player::One), 0);
    }
}
