/// The exercises selectable from the hub menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solution {
    RockPaperScissors,
    MultiplicationTable,
    CaesarCipher,
}

impl Solution {
    pub const ALL: [Solution; 3] = [
        Solution::RockPaperScissors,
        Solution::MultiplicationTable,
        Solution::CaesarCipher,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Solution::RockPaperScissors => "Rock Paper Scissors",
            Solution::MultiplicationTable => "Multiplication Table",
            Solution::CaesarCipher => "Caesar Cipher",
        }
    }
}
