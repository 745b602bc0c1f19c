use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    human_mark: Mark,
    bot_mark: Mark,
}

impl TicTacToeSessionSettings {
    pub fn new(human_mark: Mark) -> Result<Self, String> {
        let bot_mark = human_mark
            .opponent()
            .ok_or_else(|| "Human mark must be X or O".to_string())?;
        Ok(Self {
            human_mark,
            bot_mark,
        })
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            bot_mark: Mark::O,
        }
    }
}
