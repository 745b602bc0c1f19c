use common::games::tictactoe::{
    GameStatus, Mark, TicTacToeGameState, TicTacToeSessionSettings,
};
use common::{log, log_warn};

use crate::config::{ClientConfig, ClientConfigManager};
use super::board::BoardUi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Game,
}

pub struct TicTacToeApp {
    screen: Screen,
    game: TicTacToeGameState,
    board_ui: BoardUi,
    config: ClientConfig,
    config_manager: ClientConfigManager,
    selected_mark: Mark,
}

impl TicTacToeApp {
    pub fn new(config: ClientConfig, config_manager: ClientConfigManager) -> Self {
        Self {
            screen: Screen::Start,
            game: TicTacToeGameState::default(),
            board_ui: BoardUi::default(),
            selected_mark: config.human_mark,
            config,
            config_manager,
        }
    }

    fn start_game(&mut self) {
        let settings = match TicTacToeSessionSettings::new(self.selected_mark) {
            Ok(settings) => settings,
            Err(e) => {
                log_warn!("{}; falling back to defaults", e);
                TicTacToeSessionSettings::default()
            }
        };

        if self.config.human_mark != settings.human_mark() {
            self.config.human_mark = settings.human_mark();
            if let Err(e) = self.config_manager.set_config(&self.config) {
                log_warn!("Failed to save config: {}", e);
            }
        }

        self.game = TicTacToeGameState::new(settings);
        self.screen = Screen::Game;
        log!("Game started, human plays {}", settings.human_mark());
    }

    fn restart_game(&mut self) {
        self.game.reset();
        log!("Game restarted");
    }

    fn render_start_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Tic-Tac-Toe");
            ui.add_space(20.0);

            ui.label("Play as:");
            ui.horizontal(|ui| {
                ui.radio_value(&mut self.selected_mark, Mark::X, "X");
                ui.radio_value(&mut self.selected_mark, Mark::O, "O");
            });
            ui.label("You always move first.");
            ui.add_space(20.0);

            if ui.button("Start").clicked() {
                self.start_game();
            }
        });
    }

    fn render_game_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);

            let clicked = self.board_ui.render(
                ui,
                &self.game,
                self.config.cell_size,
                self.config.highlight_hover,
            );

            if let Some(pos) = clicked {
                match self.game.play_turn(pos) {
                    Ok(outcome) => {
                        log!("Human plays {}, status: {}", outcome.human, outcome.status);
                    }
                    Err(e) => log_warn!("Move {} rejected: {}", pos, e),
                }
            }

            ui.add_space(20.0);

            let status = self.game.status();
            match result_message(status, self.game.human_mark()) {
                Some(message) => {
                    ui.heading(message);
                    ui.add_space(10.0);
                    if ui.button("Restart").clicked() {
                        self.restart_game();
                    }
                }
                None => {
                    ui.label(format!("You play {}", self.game.human_mark()));
                }
            }

            ui.add_space(10.0);
            if ui.button("Main menu").clicked() {
                self.screen = Screen::Start;
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| match self.screen {
            Screen::Start => self.render_start_screen(ui),
            Screen::Game => self.render_game_screen(ui),
        });
    }
}

pub fn result_message(status: GameStatus, human_mark: Mark) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(mark) if mark == human_mark => Some("You win!"),
        GameStatus::Won(_) => Some("You lose!"),
        GameStatus::Draw => Some("Draw!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_messages() {
        assert_eq!(result_message(GameStatus::InProgress, Mark::X), None);
        assert_eq!(result_message(GameStatus::Won(Mark::X), Mark::X), Some("You win!"));
        assert_eq!(result_message(GameStatus::Won(Mark::O), Mark::X), Some("You lose!"));
        assert_eq!(result_message(GameStatus::Won(Mark::X), Mark::O), Some("You lose!"));
        assert_eq!(result_message(GameStatus::Draw, Mark::O), Some("Draw!"));
    }
}
