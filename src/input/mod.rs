use macroquad::prelude::{KeyCode, is_key_pressed};

use crate::application::GameState;

/// Actions the keyboard can request from the driving loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    /// Single generation, only honoured while paused
    Step,
    Reseed,
    Quit,
}

const KEY_BINDINGS: [(KeyCode, Command); 4] = [
    (KeyCode::Space, Command::TogglePause),
    (KeyCode::N, Command::Step),
    (KeyCode::R, Command::Reseed),
    (KeyCode::Escape, Command::Quit),
];

/// Commands whose keys went down this frame
pub fn pressed_commands() -> Vec<Command> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Apply one command. `Quit` is left to the caller.
pub fn apply_command(state: GameState, command: Command) -> GameState {
    match command {
        Command::TogglePause => state.toggle_running(),
        Command::Step if !state.is_running => state.step(),
        Command::Reseed => state.reseed(),
        Command::Step | Command::Quit => state,
    }
}

pub fn apply_commands(state: GameState, commands: &[Command]) -> GameState {
    commands.iter().fold(state, |s, command| apply_command(s, *command))
}
