mod game_state;
mod headless;

pub use game_state::{Frame, GameState};
pub use headless::run_headless;

/// Receives each generation after it is computed.
///
/// Renderers only ever see an immutable [`Frame`]; the flow of data is one way.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}
