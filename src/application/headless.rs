use tracing::info;

use super::{GameState, Renderer};

/// Drive `generations` steps back to back with no pacing.
///
/// The initial generation is rendered too, so the renderer sees
/// `generations + 1` frames in total.
pub fn run_headless<R: Renderer>(state: GameState, generations: u64, renderer: &mut R) -> GameState {
    renderer.render(&state.frame());

    let state = (0..generations).fold(state, |s, _| {
        let s = s.step();
        renderer.render(&s.frame());
        s
    });

    info!(
        generation = state.generation,
        population = state.grid().population(),
        "Headless run finished"
    );
    state
}
