use macroquad::prelude::*;
use tracing::{debug, info};

use crate::application::{Frame, Renderer};
use crate::config::LifeConfig;

/// Font size of the generation label
pub const LABEL_FONT_SIZE: f32 = 16.0;
/// Height of the strip above the grid reserved for the label
pub const LABEL_BAND: f32 = 20.0;

/// Pixel layout of the grid on screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellGeometry {
    pub cell_size: f32,
    pub pitch: f32,
    /// Gap between the grid and the window edge on every side
    pub margin: f32,
    /// Label strip at the top, above the top margin
    pub label_band: f32,
}

impl CellGeometry {
    pub fn from_config(config: &LifeConfig) -> Self {
        Self {
            cell_size: config.cell_size as f32,
            pitch: config.cell_pitch() as f32,
            margin: config.cell_size as f32,
            label_band: LABEL_BAND,
        }
    }

    /// Top-left screen corner of cell `(x, y)`
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        (
            self.margin + x as f32 * self.pitch,
            self.label_band + self.margin + y as f32 * self.pitch,
        )
    }

    /// Baseline of the generation label, kept inside the label strip
    pub fn label_baseline(&self) -> f32 {
        self.label_band - (self.label_band - LABEL_FONT_SIZE) / 2.0
    }

    /// Screen size needed to show a `width` x `height` grid with margins on every side
    pub fn canvas_size(&self, width: usize, height: usize) -> (f32, f32) {
        (
            2.0 * self.margin + width as f32 * self.pitch,
            self.label_band + 2.0 * self.margin + height as f32 * self.pitch,
        )
    }
}

/// Window setup sized to fit the configured grid
pub fn window_conf(config: &LifeConfig) -> Conf {
    let geometry = CellGeometry::from_config(config);
    let (w, h) = geometry.canvas_size(config.grid_width, config.grid_height);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: w.ceil().min(i32::MAX as f32) as i32,
        window_height: h.ceil().min(i32::MAX as f32) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Draws each frame into the macroquad window.
pub struct MacroquadRenderer {
    geometry: CellGeometry,
    alive_color: Color,
    dead_color: Color,
    stroke_color: Color,
    background: Color,
}

impl MacroquadRenderer {
    pub fn new(config: &LifeConfig) -> Self {
        Self {
            geometry: CellGeometry::from_config(config),
            alive_color: BLACK,
            dead_color: DARKGRAY,
            stroke_color: WHITE,
            background: BLUE,
        }
    }
}

impl Renderer for MacroquadRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        clear_background(self.background);

        let size = self.geometry.cell_size;
        for cell in frame.grid.iter_cells() {
            let (sx, sy) = self.geometry.cell_origin(cell.position.x, cell.position.y);
            let fill = if cell.alive { self.alive_color } else { self.dead_color };
            draw_rectangle(sx, sy, size, size, fill);
            draw_rectangle_lines(sx, sy, size, size, 1.0, self.stroke_color);
        }

        draw_text(
            &format!("Generation {}", frame.generation),
            self.geometry.margin,
            self.geometry.label_baseline(),
            LABEL_FONT_SIZE,
            WHITE,
        );
    }
}

/// Headless renderer that reports each frame through tracing.
#[derive(Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        let population = frame.grid.population();
        if population == 0 {
            info!(generation = frame.generation, "Population died out");
        } else {
            debug!(generation = frame.generation, population, "Frame");
        }
    }
}
