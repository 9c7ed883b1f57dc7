use anyhow::Context;
use sdl2::Sdl;
use tracing::{debug, info};

use crate::colour::{Rgba, Srgba8};
use crate::engine::input::InputState;
use crate::engine::time::FrameTimer;
use crate::engine::window::GameWindow;
use crate::renderer::driver::GlDriver;
use crate::renderer::Renderer;

pub struct App {
    renderer: Renderer<GlDriver>,
    frame_limit: Option<u64>,
}

impl App {
    /// Load GL through `window`'s context. Startup stops here if the
    /// function table cannot be resolved.
    pub fn new(
        window: &GameWindow,
        background: Option<Srgba8>,
        frame_limit: Option<u64>,
    ) -> anyhow::Result<Self> {
        let mut renderer = Renderer::init_opengl(GlDriver, window.proc_resolver())
            .context("OpenGL initialisation failed")?;

        if let Some(bg) = background {
            info!(background = %bg, "overriding clear colour");
            renderer.set_background(Rgba::from(bg));
        }

        let (w, h) = window.drawable_size();
        renderer.resize(w, h);

        Ok(Self {
            renderer,
            frame_limit,
        })
    }

    pub fn run(&mut self, sdl: &Sdl, window: &mut GameWindow) -> anyhow::Result<()> {
        let mut event_pump = sdl
            .event_pump()
            .map_err(anyhow::Error::msg)
            .context("failed to get event pump")?;
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        loop {
            if let Some(fps) = timer.tick() {
                debug!(fps, "frame rate");
            }
            input.update(&mut event_pump);

            if should_stop(&input, self.renderer.frames(), self.frame_limit) {
                break;
            }
            if input.resized {
                let (w, h) = window.drawable_size();
                self.renderer.resize(w, h);
            }

            self.renderer.render(window);
        }

        info!(
            frames = self.renderer.frames(),
            present_failures = self.renderer.present_failures(),
            "shutting down"
        );
        Ok(())
    }
}

/// Checked before each frame, so a limit of `n` renders exactly `n` frames.
fn should_stop(input: &InputState, frames: u64, frame_limit: Option<u64>) -> bool {
    input.quit || frame_limit.is_some_and(|n| frames >= n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frame_limit_stops_before_first_frame() {
        assert!(should_stop(&InputState::new(), 0, Some(0)));
    }

    #[test]
    fn frame_limit_allows_exactly_n_frames() {
        let input = InputState::new();
        assert!(!should_stop(&input, 0, Some(3)));
        assert!(!should_stop(&input, 2, Some(3)));
        assert!(should_stop(&input, 3, Some(3)));
        assert!(!should_stop(&input, 1_000, None));
    }

    #[test]
    fn quit_stops_regardless_of_limit() {
        let input = InputState {
            quit: true,
            ..InputState::default()
        };
        assert!(should_stop(&input, 0, None));
        assert!(should_stop(&input, 0, Some(10)));
    }
}
