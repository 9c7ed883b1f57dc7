pub mod driver;
pub mod status;

use glam::UVec2;
use std::ffi::c_void;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, error, info, trace, warn};

use crate::colour::Rgba;
use driver::{ClearMask, Driver};

/// Background installed by [`Renderer::init_opengl`].
pub const CLEAR_COLOR: Rgba = Rgba::new(0.45, 0.31, 0.59, 1.0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    /// The resolver returned null for these required entry points.
    Load { missing: Vec<String> },
}

impl InitError {
    pub fn status(&self) -> i32 {
        match self {
            InitError::Load { .. } => status::LOAD_FAILED,
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::Load { missing } => write!(
                f,
                "failed to load GL function table (unresolved: {})",
                missing.join(", ")
            ),
        }
    }
}

impl std::error::Error for InitError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentError(pub String);

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "present failed: {}", self.0)
    }
}

impl std::error::Error for PresentError {}

/// Something with a back buffer that can be made visible.
pub trait Surface {
    fn present(&mut self) -> Result<(), PresentError>;
}

/// Owns the graphics context state: the loaded driver and the
/// clear-colour register. Must stay on the thread that created the GL
/// context, hence `!Send`.
pub struct Renderer<D: Driver> {
    driver: D,
    background: Rgba,
    viewport: UVec2,
    frames: u64,
    present_failures: u64,
    _context_thread: PhantomData<*const ()>,
}

impl<D: Driver> Renderer<D> {
    /// Load the driver's function table through `resolve`, then install
    /// [`CLEAR_COLOR`]. On failure the clear colour is left untouched and
    /// nothing is rolled back. There is no retry; callers should abort.
    pub fn init_opengl<F>(mut driver: D, mut resolve: F) -> Result<Self, InitError>
    where
        F: FnMut(&str) -> *const c_void,
    {
        if let Err(missing) = driver.load(&mut resolve) {
            error!(?missing, "GL function table failed to load");
            return Err(InitError::Load { missing });
        }

        driver.clear_color(CLEAR_COLOR);
        info!(background = %CLEAR_COLOR, "GL function table loaded");

        Ok(Self {
            driver,
            background: CLEAR_COLOR,
            viewport: UVec2::ZERO,
            frames: 0,
            present_failures: 0,
            _context_thread: PhantomData,
        })
    }

    /// Clear colour and depth, then present. Always reports
    /// [`status::OK`]; a failed present is only counted and logged.
    pub fn render<S: Surface>(&mut self, surface: &mut S) -> i32 {
        if let Err(err) = self.render_checked(surface) {
            self.present_failures += 1;
            warn!(%err, frame = self.frames, "frame was not presented");
        }
        status::OK
    }

    /// Like [`Renderer::render`], but hands the present result back.
    pub fn render_checked<S: Surface>(&mut self, surface: &mut S) -> Result<(), PresentError> {
        self.driver.clear(ClearMask::COLOR | ClearMask::DEPTH);
        self.frames += 1;
        trace!(frame = self.frames, "frame cleared");
        surface.present()
    }

    pub fn set_background(&mut self, color: Rgba) {
        self.driver.clear_color(color);
        self.background = color;
    }

    /// Match the viewport to a new drawable size. Zero-sized (minimised)
    /// windows keep the previous viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let size = UVec2::new(width, height);
        if size == self.viewport {
            return;
        }
        let clamped = size.min(UVec2::splat(i32::MAX as u32));
        self.driver.viewport(0, 0, clamped.x as i32, clamped.y as i32);
        self.viewport = size;
        debug!(width, height, "viewport resized");
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn viewport(&self) -> UVec2 {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn present_failures(&self) -> u64 {
        self.present_failures
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}
