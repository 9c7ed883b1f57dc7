use anyhow::{anyhow, Context};
use sdl2::video::{GLContext, GLProfile, SwapInterval, Window};
use sdl2::VideoSubsystem;
use sdl2::Sdl;
use std::ffi::c_void;
use tracing::{info, warn};

use crate::config::WindowConfig;
use crate::renderer::{PresentError, Surface};

pub struct GameWindow {
    _gl_context: GLContext,
    window: Window,
    video: VideoSubsystem,
}

impl GameWindow {
    pub fn new(sdl: &Sdl, config: &WindowConfig) -> anyhow::Result<Self> {
        let video = sdl
            .video()
            .map_err(|e| anyhow!(e))
            .context("failed to init SDL2 video")?;

        let gl_attr = video.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_major, config.gl_minor);
        gl_attr.set_depth_size(24);
        gl_attr.set_double_buffer(true);

        let window = video
            .window(&config.title, config.width, config.height)
            .opengl()
            .resizable()
            .position_centered()
            .build()
            .context("failed to create window")?;

        let gl_context = window
            .gl_create_context()
            .map_err(|e| anyhow!(e))
            .context("failed to create GL context")?;

        let interval = if config.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        if let Err(e) = video.gl_set_swap_interval(interval) {
            warn!(error = %e, vsync = config.vsync, "swap interval not supported");
        }

        info!(
            title = %config.title,
            width = config.width,
            height = config.height,
            gl_major = config.gl_major,
            gl_minor = config.gl_minor,
            "window created"
        );

        Ok(Self {
            _gl_context: gl_context,
            window,
            video,
        })
    }

    /// Resolves GL symbol names against the context created in `new`.
    pub fn proc_resolver(&self) -> impl Fn(&str) -> *const c_void + '_ {
        move |name| self.video.gl_get_proc_address(name) as *const c_void
    }

    /// Size of the drawable in pixels, which differs from the window size
    /// on high-DPI displays.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}

impl Surface for GameWindow {
    // SDL_GL_SwapWindow reports nothing back.
    fn present(&mut self) -> Result<(), PresentError> {
        self.window.gl_swap_window();
        Ok(())
    }
}
