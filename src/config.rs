use clap::Parser;

use crate::colour::Srgba8;

#[derive(Debug, Parser)]
#[command(name = "clearframe", about = "Open a GL window and clear it every frame")]
pub struct Args {
    /// Window title
    #[arg(long, default_value = "clearframe")]
    pub title: String,

    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Core profile version to request, as MAJOR.MINOR
    #[arg(long, default_value = "3.3", value_parser = parse_gl_version)]
    pub gl_version: (u8, u8),

    /// Present immediately instead of waiting for vertical sync
    #[arg(long)]
    pub no_vsync: bool,

    /// Clear colour as RRGGBB or RRGGBBAA hex, replacing the default
    #[arg(long)]
    pub background: Option<Srgba8>,

    /// Exit after rendering this many frames
    #[arg(long)]
    pub frames: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_major: u8,
    pub gl_minor: u8,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "clearframe".to_string(),
            width: 1280,
            height: 720,
            gl_major: 3,
            gl_minor: 3,
            vsync: true,
        }
    }
}

impl Args {
    pub fn window_config(&self) -> WindowConfig {
        let (gl_major, gl_minor) = self.gl_version;
        WindowConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            gl_major,
            gl_minor,
            vsync: !self.no_vsync,
        }
    }
}

fn parse_gl_version(s: &str) -> Result<(u8, u8), String> {
    let (major, minor) = s
        .split_once('.')
        .ok_or_else(|| format!("expected MAJOR.MINOR, got {s:?}"))?;
    let major = major
        .parse()
        .map_err(|_| format!("bad major version {major:?}"))?;
    let minor = minor
        .parse()
        .map_err(|_| format!("bad minor version {minor:?}"))?;
    Ok((major, minor))
}
