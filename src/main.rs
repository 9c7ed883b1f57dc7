use anyhow::anyhow;
use clap::Parser;
use clearframe::app::App;
use clearframe::config::Args;
use clearframe::engine::window::GameWindow;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let sdl = sdl2::init().map_err(|e| anyhow!("failed to init SDL2: {e}"))?;
    let mut window = GameWindow::new(&sdl, &args.window_config())?;

    let mut app = App::new(&window, args.background, args.frames)?;
    app.run(&sdl, &mut window)
}
