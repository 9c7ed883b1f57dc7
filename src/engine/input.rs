use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Scancode;
use sdl2::EventPump;
use tracing::debug;

/// What the frame loop needs from the event queue.
#[derive(Debug, Default)]
pub struct InputState {
    pub quit: bool,
    /// Set when the window changed size since the last `update`.
    pub resized: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.resized = false;
        for event in event_pump.poll_iter() {
            self.handle(event);
        }
    }

    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Quit { .. } => self.quit = true,
            Event::KeyDown {
                scancode: Some(Scancode::Escape),
                ..
            } => self.quit = true,
            Event::Window {
                win_event: WindowEvent::SizeChanged(w, h),
                ..
            } => {
                debug!(width = w, height = h, "window size changed");
                self.resized = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_event_latches() {
        let mut input = InputState::new();
        input.handle(Event::Quit { timestamp: 0 });
        input.handle(Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::FocusLost,
        });
        assert!(input.quit);
    }

    #[test]
    fn size_change_flags_resize() {
        let mut input = InputState::new();
        input.handle(Event::Window {
            timestamp: 0,
            window_id: 1,
            win_event: WindowEvent::SizeChanged(640, 480),
        });
        assert!(input.resized);
        assert!(!input.quit);
    }
}
