use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::color::RenderMode;
use crate::renderer::{encoder, raster};
use crate::shared::constants::{FRAME_COLOR, WHEEL_VIEW};
use crate::ui::host::{flow, EventFlow, HostError, Keymap, Screen};
use crate::ui::layout::Viewport;
use crate::ui::view::get_color;

/// Mode/input controller: owns the render mode and wires key events and
/// resizes to the rasterizer and the screen.
pub struct App {
    screen: Screen,
    keymap: Keymap<App>,
    mode: RenderMode,
    viewport: Viewport,
}

impl App {
    pub fn new() -> Result<Self, HostError> {
        let screen = Screen::new()?;
        let mut app = Self {
            screen,
            keymap: Keymap::new(),
            mode: RenderMode::Light,
            viewport: Viewport::default(),
        };

        app.keymap
            .register(KeyCode::Char('r'), KeyModifiers::CONTROL, Self::toggle_mode)?;
        app.keymap
            .register(KeyCode::Char('c'), KeyModifiers::CONTROL, Self::quit)?;

        let (cols, rows) = Screen::size()?;
        app.layout(cols, rows)?;
        Ok(app)
    }

    /// Layout pass: clamp the viewport to the host size, then size (or
    /// first create and configure) the wheel view and repaint.
    fn layout(&mut self, cols: u16, rows: u16) -> Result<(), HostError> {
        self.viewport = Viewport::from_host(cols, rows);
        let x1 = self.viewport.width.saturating_sub(1);
        let y1 = self.viewport.height.saturating_sub(1);

        match self.screen.set_view(WHEEL_VIEW, 0, 0, x1, y1) {
            Ok(_) => {}
            Err(HostError::UnknownView(_)) => {
                // Expected on the first pass: the view was just created.
                let view = self.screen.view_mut(WHEEL_VIEW)?;
                if let Some(color) = get_color(FRAME_COLOR) {
                    view.set_frame_color(color);
                }
                self.render_wheel()?;
            }
            Err(e) => return Err(e),
        }

        self.screen.draw()?;
        Ok(())
    }

    /// Rebuild the wheel for the current mode and replace the view content.
    fn render_wheel(&mut self) -> Result<(), HostError> {
        let text = encoder::encode(&raster::render_grid(self.mode));
        let view = self.screen.view_mut(WHEEL_VIEW)?;
        view.clear();
        view.write(&text);
        Ok(())
    }

    fn toggle_mode(app: &mut App) -> Result<(), HostError> {
        app.mode = app.mode.toggle();
        crate::utils::logger::debug(&format!("render mode toggled to {:?}", app.mode));
        app.render_wheel()?;
        app.screen.draw()?;
        Ok(())
    }

    fn quit(_app: &mut App) -> Result<(), HostError> {
        Err(HostError::Quit)
    }

    /// Block on the host event queue until a handler asks to quit or a
    /// fatal error surfaces.
    pub fn run(&mut self) -> Result<(), HostError> {
        loop {
            match self.handle_event(event::read()?)? {
                EventFlow::Continue => {}
                EventFlow::Quit => return Ok(()),
            }
        }
    }

    fn handle_event(&mut self, ev: Event) -> Result<EventFlow, HostError> {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(handler) = self.keymap.lookup(key.code, key.modifiers) {
                    return flow(handler(self));
                }
                Ok(EventFlow::Continue)
            }
            Event::Resize(cols, rows) => {
                crate::utils::logger::debug(&format!("resize to {}x{}", cols, rows));
                self.layout(cols, rows)?;
                Ok(EventFlow::Continue)
            }
            _ => Ok(EventFlow::Continue),
        }
    }
}
