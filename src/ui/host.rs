use std::collections::HashMap;
use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{KeyCode, KeyModifiers},
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand, QueueableCommand,
};
use thiserror::Error;

use super::view::View;

#[derive(Debug, Error)]
pub enum HostError {
    /// First-time view creation signal. Expected, recovered locally:
    /// the view exists by the time the caller sees this.
    #[error("view `{0}` does not exist yet")]
    UnknownView(String),

    /// Clean shutdown requested by a key handler. Not a failure.
    #[error("quit requested")]
    Quit,

    #[error("a handler is already bound to {mods:?} {code:?}")]
    DuplicateBinding { code: KeyCode, mods: KeyModifiers },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// What the event loop should do after one handler invocation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EventFlow {
    Continue,
    Quit,
}

/// Map a handler result onto loop flow: `Quit` exits cleanly, anything
/// else propagates as a fatal loop error.
pub fn flow(result: Result<(), HostError>) -> Result<EventFlow, HostError> {
    match result {
        Ok(()) => Ok(EventFlow::Continue),
        Err(HostError::Quit) => Ok(EventFlow::Quit),
        Err(e) => Err(e),
    }
}

pub type Handler<T> = fn(&mut T) -> Result<(), HostError>;

/// Key-to-handler table. Handlers are plain fn pointers so dispatch can
/// hand the whole app state to the handler without borrow gymnastics.
pub struct Keymap<T> {
    bindings: Vec<(KeyCode, KeyModifiers, Handler<T>)>,
}

impl<T> Keymap<T> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn register(
        &mut self,
        code: KeyCode,
        mods: KeyModifiers,
        handler: Handler<T>,
    ) -> Result<(), HostError> {
        if self.lookup(code, mods).is_some() {
            return Err(HostError::DuplicateBinding { code, mods });
        }
        self.bindings.push((code, mods, handler));
        Ok(())
    }

    pub fn lookup(&self, code: KeyCode, mods: KeyModifiers) -> Option<Handler<T>> {
        self.bindings
            .iter()
            .find(|(c, m, _)| *c == code && *m == mods)
            .map(|(_, _, h)| *h)
    }
}

/// Named views, with first-call creation signalled through `UnknownView`:
/// `set_view` on a missing name inserts it and returns the signal, meaning
/// "created — configure it now". Later calls just update the rect.
pub struct ViewRegistry {
    views: HashMap<String, View>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self {
            views: HashMap::new(),
        }
    }

    pub fn set_view(
        &mut self,
        name: &str,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<&mut View, HostError> {
        if self.views.contains_key(name) {
            let view = self.views.get_mut(name).expect("checked above");
            view.resize(x0, y0, x1, y1);
            return Ok(view);
        }
        self.views
            .insert(name.to_string(), View::new(x0, y0, x1, y1));
        Err(HostError::UnknownView(name.to_string()))
    }

    pub fn view_mut(&mut self, name: &str) -> Result<&mut View, HostError> {
        self.views
            .get_mut(name)
            .ok_or_else(|| HostError::UnknownView(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &View> {
        self.views.values()
    }
}

/// Owns the terminal session and the output buffer.
///
/// Raw mode, alternate screen, hidden cursor, line wrap off; all restored
/// on drop, including the panic path (the logger's hook disables raw mode
/// as well, best effort).
pub struct Screen {
    out: BufWriter<Stdout>,
    pub views: ViewRegistry,
}

impl Screen {
    pub fn new() -> Result<Self, HostError> {
        let mut out = BufWriter::with_capacity(256 * 1024, io::stdout());

        terminal::enable_raw_mode()?;
        out.execute(EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        // Disable line wrapping (DECAWM) so overlong rows clip at the
        // right edge instead of scrolling the screen.
        out.execute(Print("\x1b[?7l"))?;

        Ok(Self {
            out,
            views: ViewRegistry::new(),
        })
    }

    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn set_view(
        &mut self,
        name: &str,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<&mut View, HostError> {
        self.views.set_view(name, x0, y0, x1, y1)
    }

    pub fn view_mut(&mut self, name: &str) -> Result<&mut View, HostError> {
        self.views.view_mut(name)
    }

    /// Repaint everything in one flush, bracketed by synchronized-update
    /// guards so the terminal presents the frame atomically.
    pub fn draw(&mut self) -> io::Result<()> {
        self.out.queue(Print("\x1b[?2026h"))?;
        self.out.queue(Clear(ClearType::All))?;
        for view in self.views.iter() {
            view.draw(&mut self.out)?;
        }
        self.out.queue(Print("\x1b[?2026l"))?;
        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = self.out.execute(Print("\x1b[?7h"));
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_exits_the_loop_cleanly() {
        assert_eq!(flow(Err(HostError::Quit)).unwrap(), EventFlow::Quit);
        assert_eq!(flow(Ok(())).unwrap(), EventFlow::Continue);
    }

    #[test]
    fn test_fatal_errors_stay_errors() {
        let fatal = HostError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert!(flow(Err(fatal)).is_err());
    }

    #[test]
    fn test_first_set_view_signals_unknown_view() {
        let mut views = ViewRegistry::new();
        match views.set_view("wheel", 0, 0, 10, 10) {
            Err(HostError::UnknownView(name)) => assert_eq!(name, "wheel"),
            other => panic!("expected UnknownView, got {:?}", other.map(|_| ())),
        }
        // The view exists now; the second call is a plain update.
        assert!(views.set_view("wheel", 0, 0, 20, 20).is_ok());
        assert!(views.view_mut("wheel").is_ok());
    }

    #[test]
    fn test_view_mut_on_missing_view_fails() {
        let mut views = ViewRegistry::new();
        assert!(matches!(
            views.view_mut("nope"),
            Err(HostError::UnknownView(_))
        ));
    }

    struct Counter {
        hits: u32,
    }

    fn bump(c: &mut Counter) -> Result<(), HostError> {
        c.hits += 1;
        Ok(())
    }

    fn ask_quit(_: &mut Counter) -> Result<(), HostError> {
        Err(HostError::Quit)
    }

    #[test]
    fn test_keymap_dispatch_and_duplicates() {
        let mut keymap: Keymap<Counter> = Keymap::new();
        keymap
            .register(KeyCode::Char('r'), KeyModifiers::CONTROL, bump)
            .unwrap();
        assert!(matches!(
            keymap.register(KeyCode::Char('r'), KeyModifiers::CONTROL, ask_quit),
            Err(HostError::DuplicateBinding { .. })
        ));
        keymap
            .register(KeyCode::Char('c'), KeyModifiers::CONTROL, ask_quit)
            .unwrap();

        let mut counter = Counter { hits: 0 };
        let handler = keymap
            .lookup(KeyCode::Char('r'), KeyModifiers::CONTROL)
            .unwrap();
        handler(&mut counter).unwrap();
        assert_eq!(counter.hits, 1);

        // Same key without the modifier is unbound.
        assert!(keymap
            .lookup(KeyCode::Char('r'), KeyModifiers::NONE)
            .is_none());

        let quit = keymap
            .lookup(KeyCode::Char('c'), KeyModifiers::CONTROL)
            .unwrap();
        assert_eq!(flow(quit(&mut counter)).unwrap(), EventFlow::Quit);
    }
}
