use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::renderer::cell::RgbColor;

/// Parse a `#RRGGBB` hex string into a packed 24-bit color.
pub fn get_color(hex: &str) -> Option<RgbColor> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RgbColor(r, g, b))
}

/// A named rectangular surface on the screen.
///
/// Holds the current frame's text; the whole content is replaced on every
/// render, nothing is retained across frames.
pub struct View {
    x0: u16,
    y0: u16,
    x1: u16,
    y1: u16,
    frame_color: Option<RgbColor>,
    content: String,
}

impl View {
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            frame_color: None,
            content: String::new(),
        }
    }

    pub fn resize(&mut self, x0: u16, y0: u16, x1: u16, y1: u16) {
        self.x0 = x0;
        self.y0 = y0;
        self.x1 = x1;
        self.y1 = y1;
    }

    pub fn set_frame_color(&mut self, color: RgbColor) {
        self.frame_color = Some(color);
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn write(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Queue this view into `out`: content rows inside the frame, clipped
    /// vertically to the rect. Horizontal clipping is the terminal's job —
    /// the screen disables line wrap, so overlong rows stop at the right
    /// edge instead of spilling onto the next line.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let width = (self.x1 + 1).saturating_sub(self.x0);
        let height = (self.y1 + 1).saturating_sub(self.y0);
        if width < 2 || height < 2 {
            // Zero-area or too small to hold a frame; degraded display.
            return Ok(());
        }

        // Content first, frame second, so a row clipped at the terminal
        // edge cannot overwrite the right border.
        let inner_rows = (height - 2) as usize;
        for (i, line) in self.content.lines().take(inner_rows).enumerate() {
            queue!(out, MoveTo(self.x0 + 1, self.y0 + 1 + i as u16), Print(line))?;
        }

        if let Some(RgbColor(r, g, b)) = self.frame_color {
            queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
        }
        let horizontal = "─".repeat((width - 2) as usize);
        queue!(out, MoveTo(self.x0, self.y0), Print(format!("┌{}┐", horizontal)))?;
        for y in self.y0 + 1..self.y1 {
            queue!(out, MoveTo(self.x0, y), Print('│'))?;
            queue!(out, MoveTo(self.x1, y), Print('│'))?;
        }
        queue!(
            out,
            MoveTo(self.x0, self.y1),
            Print(format!("└{}┘", horizontal)),
            ResetColor
        )?;
        Ok(())
    }
}
