use std::io::Write;

use crossterm::style::{Stylize, style};

use crate::display_width;
use crate::error::Result;
use crate::layout::{BuildingLayout, ElementKind, WallElement, WallLayout};

/// Renderer parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Emit ANSI colors for doors, windows and bricks.
    pub color: bool,
    /// Print a unit ruler under each wall.
    pub ruler: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            color: false,
            ruler: true,
        }
    }
}

/// Console view of wall layouts, one character per length unit, top row first.
pub struct TextRenderer {
    settings: RendererSettings,
}

impl TextRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    pub fn render_building(&self, writer: &mut impl Write, layout: &BuildingLayout) -> Result<()> {
        for (side, wall) in layout.walls() {
            self.render_wall(writer, side.as_str(), wall)?;
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn render_wall(&self, writer: &mut impl Write, label: &str, wall: &WallLayout) -> Result<()> {
        writeln!(
            writer,
            "{label} wall: length {}, {} rows",
            wall.length,
            wall.row_count()
        )?;

        let span = wall
            .rows()
            .iter()
            .filter_map(|row| row.last())
            .map(WallElement::end)
            .max()
            .unwrap_or(0)
            .max(wall.length) as usize;

        for (index, row) in wall.rows().iter().enumerate().rev() {
            let mut line: String = row.iter().map(|element| self.glyph(element)).collect();
            pad_line(&mut line, span);
            writeln!(writer, "{index:>4} |{line}|")?;
        }

        if self.settings.ruler && span > 0 {
            let ruler: String = (0..span)
                .map(|unit| char::from_digit((unit % 10) as u32, 10).unwrap_or('?'))
                .collect();
            writeln!(writer, "     +{ruler}+")?;
        }

        Ok(())
    }

    fn glyph(&self, element: &WallElement) -> String {
        let width = element.width as usize;
        let plain = match element.kind {
            ElementKind::Door => "D".repeat(width),
            ElementKind::Window => "W".repeat(width),
            ElementKind::Brick if width >= 2 => format!("[{}]", "=".repeat(width - 2)),
            ElementKind::Brick => "#".repeat(width),
        };

        if !self.settings.color {
            return plain;
        }
        match element.kind {
            ElementKind::Door => style(plain).dark_yellow().to_string(),
            ElementKind::Window => style(plain).cyan().to_string(),
            ElementKind::Brick => style(plain).dark_red().to_string(),
        }
    }
}

fn pad_line(line: &mut String, width: usize) {
    let display = display_width(line);
    if display < width {
        line.push_str(&" ".repeat(width - display));
    }
}
