use serde::Serialize;

use crate::error::{LayoutError, Result};
use crate::geometry::Size;

/// Fixed geometry shared by every wall the engine lays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConstants {
    brick_unit: u32,
    window_base: u32,
    door_buffer: u32,
}

impl EngineConstants {
    pub const DEFAULT_BRICK_UNIT: u32 = 2;
    pub const DEFAULT_WINDOW_BASE: u32 = 2;
    pub const DEFAULT_DOOR_BUFFER: u32 = 4;

    /// Build a constant set. A zero brick unit is rejected because the scan
    /// could never advance past a filler brick.
    pub fn new(brick_unit: u32, window_base: u32, door_buffer: u32) -> Result<Self> {
        if brick_unit == 0 {
            return Err(LayoutError::InvalidConstant {
                name: "brick_unit",
                reason: "must be positive".to_string(),
            });
        }
        Ok(Self {
            brick_unit,
            window_base,
            door_buffer,
        })
    }

    /// Length of a single filler brick.
    pub fn brick_unit(&self) -> u32 {
        self.brick_unit
    }

    /// First row that may hold a window.
    pub fn window_base(&self) -> u32 {
        self.window_base
    }

    /// Horizontal offset of the door pattern.
    pub fn door_buffer(&self) -> u32 {
        self.door_buffer
    }
}

impl Default for EngineConstants {
    fn default() -> Self {
        Self {
            brick_unit: Self::DEFAULT_BRICK_UNIT,
            window_base: Self::DEFAULT_WINDOW_BASE,
            door_buffer: Self::DEFAULT_DOOR_BUFFER,
        }
    }
}

/// Dimensions and features of a single wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallSpec {
    pub length: u32,
    /// Number of rows.
    pub height: u32,
    pub door: Size,
    pub window: Size,
    pub window_spacing: u32,
    /// Doors this wall has to place in each door row.
    pub door_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Door,
    Window,
    Brick,
}

/// One placed element; `position` is the offset from the wall's starting corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WallElement {
    pub kind: ElementKind,
    pub position: u32,
    pub width: u32,
}

impl WallElement {
    /// Offset just past the element.
    pub fn end(&self) -> u32 {
        self.position.saturating_add(self.width)
    }
}

pub type Row = Vec<WallElement>;

/// Rows of a wall, bottom row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallLayout {
    pub length: u32,
    pub rows: Vec<Row>,
}

impl WallLayout {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn count(&self, kind: ElementKind) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|element| element.kind == kind)
            .count()
    }

    /// How far the widest row runs past the wall length. The last element of a
    /// row is never clipped.
    pub fn overshoot(&self) -> u32 {
        self.rows
            .iter()
            .filter_map(|row| row.last())
            .map(|last| last.end().saturating_sub(self.length))
            .max()
            .unwrap_or(0)
    }
}

/// Row activity for the door and window features.
#[derive(Debug, Clone, Copy)]
struct RowFlags {
    doors: bool,
    windows: bool,
}

/// Row-by-row space filler for a single wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallLayoutEngine {
    constants: EngineConstants,
}

impl WallLayoutEngine {
    pub fn new(constants: EngineConstants) -> Self {
        Self { constants }
    }

    pub fn constants(&self) -> &EngineConstants {
        &self.constants
    }

    pub fn layout_wall(&self, spec: &WallSpec) -> WallLayout {
        let rows = (0..spec.height)
            .map(|row| self.layout_row(spec, self.row_flags(spec, row)))
            .collect();
        WallLayout {
            length: spec.length,
            rows,
        }
    }

    fn row_flags(&self, spec: &WallSpec, row: u32) -> RowFlags {
        // Door spacing is length / door_count; it is zero when either is zero.
        let door_spacing_positive = spec.door_count > 0 && spec.length > 0;
        let window_base = self.constants.window_base;
        RowFlags {
            doors: door_spacing_positive && spec.door.is_enabled() && row < spec.door.height,
            windows: spec.window.is_enabled()
                && row >= window_base
                && row < window_base.saturating_add(spec.window.height),
        }
    }

    fn layout_row(&self, spec: &WallSpec, flags: RowFlags) -> Row {
        let mut row = Row::new();
        let mut doors_left = spec.door_count;
        let mut x = 0u32;

        while x < spec.length {
            let (kind, width) = if flags.doors && doors_left > 0 && self.is_door_start(spec, x) {
                doors_left -= 1;
                (ElementKind::Door, spec.door.width)
            } else if flags.windows && is_window_start(spec, x) {
                (ElementKind::Window, spec.window.width)
            } else {
                (ElementKind::Brick, self.constants.brick_unit)
            };

            row.push(WallElement {
                kind,
                position: x,
                width,
            });
            x = x.saturating_add(width);
        }

        row
    }

    /// `(x - door_buffer) mod (length / door_count) == 0`, evaluated exactly as
    /// `((x - door_buffer) * door_count) mod length == 0`.
    fn is_door_start(&self, spec: &WallSpec, x: u32) -> bool {
        let offset = i128::from(x) - i128::from(self.constants.door_buffer);
        (offset * i128::from(spec.door_count)).rem_euclid(i128::from(spec.length)) == 0
    }
}

/// `(x - spacing / 2) mod (width + spacing) == 0`, doubled so odd spacings stay exact.
fn is_window_start(spec: &WallSpec, x: u32) -> bool {
    let period = 2 * (i128::from(spec.window.width) + i128::from(spec.window_spacing));
    let offset = 2 * i128::from(x) - i128::from(spec.window_spacing);
    offset.rem_euclid(period) == 0
}
