use serde::{Deserialize, Serialize};

/// Width/height pair measured in brick length units.
///
/// Serialized as a two-element array `[width, height]`. A zero in either
/// component disables the feature it describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both components are non-zero.
    pub fn is_enabled(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl From<Size> for (u32, u32) {
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}
