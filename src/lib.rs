//! Row-by-row wall layouts for brick buildings.
//!
//! A [`BuildingConfig`] describes the building footprint, its height in rows
//! and the size of its doors and windows. [`BuildingAssembler`] splits the
//! building's doors across four walls and asks the [`WallLayoutEngine`] to
//! fill every row of each wall with doors, windows and filler bricks.

pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod width;

pub use config::{BuildingConfig, Param, RandomSetting};
pub use driver::cli::{CliArgs, CliDriver, CliDriverError, DriverResult};
pub use error::{LayoutError, Result};
pub use geometry::Size;
pub use layout::{
    BuildingAssembler, BuildingLayout, DoorQuota, ElementKind, EngineConstants, Row, WallElement,
    WallLayout, WallLayoutEngine, WallSide, WallSpec, assemble_building,
};
pub use logging::{LogEvent, LogFields, LogLevel, Logger, LoggingError, LoggingResult};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use render::{RendererSettings, TextRenderer};
pub use width::display_width;
