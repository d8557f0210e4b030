//! Layout module orchestrator.
//!
//! Downstream code imports layout types from here while the per-wall engine
//! lives in the private `core` module and the four-wall assembly in `building`.

pub mod building;
mod core;

pub use building::{BuildingAssembler, BuildingLayout, DoorQuota, WallSide, assemble_building};
pub use self::core::{
    ElementKind, EngineConstants, Row, WallElement, WallLayout, WallLayoutEngine, WallSpec,
};
