//! Four-wall building assembly.
//!
//! The building's door total is split across the walls with a fixed ceiling
//! cascade (front, back, left, right). The cascade can hand out fewer doors
//! than requested; the shortfall is reported, not corrected.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::BuildingConfig;
use crate::error::Result;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::LayoutMetrics;

use super::core::{WallLayout, WallLayoutEngine, WallSpec};

const TARGET: &str = "wall_layout::assembler";
const METRICS_TARGET: &str = "wall_layout::metrics";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Front,
    Back,
    Left,
    Right,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [WallSide::Front, WallSide::Back, WallSide::Left, WallSide::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            WallSide::Front => "front",
            WallSide::Back => "back",
            WallSide::Left => "left",
            WallSide::Right => "right",
        }
    }

    /// Front and back run along the building length, left and right along its width.
    pub fn runs_along_length(&self) -> bool {
        matches!(self, WallSide::Front | WallSide::Back)
    }
}

/// Per-wall door counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DoorQuota {
    pub front: u32,
    pub back: u32,
    pub left: u32,
    pub right: u32,
}

impl DoorQuota {
    /// Split `total` doors: front takes `ceil(D/4)`, back `ceil(rest/3)`,
    /// left `ceil(rest/2)` and right `ceil(rest/2)`.
    pub fn split(total: u32) -> Self {
        let front = total.div_ceil(4);
        let rest = total - front;
        let back = rest.div_ceil(3);
        let rest = rest - back;
        let left = rest.div_ceil(2);
        let rest = rest - left;
        let right = rest.div_ceil(2);
        Self {
            front,
            back,
            left,
            right,
        }
    }

    pub fn for_side(&self, side: WallSide) -> u32 {
        match side {
            WallSide::Front => self.front,
            WallSide::Back => self.back,
            WallSide::Left => self.left,
            WallSide::Right => self.right,
        }
    }

    pub fn total(&self) -> u32 {
        self.front + self.back + self.left + self.right
    }

    /// Doors requested but not assigned to any wall.
    pub fn shortfall(&self, requested: u32) -> u32 {
        requested.saturating_sub(self.total())
    }
}

/// The four laid-out walls of one building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildingLayout {
    pub quota: DoorQuota,
    pub walls: BTreeMap<WallSide, WallLayout>,
}

impl BuildingLayout {
    pub fn wall(&self, side: WallSide) -> Option<&WallLayout> {
        self.walls.get(&side)
    }

    pub fn walls(&self) -> impl Iterator<Item = (WallSide, &WallLayout)> {
        self.walls.iter().map(|(side, wall)| (*side, wall))
    }

    /// Canonical JSON form of the layout.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// blake3 digest of the canonical JSON form, hex encoded.
    pub fn fingerprint(&self) -> Result<String> {
        let json = self.to_json()?;
        Ok(blake3::hash(json.as_bytes()).to_hex().to_string())
    }
}

/// Drives the wall engine once per side of a building.
#[derive(Debug, Clone)]
pub struct BuildingAssembler {
    engine: WallLayoutEngine,
    logger: Option<Logger>,
    metrics: LayoutMetrics,
}

impl BuildingAssembler {
    pub fn new(engine: WallLayoutEngine) -> Self {
        Self {
            engine,
            logger: None,
            metrics: LayoutMetrics::new(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Tallies for the most recent `assemble` call.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn assemble(&mut self, config: &BuildingConfig) -> Result<BuildingLayout> {
        config.validate()?;
        self.metrics = LayoutMetrics::new();

        let requested = config.number_of_doors.value;
        let quota = DoorQuota::split(requested);
        self.emit(
            LogLevel::Debug,
            "door_quota",
            [
                json_kv("requested", requested),
                json_kv("front", quota.front),
                json_kv("back", quota.back),
                json_kv("left", quota.left),
                json_kv("right", quota.right),
            ],
        );
        let shortfall = quota.shortfall(requested);
        if shortfall > 0 {
            self.emit(
                LogLevel::Warn,
                "door_quota_shortfall",
                [
                    json_kv("requested", requested),
                    json_kv("assigned", quota.total()),
                    json_kv("missing", shortfall),
                ],
            );
        }

        let mut walls = BTreeMap::new();
        for side in WallSide::ALL {
            let length = if side.runs_along_length() {
                config.length.value
            } else {
                config.width.value
            };
            let spec = WallSpec {
                length,
                height: config.height.value,
                door: config.door_size.value,
                window: config.window_size.value,
                window_spacing: config.window_spacing.value,
                door_count: quota.for_side(side),
            };
            let wall = self.engine.layout_wall(&spec);
            self.metrics.record_wall(&wall);
            self.emit(
                LogLevel::Debug,
                "wall_built",
                [
                    json_str("side", side.as_str()),
                    json_kv("length", length),
                    json_kv("rows", wall.row_count()),
                    json_kv("doors", spec.door_count),
                    json_kv("overshoot", wall.overshoot()),
                ],
            );
            walls.insert(side, wall);
        }

        if let Some(logger) = &self.logger {
            let _ = logger.log_event(self.metrics.snapshot().to_log_event(METRICS_TARGET));
        }

        Ok(BuildingLayout { quota, walls })
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        fields: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) {
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(event_with_fields(level, TARGET, message, fields));
        }
    }
}

impl Default for BuildingAssembler {
    fn default() -> Self {
        Self::new(WallLayoutEngine::default())
    }
}

/// Lay out a building with the default engine constants.
pub fn assemble_building(config: &BuildingConfig) -> Result<BuildingLayout> {
    BuildingAssembler::default().assemble(config)
}
