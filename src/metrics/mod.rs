use crate::layout::{ElementKind, WallLayout};
use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running tallies over every wall laid out by an assembler.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    walls: u64,
    rows: u64,
    doors: u64,
    windows: u64,
    bricks: u64,
    overshooting_rows: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_wall(&mut self, wall: &WallLayout) {
        self.walls = self.walls.saturating_add(1);
        self.rows = self.rows.saturating_add(wall.row_count() as u64);

        for element in wall.rows().iter().flatten() {
            let counter = match element.kind {
                ElementKind::Door => &mut self.doors,
                ElementKind::Window => &mut self.windows,
                ElementKind::Brick => &mut self.bricks,
            };
            *counter = counter.saturating_add(1);
        }

        let overshooting = wall
            .rows()
            .iter()
            .filter(|row| row.last().is_some_and(|last| last.end() > wall.length))
            .count();
        self.overshooting_rows = self.overshooting_rows.saturating_add(overshooting as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            walls: self.walls,
            rows: self.rows,
            doors: self.doors,
            windows: self.windows,
            bricks: self.bricks,
            overshooting_rows: self.overshooting_rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub walls: u64,
    pub rows: u64,
    pub doors: u64,
    pub windows: u64,
    pub bricks: u64,
    pub overshooting_rows: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("walls".to_string(), json!(self.walls));
        map.insert("rows".to_string(), json!(self.rows));
        map.insert("doors".to_string(), json!(self.doors));
        map.insert("windows".to_string(), json!(self.windows));
        map.insert("bricks".to_string(), json!(self.bricks));
        map.insert("overshooting_rows".to_string(), json!(self.overshooting_rows));
        map
    }
}
