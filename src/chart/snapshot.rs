use serde::{Deserialize, Serialize};

use crate::core::Field;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{AxisLabelId, LabelClass, ScatterChart};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSnapshot {
    pub abbreviation: String,
    pub cx: f64,
    pub cy: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabelSnapshot {
    pub text: String,
    pub field: Field,
    pub class: LabelClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipSnapshot {
    pub record_index: usize,
    pub content: String,
}

/// Deterministic view of chart state for regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub selected_field: Field,
    pub now_ms: f64,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub x_ticks: Vec<f64>,
    pub markers: Vec<MarkerSnapshot>,
    pub axis_labels: Vec<AxisLabelSnapshot>,
    pub active_marker_labels: usize,
    pub inactive_marker_labels: usize,
    pub tooltip_generation: u64,
    #[serde(default)]
    pub tooltip: Option<TooltipSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ScatterChart<R> {
    /// Builds a snapshot at the current clock.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let markers = self
            .markers
            .markers()
            .iter()
            .map(|marker| {
                let (cx, cy) = marker.center_at(self.now_ms);
                MarkerSnapshot {
                    abbreviation: self
                        .dataset
                        .get(marker.record_index())
                        .map(|record| record.abbreviation.clone())
                        .unwrap_or_default(),
                    cx,
                    cy,
                }
            })
            .collect();

        let axis_labels = AxisLabelId::ALL
            .into_iter()
            .map(|id| AxisLabelSnapshot {
                text: id.text().to_owned(),
                field: id.field(),
                class: self.labels.class(id),
            })
            .collect();

        let tooltip = self.tooltip.hovered().and_then(|record_index| {
            self.dataset
                .get(record_index)
                .map(|record| TooltipSnapshot {
                    record_index,
                    content: self.tooltip.content(record),
                })
        });

        ChartSnapshot {
            selected_field: self.selected,
            now_ms: self.now_ms,
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain(),
            x_ticks: self.x_axis.tick_values(),
            markers,
            axis_labels,
            active_marker_labels: self.markers.active_label_count(),
            inactive_marker_labels: self.markers.inactive_label_count(),
            tooltip_generation: self.tooltip.generation(),
            tooltip,
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
