//! Interactive scatter chart: retained view-models plus the controller that
//! drives them.

mod axis;
mod clock;
mod config;
mod engine;
mod interaction_controller;
mod labels;
mod markers;
mod render_frame_builder;
mod snapshot;
mod tooltip;

pub use axis::{AxisOrient, AxisTick, AxisView};
pub use config::{ChartConfig, ChartStyle, LabelPolicy, TooltipFormat};
pub use engine::{INITIAL_X_FIELD, ScatterChart};
pub use labels::{AxisLabelId, AxisLabels, LabelClass};
pub use markers::{LabelView, MarkerSet, MarkerView};
pub use snapshot::{
    AxisLabelSnapshot, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
    MarkerSnapshot, TooltipSnapshot,
};
pub use tooltip::{TOOLTIP_LINE_BREAK, Tooltip};
