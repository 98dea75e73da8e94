use serde::{Deserialize, Serialize};

use crate::core::{ChartLayout, Field};
use crate::error::{ChartError, ChartResult};
use crate::render::{CanvasLayerKind, RenderFrame, TextHAlign, TextPrimitive};

use super::ChartStyle;

/// Vertical gap between the plot bottom and the label group origin.
const LABEL_GROUP_OFFSET_PX: f64 = 20.0;
/// Baseline step between stacked x-axis labels.
const LABEL_LINE_STEP_PX: f64 = 20.0;
/// Distance of the rotated y-axis title from the canvas left edge.
const Y_TITLE_INSET_PX: f64 = 30.0;

/// Presentation class of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelClass {
    Active,
    Inactive,
}

impl LabelClass {
    #[must_use]
    pub const fn for_selection(selected: bool) -> Self {
        if selected { Self::Active } else { Self::Inactive }
    }
}

/// Clickable x-axis labels, one per selectable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisLabelId {
    HealthRisks,
    Smokes,
}

impl AxisLabelId {
    /// Stacking order below the x axis.
    pub const ALL: [Self; 2] = [Self::HealthRisks, Self::Smokes];

    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::HealthRisks => Field::Healthcare,
            Self::Smokes => Field::Smokes,
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::HealthRisks => "Health Risks",
            Self::Smokes => "Smokes",
        }
    }

    /// Label wired to `field`. Only the two x-axis fields have one.
    pub fn for_field(field: Field) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.field() == field)
            .ok_or_else(|| ChartError::UnknownField(field.to_string()))
    }

    const fn slot(self) -> usize {
        match self {
            Self::HealthRisks => 0,
            Self::Smokes => 1,
        }
    }
}

/// Axis-label group below the plot plus the fixed y-axis title.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    classes: [LabelClass; 2],
}

impl AxisLabels {
    pub const Y_TITLE: &'static str = "Obesity Degree";

    #[must_use]
    pub fn new(selected: Field) -> Self {
        let mut labels = Self {
            classes: [LabelClass::Inactive; 2],
        };
        labels.mark_selected(selected);
        labels
    }

    #[must_use]
    pub fn class(&self, id: AxisLabelId) -> LabelClass {
        self.classes[id.slot()]
    }

    /// The y-axis title is always active.
    #[must_use]
    pub fn y_title_class(&self) -> LabelClass {
        LabelClass::Active
    }

    /// Gives `active` to the label of `field` and `inactive` to every other one.
    pub fn mark_selected(&mut self, field: Field) {
        for id in AxisLabelId::ALL {
            self.classes[id.slot()] = LabelClass::for_selection(id.field() == field);
        }
    }

    /// Text anchor (center, baseline) of `id` in canvas pixels.
    #[must_use]
    pub fn anchor(layout: ChartLayout, id: AxisLabelId) -> (f64, f64) {
        let step = LABEL_LINE_STEP_PX * (id.slot() as f64 + 1.0);
        layout.to_canvas(
            layout.plot_width() / 2.0,
            layout.plot_height() + LABEL_GROUP_OFFSET_PX + step,
        )
    }

    /// Label whose estimated text box contains the canvas point.
    #[must_use]
    pub fn hit_test(
        &self,
        layout: ChartLayout,
        style: &ChartStyle,
        x: f64,
        y: f64,
    ) -> Option<AxisLabelId> {
        AxisLabelId::ALL.into_iter().find(|id| {
            let (center_x, baseline) = Self::anchor(layout, *id);
            let half_width = id.text().chars().count() as f64 * style.label_char_width_px / 2.0;
            let top = baseline - style.axis_label_font_px;
            let bottom = baseline + style.axis_label_font_px * 0.25;
            (center_x - half_width..=center_x + half_width).contains(&x)
                && (top..=bottom).contains(&y)
        })
    }

    pub fn push_primitives(
        &self,
        frame: &mut RenderFrame,
        layout: ChartLayout,
        style: &ChartStyle,
    ) {
        for id in AxisLabelId::ALL {
            let (x, y) = Self::anchor(layout, id);
            frame.push_text(
                CanvasLayerKind::AxisTitles,
                styled_text(id.text(), x, y, self.class(id), style),
            );
        }

        let x = Y_TITLE_INSET_PX + style.axis_label_font_px;
        let y = layout.margins.top + layout.plot_height() / 2.0;
        frame.push_text(
            CanvasLayerKind::AxisTitles,
            styled_text(Self::Y_TITLE, x, y, self.y_title_class(), style).with_rotation(-90.0),
        );
    }
}

fn styled_text(text: &str, x: f64, y: f64, class: LabelClass, style: &ChartStyle) -> TextPrimitive {
    let (color, bold) = match class {
        LabelClass::Active => (style.axis_label_active_color, true),
        LabelClass::Inactive => (style.axis_label_inactive_color, false),
    };
    TextPrimitive::new(
        text,
        x,
        y,
        style.axis_label_font_px,
        color,
        TextHAlign::Center,
    )
    .with_bold(bold)
}
