use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{ChartLayout, Field, Record, format_number};
use crate::render::{CanvasLayerKind, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{ChartStyle, MarkerSet, TooltipFormat};

/// Line separator inside tooltip content.
pub const TOOLTIP_LINE_BREAK: &str = "<br>";

/// Average glyph width relative to font size, used to size the tooltip box.
const TOOLTIP_CHAR_WIDTH_RATIO: f64 = 0.6;

/// Per-marker hover tooltip bound to the selected x field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    field: Field,
    format: TooltipFormat,
    generation: u64,
    hovered: Option<usize>,
}

impl Tooltip {
    #[must_use]
    pub fn new(field: Field, format: TooltipFormat) -> Self {
        Self {
            field,
            format,
            generation: 0,
            hovered: None,
        }
    }

    /// Rebinds content to `field`. Each call starts a new binding generation.
    pub fn attach_tooltip(&mut self, field: Field) {
        self.field = field;
        self.generation += 1;
    }

    #[must_use]
    pub fn field(&self) -> Field {
        self.field
    }

    #[must_use]
    pub fn format(&self) -> TooltipFormat {
        self.format
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.hovered.is_some()
    }

    pub fn show(&mut self, record_index: usize) {
        self.hovered = Some(record_index);
    }

    pub fn hide(&mut self) {
        self.hovered = None;
    }

    /// Tooltip markup for `record`, lines separated by `<br>`.
    #[must_use]
    pub fn content(&self, record: &Record) -> String {
        let value = format_number(record.value(self.field));
        let obesity = format_number(record.obesity);
        let region = &record.region;

        match (self.format, self.field) {
            (TooltipFormat::Reference, Field::Healthcare) | (TooltipFormat::Normalized, _) => {
                format!(
                    "{region}{TOOLTIP_LINE_BREAK}{}: {value}{TOOLTIP_LINE_BREAK}{}: {obesity}",
                    self.field.display_name(),
                    Field::Obesity.display_name(),
                )
            }
            (TooltipFormat::Reference, _) => format!(
                "{region}{TOOLTIP_LINE_BREAK}{}: {value}{TOOLTIP_LINE_BREAK} {obesity}",
                Field::Smokes.display_name(),
            ),
        }
    }

    #[must_use]
    pub fn lines(&self, record: &Record) -> SmallVec<[String; 3]> {
        self.content(record)
            .split(TOOLTIP_LINE_BREAK)
            .map(str::to_owned)
            .collect()
    }

    /// Draws the tooltip box above the hovered marker.
    ///
    /// The box is centered on the marker top, then shifted by
    /// `style.tooltip_offset_px` (`[top, left]`).
    pub fn push_primitives(
        &self,
        frame: &mut RenderFrame,
        record: &Record,
        markers: &MarkerSet,
        layout: ChartLayout,
        style: &ChartStyle,
        now_ms: f64,
    ) {
        let Some(index) = self.hovered else {
            return;
        };
        let Some(marker) = markers.markers().get(index) else {
            return;
        };
        let (x, y) = marker.center_at(now_ms);
        if !x.is_finite() || !y.is_finite() {
            return;
        }

        let lines = self.lines(record);
        let widest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let padding = style.tooltip_padding_px;
        let width = widest * style.tooltip_font_px * TOOLTIP_CHAR_WIDTH_RATIO + padding * 2.0;
        let height = lines.len() as f64 * style.tooltip_line_height_px + padding * 2.0;

        let (anchor_x, anchor_y) = layout.to_canvas(x, y - markers.radius_px());
        let [offset_top, offset_left] = style.tooltip_offset_px;
        let left = anchor_x - width / 2.0 + offset_left;
        let top = anchor_y - height + offset_top;

        frame.push_rect(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(left, top, width, height, style.tooltip_background_color)
                .with_corner_radius(4.0),
        );

        let center_x = left + width / 2.0;
        let leading = (style.tooltip_line_height_px - style.tooltip_font_px).max(0.0) / 2.0;
        for (row, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let baseline = top
                + padding
                + row as f64 * style.tooltip_line_height_px
                + leading
                + style.tooltip_font_px;
            frame.push_text(
                CanvasLayerKind::Tooltip,
                TextPrimitive::new(
                    line.clone(),
                    center_x,
                    baseline,
                    style.tooltip_font_px,
                    style.tooltip_text_color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}
