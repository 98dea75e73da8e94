use serde::{Deserialize, Serialize};

use super::{CirclePrimitive, LinePrimitive, RectPrimitive, TextPrimitive};

/// Drawing layers of one chart, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    Axis,
    Markers,
    MarkerLabels,
    AxisTitles,
    Tooltip,
}

impl CanvasLayerKind {
    /// Canonical bottom-to-top paint order.
    pub const CANONICAL: [Self; 5] = [
        Self::Axis,
        Self::Markers,
        Self::MarkerLabels,
        Self::AxisTitles,
        Self::Tooltip,
    ];
}

/// Primitives of one layer. Inside a layer, lines paint first, then rects,
/// circles, and texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn tooltip_paints_above_everything_else() {
        assert_eq!(
            CanvasLayerKind::CANONICAL.last().copied(),
            Some(CanvasLayerKind::Tooltip)
        );
        assert_eq!(
            CanvasLayerKind::CANONICAL.first().copied(),
            Some(CanvasLayerKind::Axis)
        );
    }
}
