use tracing::debug;

use crate::core::{Dataset, Field, LinearScale, build_x_scale, build_y_scale};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{AxisLabels, AxisOrient, AxisView, ChartConfig, MarkerSet, Tooltip};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Field plotted on the x axis when a chart is created.
pub const INITIAL_X_FIELD: Field = Field::Healthcare;

/// Interactive scatter plot of obesity against a switchable x field.
///
/// `ScatterChart` owns the dataset, both scales, the retained axis and
/// marker view-models, the tooltip binding and the animation clock. Hosts
/// feed it clicks, pointer motion and clock ticks, then call `render`.
pub struct ScatterChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) dataset: Dataset,
    pub(super) selected: Field,
    pub(super) x_scale: LinearScale,
    pub(super) y_scale: LinearScale,
    pub(super) x_axis: AxisView,
    pub(super) y_axis: AxisView,
    pub(super) markers: MarkerSet,
    pub(super) labels: AxisLabels,
    pub(super) tooltip: Tooltip,
    /// Last pointer position over the canvas, cleared on leave.
    pub(super) pointer: Option<(f64, f64)>,
    pub(super) now_ms: f64,
}

impl<R: Renderer> ScatterChart<R> {
    /// Builds scales, axes, markers, labels and tooltip for `dataset`.
    pub fn new(renderer: R, dataset: Dataset, config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let layout = config.layout;
        let selected = INITIAL_X_FIELD;

        let x_scale = build_x_scale(&dataset, selected, layout)?;
        let y_scale = build_y_scale(&dataset, layout)?;
        let x_axis = AxisView::new(AxisOrient::Bottom, x_scale, config.tick_count);
        let y_axis = AxisView::new(AxisOrient::Left, y_scale, config.tick_count);
        let markers =
            MarkerSet::render_markers(&dataset, x_scale, y_scale, selected, &config.style);
        let mut tooltip = Tooltip::new(selected, config.tooltip_format);
        tooltip.attach_tooltip(selected);

        debug!(
            records = dataset.len(),
            field = %selected,
            x_domain = ?x_scale.domain(),
            y_domain = ?y_scale.domain(),
            "scatter chart initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            selected,
            x_scale,
            y_scale,
            x_axis,
            y_axis,
            markers,
            labels: AxisLabels::new(selected),
            tooltip,
            pointer: None,
            now_ms: 0.0,
        })
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn selected_field(&self) -> Field {
        self.selected
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn x_axis(&self) -> &AxisView {
        &self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> &AxisView {
        &self.y_axis
    }

    #[must_use]
    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    #[must_use]
    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Content of the visible tooltip, if any.
    #[must_use]
    pub fn tooltip_text(&self) -> Option<String> {
        let record = self.dataset.get(self.tooltip.hovered()?)?;
        Some(self.tooltip.content(record))
    }

    /// Marker centers in plot-area pixels at the current clock.
    #[must_use]
    pub fn marker_positions(&self) -> Vec<(f64, f64)> {
        self.markers
            .markers()
            .iter()
            .map(|marker| marker.center_at(self.now_ms))
            .collect()
    }
}
