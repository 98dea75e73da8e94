use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    /// Materializes the chart at the current clock into backend-agnostic primitives.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let layout = self.config.layout;
        let style = &self.config.style;
        let now = self.now_ms;

        let mut frame = RenderFrame::new(layout.viewport);
        self.x_axis.push_primitives(&mut frame, layout, style, now);
        self.y_axis.push_primitives(&mut frame, layout, style, now);
        self.markers.push_primitives(&mut frame, layout, style, now);
        self.labels.push_primitives(&mut frame, layout, style);
        if let Some(record) = self
            .tooltip
            .hovered()
            .and_then(|index| self.dataset.get(index))
        {
            self.tooltip
                .push_primitives(&mut frame, record, &self.markers, layout, style, now);
        }

        frame.validate()?;
        Ok(frame)
    }
}
