//! GTK4 host for [`ScatterChart`]: draws through cairo and forwards clicks,
//! pointer motion and a frame clock to the chart.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::chart::ScatterChart;
use crate::render::{CairoContextRenderer, Renderer};

/// Interval between animation clock ticks (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub type SharedChart<R> = Rc<RefCell<ScatterChart<R>>>;

pub struct GtkChartAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: SharedChart<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkChartAdapter<R> {
    #[must_use]
    pub fn new(chart: ScatterChart<R>) -> Self {
        let viewport = chart.config().layout.viewport;
        let engine = Rc::new(RefCell::new(chart));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));
        drawing_area.set_draw_func({
            let engine = Rc::clone(&engine);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = engine.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "scatter chart draw failed");
                }
            }
        });

        attach_pointer_controllers(&drawing_area, &engine);
        attach_frame_clock(&drawing_area, &engine);

        Self {
            engine,
            drawing_area,
        }
    }

    #[must_use]
    pub fn engine(&self) -> SharedChart<R> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }
}

fn attach_pointer_controllers<R: Renderer + CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    engine: &SharedChart<R>,
) {
    let click = gtk::GestureClick::new();
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        click.connect_pressed(move |_, _, x, y| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                match chart.click_at(x, y) {
                    Ok(true) => drawing_area.queue_draw(),
                    Ok(false) => {}
                    Err(err) => warn!(error = %err, "axis label click rejected"),
                }
            }
        });
    }
    drawing_area.add_controller(click);

    let motion = gtk::EventControllerMotion::new();
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                chart.pointer_move(x, y);
            }
            drawing_area.queue_draw();
        });
    }
    {
        let engine = Rc::clone(engine);
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            if let Ok(mut chart) = engine.try_borrow_mut() {
                chart.pointer_leave();
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(motion);
}

/// Advances the chart clock with wall time and redraws while transitions run.
fn attach_frame_clock<R: Renderer + CairoContextRenderer + 'static>(
    drawing_area: &gtk::DrawingArea,
    engine: &SharedChart<R>,
) {
    let engine = Rc::clone(engine);
    let weak_area = drawing_area.downgrade();
    let last_tick = Cell::new(Instant::now());

    gtk::glib::timeout_add_local(FRAME_INTERVAL, move || {
        let Some(drawing_area) = weak_area.upgrade() else {
            return gtk::glib::ControlFlow::Break;
        };

        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_tick.replace(now)).as_secs_f64() * 1_000.0;
        if let Ok(mut chart) = engine.try_borrow_mut() {
            let was_animating = chart.is_animating();
            chart.advance_by(elapsed_ms);
            if was_animating || chart.is_animating() {
                drawing_area.queue_draw();
            }
        }
        gtk::glib::ControlFlow::Continue
    });
}
