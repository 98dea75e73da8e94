pub mod dataset;
pub mod format;
pub mod scale;
pub mod transition;
pub mod types;

pub use dataset::{Dataset, Field, Record};
pub use format::format_number;
pub use scale::{LinearScale, build_x_scale, build_y_scale};
pub use transition::{AnimatedValue, DEFAULT_TRANSITION_MS, ease_cubic_in_out};
pub use types::{ChartLayout, Margins, Viewport};
