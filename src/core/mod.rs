pub mod category;
pub mod chart_spec;
pub mod grouped_bar;
pub mod scale;
pub mod series;
pub mod types;

pub use category::{build_categories, category_label, filter_rows_by_manager};
pub use chart_spec::ChartSpec;
pub use grouped_bar::{BarGeometry, PlacedBar, PositionPlan, layout};
pub use scale::LinearScale;
pub use series::extract_series;
pub use types::{Category, Row, Series, Viewport};
