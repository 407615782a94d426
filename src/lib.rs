pub mod field;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use field::state::{apply_event, NVec2, ViewEvent, ViewState};
pub use field::sources::{FieldSource, PointMass};
pub use field::grid::{Domain, SampleGrid, DISPLACEMENT_SCALE};

pub use configuration::config::{DisplayConfig, ViewConfig};

pub use visualization::view2d::run_view;

pub use benchmark::benchmark::{bench_field, bench_rebuild_curve};
