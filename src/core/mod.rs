pub mod random_walk;
pub mod range;
pub mod scale;
pub mod series;
pub mod types;

pub use random_walk::{RandomWalkGenerator, jittered_timestamps, random_walk_points};
pub use range::VisibleRange;
pub use scale::LinearScale;
pub use series::{Series, SeriesId};
pub use types::{AxisId, AxisKind, DataPoint, Point, Rect};
