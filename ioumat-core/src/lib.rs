pub mod geometry;

// Re-export commonly used types
pub use geometry::bbox::Box2d;
pub use geometry::iou::{ious, ious_naive};
