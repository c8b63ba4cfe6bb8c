pub mod color;
pub mod geometry;
pub mod ids;

pub use color::Color;
pub use geometry::{BoundingBox, Size};
pub use ids::NodeId;
