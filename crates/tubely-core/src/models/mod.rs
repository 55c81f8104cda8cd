pub mod geometry;
pub mod video;

pub use geometry::GeometryCategory;
pub use video::Video;
