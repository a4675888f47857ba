//! Spatial indexing structures.

mod kdtree;

pub use kdtree::KdTree2;
