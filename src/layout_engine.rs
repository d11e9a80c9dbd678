mod engine;
pub(crate) mod graph;

pub use engine::LayoutEngine;
pub use graph::{Orientation, PopupBox, Shift};
