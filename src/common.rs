mod det_box;
mod detection;

pub use det_box::*;
pub use detection::*;
