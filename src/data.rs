mod decode_config;
mod frame_size;
mod shape_trace;
mod tensor_layout;

pub use decode_config::*;
pub use frame_size::*;
pub use shape_trace::*;
pub use tensor_layout::*;
