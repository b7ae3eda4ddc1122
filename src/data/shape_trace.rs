use std::sync::atomic::{AtomicBool, Ordering};

use crate::data::TensorLayout;

/// Logs the observed tensor shape at most once per decoder instance.
///
/// Model exports keep the same output shape for their whole lifetime, so one
/// line is all the diagnostic value there is. The latch is a relaxed swap:
/// a duplicate line under concurrent first calls is harmless.
#[derive(Debug, Default)]
pub struct ShapeTrace {
    logged: AtomicBool,
}

impl ShapeTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, raw_shape: &[usize], layout: &TensorLayout) {
        if self.logged.swap(true, Ordering::Relaxed) {
            return;
        }
        log::info!(
            "Output shape: {:?}, normalized {}x{}, layout={}",
            raw_shape,
            layout.rows,
            layout.cols,
            layout.variant.name()
        );
    }
}
