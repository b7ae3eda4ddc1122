//! Turns one raw object-detection output tensor into a de-duplicated list
//! of labeled, image-space bounding boxes.
//!
//! This is the post-processing stage between an inference engine and any
//! downstream consumer. The caller runs the model and owns the original
//! frame dimensions; this crate determines the tensor layout, scores each
//! candidate, reconstructs pixel boxes in the original image, and
//! suppresses overlapping duplicates. Running inference, video I/O, and
//! drawing stay with the caller.

pub mod common;
pub mod data;

mod box_decode;
mod detection_processing;
mod nms;
mod normalize;
mod scoring;

use anyhow::Result;
use ndarray::ArrayViewD;

pub use crate::nms::{non_max_suppression, Nms};
pub use crate::normalize::{tensor_from_f16, tensor_to_f32};

use crate::common::Detection;
use crate::data::{DecodeConfig, FrameSize, ShapeTrace};

/// Decodes output tensors frame after frame under one fixed configuration.
///
/// Holds the shape diagnostic latch, so the observed tensor layout is
/// logged once per decoder rather than once per frame.
#[derive(Debug)]
pub struct TensorDecoder {
    config: DecodeConfig,
    shape_trace: ShapeTrace,
}

impl TensorDecoder {
    pub fn new(config: DecodeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            shape_trace: ShapeTrace::new(),
        })
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Decodes one inference output into detections in original-image
    /// coordinates, ordered by descending confidence.
    ///
    /// Never fails: a tensor shape this crate does not support decodes to
    /// an empty list.
    pub fn decode(&self, tensor: ArrayViewD<'_, f32>, orig_size: FrameSize) -> Vec<Detection> {
        detection_processing::process_tensor(tensor, orig_size, &self.config, &self.shape_trace)
    }
}

/// One-call decode for callers that do not hold a [`TensorDecoder`].
pub fn decode(
    tensor: ArrayViewD<'_, f32>,
    orig_size: FrameSize,
    conf_threshold: f32,
    nms_threshold: f32,
    input_size: FrameSize,
) -> Vec<Detection> {
    let config = DecodeConfig::new()
        .with_conf_threshold(conf_threshold)
        .with_nms_threshold(nms_threshold)
        .with_input_size(input_size);
    detection_processing::process_tensor(tensor, orig_size, &config, &ShapeTrace::new())
}
