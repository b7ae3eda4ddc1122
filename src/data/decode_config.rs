use anyhow::Result;

use crate::data::FrameSize;

/// Thresholds and model-input geometry for one decoder.
#[derive(Debug, Clone)]
pub struct DecodeConfig {
    /// Minimum class-conditional confidence for a candidate to survive.
    pub conf_threshold: f32,
    /// IoU above which a lower-confidence candidate is suppressed.
    pub nms_threshold: f32,
    /// Resolution the frame was resized to before inference.
    pub input_size: FrameSize,
    /// Optional class-id -> name table, presentation only.
    pub names: Option<Vec<String>>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            conf_threshold: 0.25,
            nms_threshold: 0.45,
            input_size: FrameSize::new(640, 640),
            names: None,
        }
    }
}

#[allow(dead_code)]
impl DecodeConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_conf_threshold(mut self, x: f32) -> Self {
        self.conf_threshold = x;
        self
    }

    pub fn with_nms_threshold(mut self, x: f32) -> Self {
        self.nms_threshold = x;
        self
    }

    pub fn with_input_size(mut self, size: FrameSize) -> Self {
        self.input_size = size;
        self
    }

    pub fn with_names(mut self, names: &[&str]) -> Self {
        self.names = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    /// Checks the configuration is decodable: thresholds in `[0, 1]` and a
    /// non-degenerate input resolution.
    pub fn validate(&self) -> Result<()> {
        if !self.conf_threshold.is_finite() || !(0.0..=1.0).contains(&self.conf_threshold) {
            anyhow::bail!(
                "confidence threshold must be within [0, 1], got {}",
                self.conf_threshold
            );
        }
        if !self.nms_threshold.is_finite() || !(0.0..=1.0).contains(&self.nms_threshold) {
            anyhow::bail!(
                "NMS threshold must be within [0, 1], got {}",
                self.nms_threshold
            );
        }
        if self.input_size.width == 0 || self.input_size.height == 0 {
            anyhow::bail!(
                "input resolution must be non-zero, got {}x{}",
                self.input_size.width,
                self.input_size.height
            );
        }
        Ok(())
    }

    /// Looks up the display name for a class id, if the table covers it.
    pub fn label_for(&self, class_id: usize) -> Option<String> {
        self.names
            .as_ref()
            .and_then(|names| names.get(class_id).cloned())
    }
}
