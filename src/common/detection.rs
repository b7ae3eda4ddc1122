use serde::{Deserialize, Serialize};

use crate::common::DetBox;
use crate::nms::Nms;

/// One decoded, de-duplicated detection in original-image coordinates.
///
/// Constructed only after a candidate survives scoring, box decoding,
/// clamping, and suppression; consumers treat it as read-only.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class_id: usize,
    pub confidence: f32,
    pub bbox: DetBox,
    pub label: Option<String>,
}

impl Nms for Detection {
    /// Computes the intersection over union (IoU) between this detection's
    /// bounding box and another's.
    fn iou(&self, other: &Self) -> f32 {
        let union = self.bbox.union(&other.bbox);
        if union <= 0 {
            return 0.0;
        }
        self.bbox.intersect(&other.bbox) as f32 / union as f32
    }

    /// Returns the confidence score of the detection.
    fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl Detection {
    pub fn new(class_id: usize, bbox: DetBox, label: Option<String>, confidence: f32) -> Self {
        Self {
            class_id,
            confidence,
            bbox,
            label,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Returns the human-readable label, falling back to the numeric class
    /// id when no name table covered this class.
    pub fn get_label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => format!("id={}", self.class_id),
        }
    }
}
