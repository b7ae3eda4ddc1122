use ndarray::{ArrayViewD, Axis};
use rayon::prelude::*;

use crate::common::Detection;
use crate::data::{DecodeConfig, FrameSize, ShapeTrace, TensorLayout};
use crate::{box_decode, nms, normalize, scoring};

/// Runs the full decode pipeline for one output tensor.
///
/// classify -> normalize -> score + decode per row -> suppress. A tensor
/// this crate cannot decode (wrong rank, batch != 1, too few attribute
/// columns) yields an empty list; a malformed frame must never stall the
/// stream it came from. The row scan is parallel, rows share nothing;
/// suppression needs the materialized list and stays sequential.
pub(crate) fn process_tensor(
    tensor: ArrayViewD<'_, f32>,
    orig_size: FrameSize,
    config: &DecodeConfig,
    shape_trace: &ShapeTrace,
) -> Vec<Detection> {
    if tensor.is_empty() {
        return Vec::new();
    }
    let Some(layout) = TensorLayout::classify(tensor.shape()) else {
        return Vec::new();
    };
    shape_trace.record(tensor.shape(), &layout);

    let Some(matrix) = normalize::as_matrix(tensor, &layout) else {
        return Vec::new();
    };

    let candidates: Vec<Detection> = matrix
        .axis_iter(Axis(0))
        .into_par_iter()
        .filter_map(|row| {
            let (class_id, confidence) =
                scoring::score_row(row, layout.variant, config.conf_threshold)?;
            let raw = [row[0], row[1], row[2], row[3]];
            let bbox = box_decode::decode_box(raw, config.input_size, orig_size)?;
            Some(Detection::new(
                class_id,
                bbox,
                config.label_for(class_id),
                confidence,
            ))
        })
        .collect();

    log::trace!(
        "{} candidates above threshold before suppression",
        candidates.len()
    );

    nms::non_max_suppression(candidates, config.conf_threshold, config.nms_threshold)
}
