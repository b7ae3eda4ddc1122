use ndarray::{s, ArrayView1};

use crate::data::LayoutVariant;

/// Objectness at or below this is a dead anchor; skip it before paying for
/// the class-score scan.
pub(crate) const OBJECTNESS_EPSILON: f32 = 1e-6;

/// Scores one candidate row of the normalized matrix.
///
/// Returns the winning class index and the class-conditional confidence,
/// or `None` when the row is rejected. Ties in the class scan go to the
/// lowest index. The scan runs over a bounds-checked view of the row's
/// class-score sub-range; the 4 box attributes are not touched here.
pub(crate) fn score_row(
    row: ArrayView1<'_, f32>,
    variant: LayoutVariant,
    conf_threshold: f32,
) -> Option<(usize, f32)> {
    let objectness = if variant.has_objectness() {
        let objectness = row[4];
        if objectness <= OBJECTNESS_EPSILON {
            return None;
        }
        objectness
    } else {
        1.0
    };

    let class_scores = row.slice(s![variant.class_start()..]);
    let mut class_id = 0usize;
    let mut best = f32::NEG_INFINITY;
    for (i, &score) in class_scores.iter().enumerate() {
        if score > best {
            best = score;
            class_id = i;
        }
    }

    let confidence = objectness * best;
    if confidence < conf_threshold {
        return None;
    }
    Some((class_id, confidence))
}
