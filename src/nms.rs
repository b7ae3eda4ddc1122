/// Overlap and ranking queries the suppression routine needs from a
/// candidate.
pub trait Nms {
    fn iou(&self, other: &Self) -> f32;
    fn confidence(&self) -> f32;
}

/// Greedy class-agnostic non-maximum suppression.
///
/// Candidates below `conf_threshold` are dropped first (the scorer already
/// applied the same floor; this one must never be higher). The rest are
/// ranked by descending confidence with a stable sort, so equal scores keep
/// their original index order, and a candidate survives only if its IoU
/// with every higher-ranked survivor stays at or below `nms_threshold`.
/// Suppression is evaluated over all classes jointly.
///
/// Output order is the selection order: descending confidence among kept
/// candidates. Running the routine on its own output returns it unchanged.
pub fn non_max_suppression<T: Nms>(
    mut candidates: Vec<T>,
    conf_threshold: f32,
    nms_threshold: f32,
) -> Vec<T> {
    candidates.retain(|c| c.confidence() >= conf_threshold);
    candidates.sort_by(|a, b| b.confidence().total_cmp(&a.confidence()));

    let mut keep: Vec<T> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if keep.iter().all(|k| k.iou(&candidate) <= nms_threshold) {
            keep.push(candidate);
        }
    }
    keep
}
