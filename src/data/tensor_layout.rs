/// Where the candidate-wide objectness score lives in a row, if anywhere.
///
/// YOLOv5/v6/v7-style exports carry an objectness column at index 4 ahead of
/// the class scores; YOLOv8/v9/v11-style exports drop it and the best class
/// score stands alone (objectness implicitly 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    ObjectnessPresent,
    ObjectnessFree,
}

impl LayoutVariant {
    /// Column index where the per-class scores begin.
    pub fn class_start(&self) -> usize {
        match self {
            Self::ObjectnessPresent => 5,
            Self::ObjectnessFree => 4,
        }
    }

    pub fn has_objectness(&self) -> bool {
        matches!(self, Self::ObjectnessPresent)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ObjectnessPresent => "obj@4",
            Self::ObjectnessFree => "no-obj",
        }
    }
}

/// Result of the single shape inspection performed per tensor.
///
/// Both the axis-orientation decision (which axis holds candidates) and the
/// variant decision (objectness or not) come from the same comparison of the
/// two non-batch axis lengths, so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorLayout {
    pub variant: LayoutVariant,
    /// Candidate count after normalization.
    pub rows: usize,
    /// Attribute count after normalization.
    pub cols: usize,
    /// Whether the two non-batch axes must be swapped to get rows=candidates.
    pub transpose: bool,
}

impl TensorLayout {
    /// Minimum attribute count: 4 box values plus at least an objectness
    /// slot and one class score, or two class scores.
    const MIN_COLS: usize = 6;

    /// Classifies a raw output shape, or `None` for any shape this crate
    /// does not decode (wrong rank, batch != 1, too few attributes).
    ///
    /// Rank 2 is taken as candidates x attributes as-is. Rank 3 with a unit
    /// batch axis resolves the remaining two axes by size: candidates
    /// typically outnumber the small fixed attribute count, so the larger
    /// axis is the candidate axis. An attribute axis strictly smaller than
    /// the candidate axis is the objectness-free export style.
    pub fn classify(shape: &[usize]) -> Option<TensorLayout> {
        let layout = match shape {
            &[rows, cols] => TensorLayout {
                variant: LayoutVariant::ObjectnessPresent,
                rows,
                cols,
                transpose: false,
            },
            &[1, d1, d2] => {
                let variant = if d1 < d2 {
                    LayoutVariant::ObjectnessFree
                } else {
                    LayoutVariant::ObjectnessPresent
                };
                if d1 > d2 {
                    TensorLayout {
                        variant,
                        rows: d1,
                        cols: d2,
                        transpose: false,
                    }
                } else {
                    TensorLayout {
                        variant,
                        rows: d2,
                        cols: d1,
                        transpose: true,
                    }
                }
            }
            _ => return None,
        };

        if layout.cols < Self::MIN_COLS {
            return None;
        }
        Some(layout)
    }

    /// Number of class-score columns in a row.
    pub fn num_classes(&self) -> usize {
        self.cols.saturating_sub(self.variant.class_start())
    }
}
