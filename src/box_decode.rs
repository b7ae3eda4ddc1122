use crate::common::DetBox;
use crate::data::FrameSize;

/// Box attributes at or below this are fractions of the input resolution;
/// above it they are input-resolution pixels. 1.5 rather than 1.0 so a
/// fractional box spilling slightly past the frame edge stays fractional.
pub(crate) const NORMALIZED_CUTOFF: f32 = 1.5;

/// Coordinate space of one candidate's raw box attributes, detected per
/// candidate rather than per tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CoordSpace {
    Normalized,
    InputPixels,
}

pub(crate) fn coord_space(raw: [f32; 4]) -> CoordSpace {
    if raw.iter().all(|&v| v <= NORMALIZED_CUTOFF) {
        CoordSpace::Normalized
    } else {
        CoordSpace::InputPixels
    }
}

/// Maps a candidate's center-format box into a clamped corner-format pixel
/// rectangle in the original image, or `None` when the clamped box has no
/// area left.
///
/// Fractions are resolution independent, so the normalized case multiplies
/// by the original dimensions directly and no resize scale appears. The
/// pixel case maps input-resolution pixels through the per-axis resize
/// ratio.
pub(crate) fn decode_box(raw: [f32; 4], input: FrameSize, orig: FrameSize) -> Option<DetBox> {
    let [x, y, w, h] = raw;

    let (cx_px, cy_px, w_px, h_px) = match coord_space(raw) {
        CoordSpace::Normalized => (
            x * orig.width_f32(),
            y * orig.height_f32(),
            w * orig.width_f32(),
            h * orig.height_f32(),
        ),
        CoordSpace::InputPixels => {
            let sx = orig.width_f32() / input.width_f32();
            let sy = orig.height_f32() / input.height_f32();
            (x * sx, y * sy, w * sx, h * sy)
        }
    };

    let left = (cx_px - w_px / 2.0) as i32;
    let top = (cy_px - h_px / 2.0) as i32;
    let bbox = DetBox::from_xywh(left, top, w_px as i32, h_px as i32).clip(orig);

    (bbox.area() > 0).then_some(bbox)
}
