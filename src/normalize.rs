use ndarray::{Array, ArrayD, ArrayViewD, CowArray, Ix2};

use crate::data::TensorLayout;

/// Widens a tensor of any narrower element type (fp16 exports, quantized
/// u8/i8 outputs) to the f32 the decoding pipeline works in.
pub fn tensor_to_f32<T>(tensor: ArrayViewD<'_, T>) -> ArrayD<f32>
where
    T: Copy + Into<f32>,
{
    tensor.mapv(Into::into)
}

/// [`tensor_to_f32`] pinned to the fp16 element type ONNX exports use.
pub fn tensor_from_f16(tensor: ArrayViewD<'_, half::f16>) -> ArrayD<f32> {
    tensor_to_f32(tensor)
}

/// Canonicalizes a classified tensor into a candidates x attributes matrix.
///
/// Rank 2 and contiguous rank 3 come back as zero-copy views; only a
/// non-contiguous rank-3 input pays for a copy. Returns `None` when the
/// view cannot be brought into the classified shape, which downstream
/// treats as zero candidates.
pub(crate) fn as_matrix<'a>(
    tensor: ArrayViewD<'a, f32>,
    layout: &TensorLayout,
) -> Option<CowArray<'a, f32, Ix2>> {
    let shape = tensor.shape().to_vec();
    let matrix: CowArray<'a, f32, Ix2> = match shape.as_slice() {
        &[_, _] => CowArray::from(tensor.into_dimensionality::<Ix2>().ok()?),
        &[1, d1, d2] => match tensor.clone().into_shape_with_order((d1, d2)) {
            Ok(view) => CowArray::from(view),
            Err(_) => {
                let data: Vec<f32> = tensor.iter().copied().collect();
                CowArray::from(Array::from_shape_vec((d1, d2), data).ok()?)
            }
        },
        _ => return None,
    };

    if layout.transpose {
        Some(matrix.reversed_axes())
    } else {
        Some(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn rank2_is_passed_through() {
        let tensor = Array2::<f32>::zeros((10, 6)).into_dyn();
        let layout = TensorLayout::classify(tensor.shape()).unwrap();
        let matrix = as_matrix(tensor.view(), &layout).unwrap();
        assert_eq!(matrix.dim(), (10, 6));
    }

    #[test]
    fn attributes_first_rank3_is_transposed() {
        // value at [0, attr, cand] must land at [cand, attr]
        let mut tensor = Array3::<f32>::zeros((1, 6, 10));
        tensor[[0, 2, 7]] = 42.0;
        let tensor = tensor.into_dyn();
        let layout = TensorLayout::classify(tensor.shape()).unwrap();
        let matrix = as_matrix(tensor.view(), &layout).unwrap();
        assert_eq!(matrix.dim(), (10, 6));
        assert_eq!(matrix[[7, 2]], 42.0);
    }

    #[test]
    fn candidates_first_rank3_is_reshaped_in_place() {
        let mut tensor = Array3::<f32>::zeros((1, 10, 6));
        tensor[[0, 7, 2]] = 42.0;
        let tensor = tensor.into_dyn();
        let layout = TensorLayout::classify(tensor.shape()).unwrap();
        let matrix = as_matrix(tensor.view(), &layout).unwrap();
        assert_eq!(matrix.dim(), (10, 6));
        assert_eq!(matrix[[7, 2]], 42.0);
    }

    #[test]
    fn widening_covers_fp16() {
        use half::f16;
        let tensor =
            Array2::from_shape_fn((2, 6), |(r, c)| f16::from_f32((r * 6 + c) as f32)).into_dyn();
        let widened = tensor_to_f32(tensor.view());
        assert_eq!(widened[[1, 3]], 9.0);
    }
}
