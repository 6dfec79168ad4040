//! Copies between our pixel buffers and OpenCV `Mat`s.

use image::GrayImage;
use opencv::core::{Mat, Scalar, CV_8UC1, CV_8UC3};
use opencv::prelude::*;

use crate::shared::frame::Frame;

pub fn gray_to_mat(image: &GrayImage) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        image.height() as i32,
        image.width() as i32,
        CV_8UC1,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(image.as_raw());
    Ok(mat)
}

/// Channel order is preserved as-is; callers pick colors accordingly.
pub fn frame_to_mat(frame: &Frame) -> opencv::Result<Mat> {
    if frame.channels() != 3 {
        return Err(opencv::Error::new(
            opencv::core::StsBadArg,
            format!("expected an RGB frame, got {} channel(s)", frame.channels()),
        ));
    }
    let mut mat = Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        CV_8UC3,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(frame.data());
    Ok(mat)
}

/// Writes `mat` back into `frame`. Dimensions must match.
pub fn copy_mat_into_frame(mat: &Mat, frame: &mut Frame) -> opencv::Result<()> {
    let bytes = mat.data_bytes()?;
    if bytes.len() != frame.data().len() {
        return Err(opencv::Error::new(
            opencv::core::StsUnmatchedSizes,
            format!(
                "mat holds {} bytes, frame expects {}",
                bytes.len(),
                frame.data().len()
            ),
        ));
    }
    frame.data_mut().copy_from_slice(bytes);
    Ok(())
}
