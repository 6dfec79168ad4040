/// Multi-scale sliding-window parameters for one classifier pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanParams {
    /// Image pyramid step between scales.
    pub scale_factor: f64,
    /// Overlapping raw hits needed to keep a candidate.
    pub min_neighbors: i32,
    /// `(width, height)`; `None` leaves the bound to the classifier.
    pub min_size: Option<(u32, u32)>,
    pub max_size: Option<(u32, u32)>,
}

/// Whole-image face pass. Tuned to over-detect rather than miss faces.
pub const FACE_SCAN: ScanParams = ScanParams {
    scale_factor: 1.05,
    min_neighbors: 3,
    min_size: Some((20, 20)),
    max_size: Some((500, 500)),
};

/// Eye pass over a single face crop.
pub const EYE_SCAN: ScanParams = ScanParams {
    scale_factor: 1.1,
    min_neighbors: 3,
    min_size: None,
    max_size: None,
};
