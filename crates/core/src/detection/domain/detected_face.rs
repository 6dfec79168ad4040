use crate::shared::region::Region;

/// A face found by the face pass, with the outcome of the eye pass over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectedFace {
    pub region: Region,
    pub has_eyes: bool,
}

impl DetectedFace {
    pub fn new(region: Region, has_eyes: bool) -> Self {
        Self { region, has_eyes }
    }
}
