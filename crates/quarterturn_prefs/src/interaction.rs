use quarterturn_core::ResolveParams;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InteractionPreferences {
    /// Number of points that the mouse must be dragged to twist the puzzle.
    pub drag_threshold: f32,
    /// Minimum dominant component of a picked surface normal.
    pub normal_threshold: f32,
}
impl Default for InteractionPreferences {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            normal_threshold: 0.1,
        }
    }
}
impl InteractionPreferences {
    pub fn resolve_params(&self) -> ResolveParams {
        ResolveParams {
            normal_threshold: self.normal_threshold,
            min_drag_distance: self.drag_threshold.max(0.0),
        }
    }
}
