//! Pure functions that turn a drag gesture into a layer rotation and compute
//! the resulting colors.
//!
//! The mapping from a screen-space drag to a turn direction is a fixed
//! convention: it looks only at the drag vector and ignores the camera and
//! the face that was grabbed.

use cgmath::{InnerSpace, Point2, Vector3};
use float_ord::FloatOrd;
use serde::{Deserialize, Serialize};

use crate::{
    ApplyError, Axis, Cubie, CubieSet, FaceColors, LATTICE_OFFSETS, LAYER_SIZE, LayerRotation,
    NoOp, PerCubie, Sign,
};

/// Relative tolerance under which the two largest components of a normal are
/// considered tied.
const NORMAL_TIE_TOLERANCE: f32 = 1e-3;

/// Tuning for [`resolve()`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct ResolveParams {
    /// Minimum magnitude of the largest component of the surface normal.
    pub normal_threshold: f32,
    /// Minimum length of the drag vector, in screen units. A drag must be
    /// strictly longer than this, so `0.0` still rejects a zero-length drag.
    pub min_drag_distance: f32,
}

impl Default for ResolveParams {
    fn default() -> Self {
        Self {
            normal_threshold: 0.1,
            min_drag_distance: 0.0,
        }
    }
}

/// Completed press-then-release gesture, as reported by the input layer.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct GestureInput {
    /// World-space surface normal at the picked point.
    pub normal: Vector3<f32>,
    /// Center of the picked cubie.
    pub hit_position: Vector3<f32>,
    /// Screen position where the drag started.
    pub drag_start: Point2<f32>,
    /// Screen position where the drag ended.
    pub drag_end: Point2<f32>,
}

/// Returns the axis of the largest component of `normal`, which identifies the
/// face that was grabbed.
///
/// Returns `None` if the largest component is below `threshold`, if any
/// component is not finite, or if two components are tied.
pub fn axis_from_normal(normal: Vector3<f32>, threshold: f32) -> Option<Axis> {
    let components: [f32; 3] = normal.into();
    if !components.iter().all(|c| c.is_finite()) {
        return None;
    }

    let mut by_magnitude =
        [Axis::X, Axis::Y, Axis::Z].map(|axis| (axis, components[axis as usize].abs()));
    by_magnitude.sort_by_key(|&(_, magnitude)| std::cmp::Reverse(FloatOrd(magnitude)));
    let [(axis, largest), (_, second), _] = by_magnitude;

    if largest < threshold || largest - second <= largest * NORMAL_TIE_TOLERANCE {
        return None;
    }
    Some(axis)
}

/// Returns the coordinate of `hit_position` along `axis`, rounded to the
/// nearest lattice coordinate.
///
/// Returns `None` if the coordinate is not in `{-1, 0, 1}`.
pub fn layer_coordinate_from(hit_position: Vector3<f32>, axis: Axis) -> Option<i8> {
    let rounded = hit_position[axis as usize].round();
    LATTICE_OFFSETS
        .into_iter()
        .find(|&layer| f32::from(layer) == rounded)
}

/// Returns every cubie whose coordinate along `axis`, rounded to the nearest
/// integer, equals `layer`.
pub fn select_layer(
    positions: impl IntoIterator<Item = (Cubie, Vector3<f32>)>,
    axis: Axis,
    layer: i8,
) -> CubieSet {
    let mut ret: CubieSet = positions
        .into_iter()
        .filter(|(_, pos)| pos[axis as usize].round() == f32::from(layer))
        .map(|(cubie, _)| cubie)
        .collect();
    ret.sort_unstable();
    ret.dedup();
    ret
}

/// Returns the turn direction for a screen-space drag.
///
/// If horizontal movement dominates, dragging right is positive. Otherwise
/// dragging down (increasing screen Y) is positive. Equal movement counts as
/// horizontal.
pub fn direction_from_drag(drag_start: Point2<f32>, drag_end: Point2<f32>) -> Sign {
    let delta = drag_end - drag_start;
    let along = if delta.x.abs() >= delta.y.abs() {
        delta.x
    } else {
        delta.y
    };
    if along > 0.0 {
        Sign::Positive
    } else {
        Sign::Negative
    }
}

/// Resolves a completed gesture into a layer rotation.
///
/// `positions` lists the center of each cubie, as used by the renderer.
pub fn resolve(
    gesture: &GestureInput,
    positions: impl IntoIterator<Item = (Cubie, Vector3<f32>)>,
    params: &ResolveParams,
) -> Result<LayerRotation, NoOp> {
    let axis = axis_from_normal(gesture.normal, params.normal_threshold)
        .ok_or(NoOp::AmbiguousNormal)?;
    let layer =
        layer_coordinate_from(gesture.hit_position, axis).ok_or(NoOp::HitOutsideLattice)?;

    let drag = gesture.drag_end - gesture.drag_start;
    if !drag.x.is_finite() || !drag.y.is_finite() || drag.magnitude() <= params.min_drag_distance
    {
        return Err(NoOp::DragTooShort);
    }
    let sign = direction_from_drag(gesture.drag_start, gesture.drag_end);

    let affected = select_layer(positions, axis, layer);
    if affected.len() != LAYER_SIZE {
        log::warn!(
            "layer {axis}={layer} selected {} cubies instead of {LAYER_SIZE}",
            affected.len(),
        );
        return Err(NoOp::MalformedLayer {
            len: affected.len(),
        });
    }

    let rotation = LayerRotation {
        axis,
        layer,
        sign,
        affected,
    };
    log::debug!("resolved gesture to {rotation}");
    Ok(rotation)
}

/// Returns the face colors after `rotation`.
///
/// The colors of the cubie at position `p` move to the slot at the rotated
/// position, and each of its ring faces advances one step around the axis.
/// Cubies outside the rotation are copied unchanged. The rotation is fully
/// validated before anything is computed.
pub fn apply_color_permutation(
    rotation: &LayerRotation,
    faces: &PerCubie<FaceColors>,
) -> Result<PerCubie<FaceColors>, ApplyError> {
    let LayerRotation {
        axis,
        layer,
        sign,
        affected,
    } = rotation;
    let (axis, layer, sign) = (*axis, *layer, *sign);

    if !LATTICE_OFFSETS.contains(&layer) {
        return Err(ApplyError::LayerOutOfRange(layer));
    }
    for &cubie in affected {
        if !cubie.is_valid() {
            return Err(ApplyError::CubieOutOfRange(cubie));
        }
        if cubie.position().coord(axis) != layer {
            return Err(ApplyError::CubieNotInLayer { cubie, axis, layer });
        }
    }
    let mut distinct: CubieSet = affected.clone();
    distinct.sort_unstable();
    distinct.dedup();
    if distinct.len() != LAYER_SIZE {
        return Err(ApplyError::WrongLayerSize {
            len: distinct.len(),
            expected: LAYER_SIZE,
        });
    }

    let mut ret = faces.clone();
    for &src in &distinct {
        let old = faces[src];
        let new = FaceColors::from_fn(|face| {
            // Whatever lands on `face` came from the face that turns into it.
            old[axis.turn_face(face, sign.flip())]
        });
        let dst_pos = axis.turn_position(src.position(), sign);
        // `turn_position()` preserves the layer coordinate, so `dst` is one of
        // the validated cubies.
        if let Some(dst) = dst_pos.cubie() {
            ret[dst] = new;
        }
    }
    Ok(ret)
}
