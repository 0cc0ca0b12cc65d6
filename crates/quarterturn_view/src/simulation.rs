use cgmath::{Point2, Vector3};
use quarterturn_core::{
    Cubie, CubieView, GestureInput, LayerRotation, NoOp, PuzzleState, ResolveParams,
};
use quarterturn_prefs::{AnimationPreferences, InteractionPreferences};

use crate::TwistAnimation;

/// Surface point picked at the start of a drag.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pick {
    /// World-space surface normal at the picked point.
    pub normal: Vector3<f32>,
    /// Center of the picked cubie.
    pub hit_position: Vector3<f32>,
}

/// Phase of the current gesture.
///
/// Resolution happens synchronously inside [`CubeSimulation::release()`], so
/// there is no separate resolving state.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum GestureState {
    /// Waiting for a pick.
    #[default]
    Idle,
    /// A cubie has been picked and the pointer is down.
    Dragging {
        /// Picked surface point.
        pick: Pick,
        /// Screen position of the pick.
        start: Point2<f32>,
    },
    /// A rotation is animating. New gestures are ignored until it is
    /// committed.
    Animating(TwistAnimation),
}

/// Puzzle simulation, which manages the puzzle state, the gesture state
/// machine, and the twist animation.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Latest puzzle state, not including any rotation still animating.
    state: PuzzleState,
    gesture: GestureState,

    animation_prefs: AnimationPreferences,
    resolve_params: ResolveParams,

    /// Number of rotations committed since the simulation was created.
    committed: u64,
}
impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(
            &AnimationPreferences::default(),
            &InteractionPreferences::default(),
        )
    }
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved puzzle.
    pub fn new(
        animation_prefs: &AnimationPreferences,
        interaction_prefs: &InteractionPreferences,
    ) -> Self {
        Self {
            state: PuzzleState::new(),
            gesture: GestureState::Idle,

            animation_prefs: animation_prefs.clone(),
            resolve_params: interaction_prefs.resolve_params(),

            committed: 0,
        }
    }

    /// Returns the latest puzzle state, not including any rotation that is
    /// still animating.
    pub fn puzzle(&self) -> &PuzzleState {
        &self.state
    }
    /// Returns a view of a single cubie, for draw-time material assignment.
    pub fn cubie_at(&self, cubie: Cubie) -> CubieView {
        self.state.cubie_at(cubie)
    }
    /// Returns the current phase of the gesture state machine.
    pub fn gesture_state(&self) -> &GestureState {
        &self.gesture
    }
    /// Returns the number of rotations committed so far.
    pub fn committed_count(&self) -> u64 {
        self.committed
    }

    /// Returns whether a rotation is animating.
    pub fn is_animating(&self) -> bool {
        matches!(self.gesture, GestureState::Animating(_))
    }
    /// Returns the rotation being animated and its current angle in radians,
    /// or `None` if nothing is animating.
    pub fn render_angle(&self) -> Option<(&LayerRotation, f32)> {
        match &self.gesture {
            GestureState::Animating(anim) => Some((anim.rotation(), anim.angle())),
            _ => None,
        }
    }

    /// Resets the puzzle to the solved state and drops any gesture in
    /// progress.
    pub fn reset(&mut self) {
        self.state = PuzzleState::new();
        self.gesture = GestureState::Idle;
    }

    /// Starts a drag on a cubie. Ignored unless idle.
    pub fn pick(&mut self, normal: Vector3<f32>, hit_position: Vector3<f32>, start: Point2<f32>) {
        match self.gesture {
            GestureState::Idle => {
                self.gesture = GestureState::Dragging {
                    pick: Pick {
                        normal,
                        hit_position,
                    },
                    start,
                };
            }
            GestureState::Dragging { .. } => log::trace!("ignoring pick during drag"),
            GestureState::Animating(_) => log::trace!("ignoring pick during animation"),
        }
    }

    /// Cancels a drag without rotating anything.
    pub fn cancel_drag(&mut self) {
        if matches!(self.gesture, GestureState::Dragging { .. }) {
            self.gesture = GestureState::Idle;
        }
    }

    /// Ends a drag and resolves it into a rotation.
    ///
    /// On success the rotation starts animating before this returns, and the
    /// rotation is returned so that the renderer can spin the layer. On
    /// failure the gesture is dropped.
    pub fn release(&mut self, end: Point2<f32>) -> Result<LayerRotation, NoOp> {
        let (pick, start) = match &self.gesture {
            GestureState::Dragging { pick, start } => (*pick, *start),
            GestureState::Animating(_) => return Err(NoOp::RotationInProgress),
            GestureState::Idle => {
                log::trace!("ignoring release with no pick");
                return Err(NoOp::NoPick);
            }
        };
        self.gesture = GestureState::Idle;

        let gesture = GestureInput {
            normal: pick.normal,
            hit_position: pick.hit_position,
            drag_start: start,
            drag_end: end,
        };
        let rotation = match quarterturn_core::resolve(
            &gesture,
            self.state.positions(),
            &self.resolve_params,
        ) {
            Ok(rotation) => rotation,
            Err(e) => {
                log::debug!("gesture dropped: {e}");
                return Err(e);
            }
        };

        self.gesture = GestureState::Animating(TwistAnimation::new(
            rotation.clone(),
            &self.animation_prefs,
        ));
        Ok(rotation)
    }

    /// Handles a complete press-then-release gesture in one call.
    pub fn on_gesture_complete(
        &mut self,
        normal: Vector3<f32>,
        hit_position: Vector3<f32>,
        drag_start: Point2<f32>,
        drag_end: Point2<f32>,
    ) -> Result<LayerRotation, NoOp> {
        if self.is_animating() {
            log::trace!("ignoring gesture during animation");
            return Err(NoOp::RotationInProgress);
        }
        // A half-finished drag is superseded by the complete gesture.
        self.gesture = GestureState::Idle;
        self.pick(normal, hit_position, drag_start);
        self.release(drag_end)
    }

    /// Steps the animation forward by one frame. Returns whether the puzzle
    /// should be redrawn.
    ///
    /// After the final step, the rotation is committed to the puzzle state
    /// and the simulation becomes idle.
    pub fn step(&mut self) -> bool {
        let GestureState::Animating(anim) = &mut self.gesture else {
            return false;
        };
        if anim.proceed() {
            self.commit();
        }
        true
    }

    /// Runs the active animation to completion, committing its rotation.
    /// Returns the number of steps taken.
    pub fn finish_animation(&mut self) -> u32 {
        let mut steps = 0;
        while self.is_animating() {
            self.step();
            steps += 1;
        }
        steps
    }

    fn commit(&mut self) {
        let GestureState::Animating(anim) = std::mem::take(&mut self.gesture) else {
            return;
        };
        let rotation = anim.into_rotation();
        match self.state.apply(&rotation) {
            Ok(()) => self.committed += 1,
            // The rotation came from `resolve()` on this state's own lattice,
            // so this indicates an internal inconsistency.
            Err(e) => log::warn!("failed to commit rotation {rotation}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{point2, vec3};
    use pretty_assertions::assert_eq;
    use quarterturn_core::{Axis, LayerTurn, Sign};

    use super::*;

    const TOP: Vector3<f32> = Vector3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    const FRONT: Vector3<f32> = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    fn drag_right(sim: &mut CubeSimulation) -> Result<LayerRotation, NoOp> {
        sim.on_gesture_complete(
            TOP,
            vec3(0.0, 1.0, 1.0),
            point2(10.0, 10.0),
            point2(60.0, 12.0),
        )
    }

    #[test]
    fn test_gesture_lifecycle() {
        let mut sim = CubeSimulation::default();
        assert_eq!(&GestureState::Idle, sim.gesture_state());

        sim.pick(TOP, vec3(1.0, 1.0, 1.0), point2(0.0, 0.0));
        assert!(matches!(sim.gesture_state(), GestureState::Dragging { .. }));

        let rotation = sim.release(point2(30.0, 0.0)).expect("rotation");
        assert_eq!((Axis::Y, 1, Sign::Positive), (rotation.axis, rotation.layer, rotation.sign));
        assert!(sim.is_animating());

        // Nothing is committed until the last step.
        for _ in 0..19 {
            assert!(sim.step());
            assert_eq!(PuzzleState::new(), *sim.puzzle());
        }
        assert!(sim.step());
        assert!(!sim.is_animating());
        assert_eq!(1, sim.committed_count());
        assert!(!sim.step());

        let mut expected = PuzzleState::new();
        expected.apply(&rotation).expect("valid rotation");
        assert_eq!(expected, *sim.puzzle());
    }

    #[test]
    fn test_gestures_ignored_while_animating() {
        let mut sim = CubeSimulation::default();
        drag_right(&mut sim).expect("rotation");

        assert_eq!(Err(NoOp::RotationInProgress), drag_right(&mut sim));
        sim.pick(FRONT, vec3(0.0, 0.0, 1.0), point2(0.0, 0.0));
        assert_eq!(Err(NoOp::RotationInProgress), sim.release(point2(50.0, 0.0)));

        assert_eq!(20, sim.finish_animation());
        assert_eq!(1, sim.committed_count());

        // No queued gesture runs afterwards.
        assert!(!sim.is_animating());
        assert_eq!(0, sim.finish_animation());
    }

    #[test]
    fn test_render_angle() {
        let mut sim = CubeSimulation::default();
        assert_eq!(None, sim.render_angle());
        drag_right(&mut sim).expect("rotation");
        for _ in 0..10 {
            sim.step();
        }
        let (rotation, angle) = sim.render_angle().expect("animating");
        assert_eq!(LayerTurn::to_rotation("y1+".parse().expect("valid turn")), *rotation);
        assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn test_failed_gestures_return_to_idle() {
        let mut sim = CubeSimulation::default();

        let short = sim.on_gesture_complete(
            TOP,
            vec3(0.0, 1.0, 0.0),
            point2(0.0, 0.0),
            point2(1.0, 1.0),
        );
        assert_eq!(Err(NoOp::DragTooShort), short);
        assert_eq!(&GestureState::Idle, sim.gesture_state());

        let edge = sim.on_gesture_complete(
            vec3(0.7, 0.7, 0.0),
            vec3(1.0, 1.0, 0.0),
            point2(0.0, 0.0),
            point2(50.0, 0.0),
        );
        assert_eq!(Err(NoOp::AmbiguousNormal), edge);
        assert_eq!(&GestureState::Idle, sim.gesture_state());

        assert_eq!(Err(NoOp::NoPick), sim.release(point2(50.0, 0.0)));
        assert_eq!(PuzzleState::new(), *sim.puzzle());
        assert_eq!(0, sim.committed_count());
    }

    #[test]
    fn test_release_without_pick() {
        let mut sim = CubeSimulation::default();
        assert_eq!(Err(NoOp::NoPick), sim.release(point2(50.0, 0.0)));
        assert_eq!(&GestureState::Idle, sim.gesture_state());

        sim.pick(TOP, vec3(0.0, 1.0, 1.0), point2(0.0, 0.0));
        sim.cancel_drag();
        assert_eq!(Err(NoOp::NoPick), sim.release(point2(50.0, 0.0)));
    }

    #[test]
    fn test_cancel_and_reset() {
        let mut sim = CubeSimulation::default();
        sim.pick(FRONT, vec3(0.0, 0.0, 1.0), point2(0.0, 0.0));
        sim.cancel_drag();
        assert_eq!(&GestureState::Idle, sim.gesture_state());

        drag_right(&mut sim).expect("rotation");
        sim.finish_animation();
        assert!(!sim.puzzle().is_solved());
        sim.reset();
        assert!(sim.puzzle().is_solved());
    }

    #[test]
    fn test_front_face_vertical_drag() {
        let mut sim = CubeSimulation::default();
        let rotation = sim
            .on_gesture_complete(
                FRONT,
                vec3(-1.0, 0.0, 1.0),
                point2(0.0, 0.0),
                point2(3.0, -40.0),
            )
            .expect("rotation");
        assert_eq!(LayerTurn::to_rotation("z1-".parse().expect("valid turn")), rotation);
    }
}
