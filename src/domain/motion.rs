use crate::domain::model::Direction;
use serde::Serialize;

/// One pose of the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideKeyframe {
    pub x: f64,
    pub opacity: f64,
    pub stack_order: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailVariants {
    pub enter: SlideKeyframe,
    pub center: SlideKeyframe,
    pub exit: SlideKeyframe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringSpec {
    pub stiffness: f64,
    pub damping: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TweenSpec {
    pub duration_secs: f64,
}

/// Horizontal motion springs, opacity tweens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailMotion {
    pub x: SpringSpec,
    pub opacity: TweenSpec,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier(pub [f64; 4]);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingMotion {
    pub duration_secs: f64,
    pub easing: CubicBezier,
}

/// A detail-panel swap in flight. `generation` identifies it to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailTransition {
    pub generation: u64,
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub variants: DetailVariants,
    pub motion: DetailMotion,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum TransitionPhase {
    #[default]
    Idle,
    Transitioning(DetailTransition),
}

impl TransitionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, TransitionPhase::Idle)
    }

    pub fn in_flight(&self) -> Option<&DetailTransition> {
        match self {
            TransitionPhase::Idle => None,
            TransitionPhase::Transitioning(t) => Some(t),
        }
    }
}
