use crate::domain::model::{CarouselState, Placement};
use crate::domain::motion::{DetailTransition, RingMotion};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingItem {
    pub index: usize,
    pub active: bool,
    pub placement: Placement,
    /// CSS transform string, `none` when motion is reduced.
    pub transform: String,
}

/// Dot button under the detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// Everything a renderer needs to paint one state of the carousel.
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a, T> {
    pub step: usize,
    pub label: String,
    /// Ring consumers read `state.direction`. It is `None` after reselecting
    /// the active item, even while an earlier transition is still playing.
    pub state: CarouselState,
    pub item_count: usize,
    pub active_item: &'a T,
    pub ring: Vec<RingItem>,
    pub ring_motion: RingMotion,
    pub indicators: Vec<Indicator>,
    /// The detail panel animates with `transition.direction`, fixed when the
    /// transition started.
    pub transition: Option<DetailTransition>,
}
