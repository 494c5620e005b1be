use crate::config::CarouselOptions;
use crate::core::keyboard::{Key, KeyboardHub, ListenerGuard};
use crate::core::ring::RingLayout;
use crate::core::transition;
use crate::domain::frame::{Frame, RingItem};
use crate::domain::model::{CarouselState, Direction, Placement, TeamMember};
use crate::domain::motion::{DetailTransition, TransitionPhase};
use crate::utils::error::{CarouselError, Result};
use crate::utils::validation::Validate;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

/// Result of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavOutcome {
    pub previous_index: usize,
    pub active_index: usize,
    pub direction: Direction,
    /// Generation of the detail transition this command started, if any.
    pub started: Option<u64>,
    /// Generation of the in-flight transition this command superseded.
    pub cancelled: Option<u64>,
}

impl NavOutcome {
    pub fn pair(&self) -> (usize, Direction) {
        (self.active_index, self.direction)
    }

    pub fn changed(&self) -> bool {
        self.previous_index != self.active_index
    }
}

/// State shared between a carousel and its keyboard listener.
#[derive(Debug)]
struct Navigator {
    count: usize,
    state: CarouselState,
    phase: TransitionPhase,
    generation: u64,
    options: CarouselOptions,
}

impl Navigator {
    fn new(count: usize, options: CarouselOptions) -> Result<Self> {
        if count == 0 {
            return Err(CarouselError::InvalidState {
                message: "navigator needs at least one item".to_string(),
            });
        }
        Ok(Self {
            count,
            state: CarouselState::default(),
            phase: TransitionPhase::Idle,
            generation: 0,
            options,
        })
    }

    fn go_to(&mut self, index: usize) -> Result<NavOutcome> {
        if index >= self.count {
            tracing::warn!(index, len = self.count, "rejected jump outside the ring");
            return Err(CarouselError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.count,
            });
        }
        let delta = index as i64 - self.state.active_index as i64;
        Ok(self.apply(index, Direction::from_delta(delta)))
    }

    fn next(&mut self) -> NavOutcome {
        let index = (self.state.active_index + 1) % self.count;
        self.apply(index, Direction::Forward)
    }

    fn prev(&mut self) -> NavOutcome {
        let index = (self.state.active_index + self.count - 1) % self.count;
        self.apply(index, Direction::Backward)
    }

    fn handle_key(&mut self, key: &Key) -> Option<NavOutcome> {
        match key {
            Key::ArrowLeft => Some(self.prev()),
            Key::ArrowRight => Some(self.next()),
            Key::Other(_) => None,
        }
    }

    fn apply(&mut self, index: usize, direction: Direction) -> NavOutcome {
        let previous_index = self.state.active_index;
        self.state = CarouselState {
            active_index: index,
            direction,
        };

        let mut outcome = NavOutcome {
            previous_index,
            active_index: index,
            direction,
            started: None,
            cancelled: None,
        };

        // reselecting the current item never restarts the panel animation
        if index == previous_index {
            tracing::debug!(index, direction = direction.sign(), "reselected active item");
            return outcome;
        }

        outcome.cancelled = self.phase.in_flight().map(|t| t.generation);
        self.generation += 1;
        self.phase = TransitionPhase::Transitioning(DetailTransition {
            generation: self.generation,
            from: previous_index,
            to: index,
            direction,
            variants: transition::detail_variants(direction, &self.options),
            motion: transition::detail_motion(&self.options),
        });
        outcome.started = Some(self.generation);

        tracing::debug!(
            from = previous_index,
            to = index,
            direction = direction.sign(),
            generation = self.generation,
            superseded = ?outcome.cancelled,
            "carousel moved"
        );
        outcome
    }

    fn complete(&mut self, generation: u64) -> bool {
        match self.phase.in_flight() {
            Some(t) if t.generation == generation => {
                self.phase = TransitionPhase::Idle;
                true
            }
            _ => {
                tracing::trace!(generation, "ignored completion of a stale transition");
                false
            }
        }
    }
}

/// A ring of items with one active at a time.
///
/// Items are fixed at construction and never reordered. Placements are
/// recomputed on every query from the current [`CarouselState`].
#[derive(Debug)]
pub struct Carousel<T> {
    items: Vec<T>,
    layout: RingLayout,
    options: CarouselOptions,
    nav: Rc<RefCell<Navigator>>,
    listener: Option<ListenerGuard>,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>, options: CarouselOptions) -> Result<Self> {
        if items.is_empty() {
            return Err(CarouselError::InvalidArgument {
                message: "a carousel needs at least one item".to_string(),
            });
        }
        options
            .validate()
            .map_err(|e| CarouselError::InvalidArgument {
                message: e.to_string(),
            })?;

        let nav = Navigator::new(items.len(), options.clone())?;
        Ok(Self {
            layout: RingLayout::from_options(&options),
            items,
            options,
            nav: Rc::new(RefCell::new(nav)),
            listener: None,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty collections.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn active_item(&self) -> &T {
        &self.items[self.active_index()]
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn layout(&self) -> &RingLayout {
        &self.layout
    }

    pub fn state(&self) -> CarouselState {
        self.nav.borrow().state
    }

    pub fn active_index(&self) -> usize {
        self.state().active_index
    }

    pub fn direction(&self) -> Direction {
        self.state().direction
    }

    pub fn placement(&self, index: usize) -> Result<Placement> {
        self.layout
            .placement(index, self.active_index(), self.items.len())
    }

    pub fn placements(&self) -> Vec<Placement> {
        self.layout.place_all(self.active_index(), self.items.len())
    }

    pub fn phase(&self) -> TransitionPhase {
        self.nav.borrow().phase.clone()
    }

    pub fn transition(&self) -> Option<DetailTransition> {
        self.nav.borrow().phase.in_flight().cloned()
    }

    pub fn next(&mut self) -> NavOutcome {
        self.nav.borrow_mut().next()
    }

    pub fn prev(&mut self) -> NavOutcome {
        self.nav.borrow_mut().prev()
    }

    /// Jumps straight to `index`. Out-of-range indices are rejected and
    /// leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<NavOutcome> {
        self.nav.borrow_mut().go_to(index)
    }

    /// Click on a ring item. The active item ignores clicks.
    pub fn activate_item(&mut self, index: usize) -> Result<Option<NavOutcome>> {
        self.check_index(index)?;
        if index == self.active_index() {
            return Ok(None);
        }
        self.go_to(index).map(Some)
    }

    /// Click on a dot indicator.
    pub fn select_indicator(&mut self, index: usize) -> Result<NavOutcome> {
        self.go_to(index)
    }

    pub fn handle_key(&mut self, key: &Key) -> Option<NavOutcome> {
        self.nav.borrow_mut().handle_key(key)
    }

    /// Called by the renderer once a detail transition has played out.
    /// Returns false for transitions that were already superseded.
    pub fn complete_transition(&mut self, generation: u64) -> bool {
        self.nav.borrow_mut().complete(generation)
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Starts listening for arrow keys on `hub`.
    pub fn mount(&mut self, hub: &KeyboardHub) -> Result<()> {
        if self.listener.is_some() {
            return Err(CarouselError::InvalidState {
                message: "carousel is already mounted".to_string(),
            });
        }

        let nav = Rc::clone(&self.nav);
        let guard = hub.subscribe(move |key| {
            nav.borrow_mut().handle_key(key);
        });
        tracing::info!(listener_id = guard.id(), items = self.items.len(), "carousel mounted");
        self.listener = Some(guard);
        Ok(())
    }

    /// Stops listening and drops any in-flight transition. Safe to call
    /// repeatedly or without a prior mount.
    pub fn unmount(&mut self) {
        if let Some(guard) = self.listener.take() {
            tracing::info!(listener_id = guard.id(), "carousel unmounted");
        }
        self.nav.borrow_mut().phase = TransitionPhase::Idle;
    }

    pub fn frame(&self, step: usize, label: impl Into<String>) -> Frame<'_, T> {
        let state = self.state();
        let count = self.items.len();
        let ring = self
            .layout
            .place_all(state.active_index, count)
            .into_iter()
            .enumerate()
            .map(|(index, placement)| RingItem {
                index,
                active: index == state.active_index,
                transform: self.layout.css_transform(&placement),
                placement,
            })
            .collect();

        Frame {
            step,
            label: label.into(),
            state,
            item_count: count,
            active_item: &self.items[state.active_index],
            ring,
            ring_motion: transition::ring_motion(&self.options),
            indicators: transition::indicators(state.active_index, count),
            transition: self.transition(),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(CarouselError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

impl Carousel<TeamMember> {
    /// Fade-in delays for the active member's expertise chips.
    pub fn chip_delays(&self) -> Vec<f64> {
        transition::chip_delays(self.active_item().expertise.len(), &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect(), CarouselOptions::default()).unwrap()
    }

    #[test]
    fn test_starts_idle_at_zero() {
        let c = carousel(4);
        assert_eq!(c.state(), CarouselState::default());
        assert!(c.phase().is_idle());
        assert!(!c.is_mounted());
    }

    #[test]
    fn test_rapid_moves_restart_transition() {
        let mut c = carousel(5);
        let first = c.next();
        let second = c.next();

        assert_eq!(c.active_index(), 2);
        assert_eq!(first.cancelled, None);
        assert_eq!(second.cancelled, first.started);

        let t = c.transition().unwrap();
        assert_eq!(t.from, 1);
        assert_eq!(t.to, 2);
        assert_eq!(Some(t.generation), second.started);
    }

    #[test]
    fn test_reselect_keeps_transition_in_flight() {
        let mut c = carousel(5);
        let moved = c.go_to(3).unwrap();
        let again = c.go_to(3).unwrap();

        assert_eq!(again.direction, Direction::None);
        assert_eq!(again.started, None);
        assert_eq!(again.cancelled, None);
        assert_eq!(c.transition().map(|t| t.generation), moved.started);
    }

    #[test]
    fn test_frame_keeps_transition_direction_on_reselect() {
        let mut c = carousel(4);
        c.next();
        c.go_to(1).unwrap();

        let frame = c.frame(2, "goto:1");
        assert_eq!(frame.state.direction, Direction::None);
        let t = frame.transition.unwrap();
        assert_eq!(t.direction, Direction::Forward);
        assert_eq!(t.variants.enter.x, 300.0);
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut c = carousel(5);
        let first = c.next().started.unwrap();
        let second = c.prev().started.unwrap();

        assert!(!c.complete_transition(first));
        assert!(!c.phase().is_idle());
        assert!(c.complete_transition(second));
        assert!(c.phase().is_idle());
    }

    #[test]
    fn test_transition_direction_matches_state() {
        let mut c = carousel(6);
        c.go_to(4).unwrap();
        let t = c.transition().unwrap();
        assert_eq!(t.direction, c.direction());
        assert_eq!(t.variants.enter.x, 300.0);

        c.prev();
        let t = c.transition().unwrap();
        assert_eq!(t.direction, Direction::Backward);
        assert_eq!(t.variants.enter.x, -300.0);
    }

    #[test]
    fn test_single_item_next_keeps_index() {
        let mut c = carousel(1);
        let outcome = c.next();
        assert_eq!(outcome.pair(), (0, Direction::Forward));
        assert!(!outcome.changed());
        assert!(c.phase().is_idle());
    }

    #[test]
    fn test_activate_item_ignores_active() {
        let mut c = carousel(3);
        assert_eq!(c.activate_item(0).unwrap(), None);
        let outcome = c.activate_item(2).unwrap().unwrap();
        assert_eq!(outcome.pair(), (2, Direction::Forward));
        assert!(c.activate_item(3).is_err());
    }

    #[test]
    fn test_invalid_options_rejected_at_construction() {
        let options = CarouselOptions::default().with_radius(f64::NAN);
        let err = Carousel::new(vec![1, 2], options).unwrap_err();
        assert!(matches!(err, CarouselError::InvalidArgument { .. }));
    }

    #[test]
    fn test_frame_marks_active_item() {
        let mut c = carousel(3);
        c.next();
        let frame = c.frame(1, "next");
        assert_eq!(*frame.active_item, 1);
        assert_eq!(frame.ring.len(), 3);
        assert!(frame.ring[1].active);
        assert!(frame.indicators[1].active);
        assert_eq!(frame.transition.unwrap().to, 1);
    }
}
