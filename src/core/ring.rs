use crate::config::CarouselOptions;
use crate::domain::model::Placement;
use crate::utils::error::{CarouselError, Result};
use serde::{Deserialize, Serialize};

pub const ACTIVE_SCALE: f64 = 1.2;
pub const ACTIVE_OPACITY: f64 = 1.0;

/// How the signed distance between an item and the active one is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ArcMode {
    /// `index - active`, unwrapped. Items far away in index order land at
    /// angles beyond ±180°, which is how the gallery has always looked.
    #[default]
    Raw,
    /// Distance wrapped into `[-n/2, n/2]`, the shortest way around.
    Shortest,
}

impl ArcMode {
    pub fn distance(self, index: usize, active: usize, count: usize) -> i64 {
        let diff = index as i64 - active as i64;
        match self {
            ArcMode::Raw => diff,
            ArcMode::Shortest => {
                let n = count as i64;
                let wrapped = diff.rem_euclid(n);
                if wrapped * 2 > n {
                    wrapped - n
                } else {
                    wrapped
                }
            }
        }
    }
}

/// Places items evenly on a ring lying in the XZ plane, viewed edge-on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    radius: f64,
    reduced_motion: bool,
    arc: ArcMode,
}

impl RingLayout {
    pub fn new(radius: f64, reduced_motion: bool, arc: ArcMode) -> Self {
        Self {
            radius,
            reduced_motion,
            arc,
        }
    }

    pub fn from_options(options: &CarouselOptions) -> Self {
        Self::new(options.radius, options.reduced_motion, options.arc)
    }

    /// Radius actually used for placement; reduced motion stacks every item in the centre.
    pub fn effective_radius(&self) -> f64 {
        if self.reduced_motion {
            0.0
        } else {
            self.radius
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn arc(&self) -> ArcMode {
        self.arc
    }

    /// Placement of `index` while `active` is selected on a ring of `count` items.
    pub fn placement(&self, index: usize, active: usize, count: usize) -> Result<Placement> {
        check_ring(active, count)?;
        check_index(index, count)?;
        Ok(self.place(index, active, count))
    }

    pub fn placements(&self, active: usize, count: usize) -> Result<Vec<Placement>> {
        check_ring(active, count)?;
        Ok(self.place_all(active, count))
    }

    /// Callers guarantee `index < count` and `active < count`.
    pub(crate) fn place(&self, index: usize, active: usize, count: usize) -> Placement {
        let diff = self.arc.distance(index, active, count);
        let angle_deg = diff as f64 * 360.0 / count as f64;
        let radius = self.effective_radius();

        let theta = angle_deg.to_radians();
        let x = theta.sin() * radius;
        let z = theta.cos() * radius;

        let is_active = index == active;
        let scale = if is_active {
            ACTIVE_SCALE
        } else {
            0.7 + z.abs() / 300.0
        };
        let opacity = if is_active {
            ACTIVE_OPACITY
        } else {
            (0.4 + z.abs() / 500.0).clamp(0.0, 1.0)
        };

        Placement {
            angle_deg,
            x,
            y: 0.0,
            z,
            scale,
            opacity,
            stack_order: z.floor() as i32,
        }
    }

    pub(crate) fn place_all(&self, active: usize, count: usize) -> Vec<Placement> {
        (0..count)
            .map(|index| self.place(index, active, count))
            .collect()
    }

    pub fn css_transform(&self, placement: &Placement) -> String {
        if self.reduced_motion {
            return "none".to_string();
        }
        format!(
            "translate3d({:.2}px, 0, {:.2}px) scale({:.3})",
            placement.x, placement.z, placement.scale
        )
    }
}

fn check_ring(active: usize, count: usize) -> Result<()> {
    if count == 0 {
        return Err(CarouselError::InvalidState {
            message: "cannot place items on an empty ring".to_string(),
        });
    }
    check_index(active, count)
}

fn check_index(index: usize, count: usize) -> Result<()> {
    if index >= count {
        return Err(CarouselError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len: count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn layout() -> RingLayout {
        RingLayout::new(180.0, false, ArcMode::Raw)
    }

    #[test]
    fn test_active_item_is_front_and_enlarged() {
        for count in 1..=8 {
            for active in 0..count {
                let p = layout().placement(active, active, count).unwrap();
                assert_eq!(p.scale, 1.2);
                assert_eq!(p.opacity, 1.0);
                assert!(p.x.abs() < EPS);
                assert!((p.z - 180.0).abs() < EPS);
                assert_eq!(p.stack_order, 180);
            }
        }
    }

    #[test]
    fn test_quarter_turn_neighbour() {
        // 4 items, item 1 sits a quarter turn to the right of item 0
        let p = layout().placement(1, 0, 4).unwrap();
        assert!((p.angle_deg - 90.0).abs() < EPS);
        assert!((p.x - 180.0).abs() < EPS);
        assert!(p.z.abs() < EPS);
        assert!((p.scale - 0.7).abs() < 1e-6);
        assert!((p.opacity - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_far_side_item_goes_behind() {
        let p = layout().placement(2, 0, 4).unwrap();
        assert!((p.z + 180.0).abs() < EPS);
        assert!((p.scale - (0.7 + 180.0 / 300.0)).abs() < EPS);
        assert!((p.opacity - (0.4 + 180.0 / 500.0)).abs() < EPS);
        assert_eq!(p.stack_order, -180);
    }

    #[test]
    fn test_raw_distance_is_unwrapped() {
        // raw mode: item 5 of 6 seen from item 0 is 300 degrees round, not -60
        let p = layout().placement(5, 0, 6).unwrap();
        assert!((p.angle_deg - 300.0).abs() < EPS);
        assert!(p.x < 0.0);
    }

    #[test]
    fn test_shortest_distance_wraps() {
        assert_eq!(ArcMode::Shortest.distance(5, 0, 6), -1);
        assert_eq!(ArcMode::Shortest.distance(0, 5, 6), 1);
        assert_eq!(ArcMode::Shortest.distance(3, 0, 6), 3);
        assert_eq!(ArcMode::Shortest.distance(4, 0, 7), -3);

        let shortest = RingLayout::new(180.0, false, ArcMode::Shortest);
        let p = shortest.placement(5, 0, 6).unwrap();
        assert!((p.angle_deg + 60.0).abs() < EPS);

        // same point on the circle either way
        let raw = layout().placement(5, 0, 6).unwrap();
        assert!((p.x - raw.x).abs() < 1e-6);
        assert!((p.z - raw.z).abs() < 1e-6);
    }

    #[test]
    fn test_opacity_clamped_for_large_radius() {
        let wide = RingLayout::new(5_000.0, false, ArcMode::Raw);
        for p in wide.placements(0, 5).unwrap() {
            assert!((0.0..=1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn test_reduced_motion_collapses_ring() {
        let flat = RingLayout::new(180.0, true, ArcMode::Raw);
        for active in 0..5 {
            for p in flat.placements(active, 5).unwrap() {
                assert_eq!(p.x, 0.0);
                assert_eq!(p.z, 0.0);
            }
        }
        let p = flat.placement(0, 0, 5).unwrap();
        assert_eq!(flat.css_transform(&p), "none");
    }

    #[test]
    fn test_single_item_ring() {
        let p = layout().placement(0, 0, 1).unwrap();
        assert_eq!(p.angle_deg, 0.0);
        assert_eq!(p.scale, 1.2);
    }

    #[test]
    fn test_empty_ring_rejected() {
        assert!(matches!(
            layout().placement(0, 0, 0),
            Err(CarouselError::InvalidState { .. })
        ));
        assert!(matches!(
            layout().placements(0, 0),
            Err(CarouselError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        assert!(matches!(
            layout().placement(10, 0, 4),
            Err(CarouselError::IndexOutOfRange { index: 10, len: 4 })
        ));
        assert!(matches!(
            layout().placement(0, 4, 4),
            Err(CarouselError::IndexOutOfRange { index: 4, len: 4 })
        ));
        assert!(layout().placements(7, 3).is_err());
    }

    #[test]
    fn test_css_transform_format() {
        let p = layout().placement(0, 0, 3).unwrap();
        assert_eq!(
            layout().css_transform(&p),
            "translate3d(0.00px, 0, 180.00px) scale(1.200)"
        );
    }
}
