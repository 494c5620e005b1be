//! Animation targets handed to the renderer. The core never interpolates;
//! it only says where things start, where they end and how to get there.

use crate::config::CarouselOptions;
use crate::domain::frame::Indicator;
use crate::domain::model::Direction;
use crate::domain::motion::{
    CubicBezier, DetailMotion, DetailVariants, RingMotion, SlideKeyframe, SpringSpec, TweenSpec,
};

pub const RING_EASING: CubicBezier = CubicBezier([0.22, 1.0, 0.36, 1.0]);

/// Enter/center/exit poses for the detail panel.
///
/// Moving forward, new content comes in from the right and old content
/// leaves to the left, so the panel travels the same way as the ring.
pub fn detail_variants(direction: Direction, options: &CarouselOptions) -> DetailVariants {
    let distance = if options.reduced_motion {
        0.0
    } else {
        options.slide_distance
    };

    let enter_x = if direction.sign() > 0 { distance } else { -distance };
    let exit_x = if direction.sign() < 0 { distance } else { -distance };

    DetailVariants {
        enter: SlideKeyframe {
            x: enter_x,
            opacity: 0.0,
            stack_order: None,
        },
        center: SlideKeyframe {
            x: 0.0,
            opacity: 1.0,
            stack_order: Some(1),
        },
        exit: SlideKeyframe {
            x: exit_x,
            opacity: 0.0,
            stack_order: Some(0),
        },
    }
}

pub fn detail_motion(options: &CarouselOptions) -> DetailMotion {
    DetailMotion {
        x: SpringSpec {
            stiffness: options.spring_stiffness,
            damping: options.spring_damping,
        },
        opacity: TweenSpec {
            duration_secs: options.opacity_duration_secs,
        },
    }
}

pub fn ring_motion(options: &CarouselOptions) -> RingMotion {
    RingMotion {
        duration_secs: if options.reduced_motion {
            0.0
        } else {
            options.ring_duration_secs
        },
        easing: RING_EASING,
    }
}

/// Fade-in delay for each expertise chip of the active item.
pub fn chip_delays(chip_count: usize, options: &CarouselOptions) -> Vec<f64> {
    (0..chip_count)
        .map(|idx| idx as f64 * options.chip_stagger_secs)
        .collect()
}

pub fn indicators(active: usize, count: usize) -> Vec<Indicator> {
    (0..count)
        .map(|index| Indicator {
            index,
            active: index == active,
            label: format!("Go to team member {}", index + 1),
        })
        .collect()
}
