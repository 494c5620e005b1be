pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::{parse_script, Command, ReplayEngine, ReplaySummary};
pub use config::{roster::RosterConfig, CarouselOptions};
pub use crate::core::{
    carousel::{Carousel, NavOutcome},
    keyboard::{Key, KeyboardHub, ListenerGuard},
    ring::{ArcMode, RingLayout},
};
pub use domain::model::{CarouselState, Direction, Placement, SocialLinks, TeamMember};
pub use utils::error::{CarouselError, Result};
