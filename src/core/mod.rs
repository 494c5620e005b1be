pub mod carousel;
pub mod keyboard;
pub mod ring;
pub mod transition;

pub use crate::domain::model::{CarouselState, Direction, Placement};
pub use crate::domain::ports::FrameRenderer;
pub use crate::utils::error::Result;
