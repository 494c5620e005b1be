use crate::domain::frame::Frame;
use crate::domain::model::TeamMember;
use crate::utils::error::Result;

/// Paints whatever a carousel computed. Implementations own their output sink.
pub trait FrameRenderer<T> {
    fn render(&mut self, frame: &Frame<'_, T>) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// One-line description of an item for plain-text output.
pub trait Headline {
    fn headline(&self) -> String;
}

impl Headline for TeamMember {
    fn headline(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}
