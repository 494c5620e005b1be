use crate::domain::frame::Frame;
use crate::domain::ports::{FrameRenderer, Headline};
use crate::utils::error::Result;
use std::io::Write;

pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<T: Headline, W: Write> FrameRenderer<T> for TextRenderer<W> {
    fn render(&mut self, frame: &Frame<'_, T>) -> Result<()> {
        writeln!(
            self.out,
            "[{}] {}  active={}/{} direction={:+}",
            frame.step,
            frame.label,
            frame.state.active_index,
            frame.item_count,
            frame.state.direction.sign(),
        )?;
        writeln!(self.out, "    {}", frame.active_item.headline())?;

        for item in &frame.ring {
            let p = &item.placement;
            writeln!(
                self.out,
                "    {} #{:<2} angle={:>7.1} x={:>8.2} z={:>8.2} scale={:.3} opacity={:.3} stack={}",
                if item.active { '*' } else { ' ' },
                item.index,
                p.angle_deg,
                p.x,
                p.z,
                p.scale,
                p.opacity,
                p.stack_order,
            )?;
        }

        let dots: String = frame
            .indicators
            .iter()
            .map(|dot| if dot.active { '●' } else { '○' })
            .collect();
        writeln!(self.out, "    {}", dots)?;

        if let Some(t) = &frame.transition {
            writeln!(
                self.out,
                "    transition #{}: {} -> {} enter x={} exit x={}",
                t.generation, t.from, t.to, t.variants.enter.x, t.variants.exit.x
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
