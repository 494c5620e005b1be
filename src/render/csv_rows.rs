use crate::domain::frame::Frame;
use crate::domain::ports::FrameRenderer;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct PlacementRow<'a> {
    step: usize,
    label: &'a str,
    active_index: usize,
    direction: i8,
    index: usize,
    active: bool,
    angle_deg: f64,
    x: f64,
    y: f64,
    z: f64,
    scale: f64,
    opacity: f64,
    stack_order: i32,
}

/// One CSV row per ring item per frame.
pub struct CsvRenderer<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<T, W: Write> FrameRenderer<T> for CsvRenderer<W> {
    fn render(&mut self, frame: &Frame<'_, T>) -> Result<()> {
        for item in &frame.ring {
            let p = &item.placement;
            self.writer.serialize(PlacementRow {
                step: frame.step,
                label: &frame.label,
                active_index: frame.state.active_index,
                direction: frame.state.direction.sign(),
                index: item.index,
                active: item.active,
                angle_deg: p.angle_deg,
                x: p.x,
                y: p.y,
                z: p.z,
                scale: p.scale,
                opacity: p.opacity,
                stack_order: p.stack_order,
            })?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
