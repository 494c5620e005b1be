use crate::domain::frame::Frame;
use crate::domain::ports::FrameRenderer;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// One JSON object per frame, newline separated.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<T: Serialize, W: Write> FrameRenderer<T> for JsonRenderer<W> {
    fn render(&mut self, frame: &Frame<'_, T>) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselOptions;
    use crate::core::carousel::Carousel;

    #[test]
    fn test_frame_serializes_direction_as_sign() {
        let mut carousel = Carousel::new(vec!["a", "b", "c"], CarouselOptions::default()).unwrap();
        carousel.prev();

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&carousel.frame(1, "prev")).unwrap();
        let line = String::from_utf8(renderer.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();

        assert_eq!(value["state"]["active_index"], 2);
        assert_eq!(value["state"]["direction"], -1);
        assert_eq!(value["active_item"], "c");
        assert_eq!(value["ring"].as_array().unwrap().len(), 3);
        assert_eq!(value["transition"]["variants"]["enter"]["x"], -300.0);
    }
}
