use crate::core::carousel::Carousel;
use crate::core::keyboard::{Key, KeyboardHub};
use crate::domain::model::CarouselState;
use crate::domain::ports::FrameRenderer;
use crate::utils::error::{CarouselError, Result};
use std::fmt;

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Delivered through the keyboard hub, so it only reaches mounted carousels.
    Key(Key),
    Next,
    Prev,
    GoTo(i64),
    Click(i64),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Key(key) => write!(f, "key {}", key),
            Command::Next => f.write_str("next"),
            Command::Prev => f.write_str("prev"),
            Command::GoTo(index) => write!(f, "goto:{}", index),
            Command::Click(index) => write!(f, "click:{}", index),
        }
    }
}

fn parse_index(token: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| CarouselError::InvalidConfigValueError {
            field: "keys".to_string(),
            value: token.to_string(),
            reason: "expected an integer index".to_string(),
        })
}

/// Parses `ArrowRight,next,goto:3,click:1`. Unknown key names are kept as
/// keys; the carousel ignores them.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if let Some(raw) = token.strip_prefix("goto:") {
                return parse_index(token, raw).map(Command::GoTo);
            }
            if let Some(raw) = token.strip_prefix("click:") {
                return parse_index(token, raw).map(Command::Click);
            }
            Ok(match token.to_ascii_lowercase().as_str() {
                "next" => Command::Next,
                "prev" => Command::Prev,
                _ => Command::Key(token.parse().unwrap_or_else(|never| match never {})),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub frames: usize,
    pub rejected: usize,
    pub final_state: CarouselState,
}

/// Drives a carousel through a script and renders a frame after every step.
pub struct ReplayEngine<R> {
    renderer: R,
}

impl<R> ReplayEngine<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn run<T>(
        &mut self,
        carousel: &mut Carousel<T>,
        hub: &KeyboardHub,
        commands: &[Command],
    ) -> Result<ReplaySummary>
    where
        R: FrameRenderer<T>,
    {
        tracing::info!(commands = commands.len(), "replaying carousel script");

        self.renderer.render(&carousel.frame(0, "initial"))?;
        let mut rejected = 0;

        for (i, command) in commands.iter().enumerate() {
            match execute(carousel, hub, command) {
                Ok(()) => {}
                Err(e @ CarouselError::IndexOutOfRange { .. }) => {
                    tracing::warn!("💡 {} ({})", e, e.recovery_suggestion());
                    rejected += 1;
                }
                Err(e) => return Err(e),
            }
            self.renderer
                .render(&carousel.frame(i + 1, command.to_string()))?;
        }

        self.renderer.finish()?;

        let summary = ReplaySummary {
            frames: commands.len() + 1,
            rejected,
            final_state: carousel.state(),
        };
        tracing::info!(
            frames = summary.frames,
            rejected = summary.rejected,
            active = summary.final_state.active_index,
            "replay finished"
        );
        Ok(summary)
    }
}

fn to_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index).map_err(|_| CarouselError::IndexOutOfRange { index, len })
}

fn execute<T>(carousel: &mut Carousel<T>, hub: &KeyboardHub, command: &Command) -> Result<()> {
    match command {
        Command::Key(key) => {
            let notified = hub.dispatch(key);
            if notified == 0 {
                tracing::debug!(%key, "no carousel listening for key");
            }
        }
        Command::Next => {
            carousel.next();
        }
        Command::Prev => {
            carousel.prev();
        }
        Command::GoTo(index) => {
            let index = to_index(*index, carousel.len())?;
            carousel.go_to(index)?;
        }
        Command::Click(index) => {
            let index = to_index(*index, carousel.len())?;
            carousel.activate_item(index)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let commands = parse_script("ArrowRight, next ,goto:3,,click:-1,Enter,PREV").unwrap();
        assert_eq!(
            commands,
            vec![
                Command::Key(Key::ArrowRight),
                Command::Next,
                Command::GoTo(3),
                Command::Click(-1),
                Command::Key(Key::Other("Enter".to_string())),
                Command::Prev,
            ]
        );
    }

    #[test]
    fn test_parse_script_bad_index() {
        assert!(matches!(
            parse_script("goto:three"),
            Err(CarouselError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("").unwrap().is_empty());
    }

    #[test]
    fn test_negative_index_is_out_of_range() {
        assert!(matches!(
            to_index(-1, 6),
            Err(CarouselError::IndexOutOfRange { index: -1, len: 6 })
        ));
    }
}
