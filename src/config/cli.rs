use crate::config::CarouselOptions;
use crate::core::ring::ArcMode;
use crate::render::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ring-carousel")]
#[command(about = "Replay navigation on a circular team carousel and print each frame")]
pub struct CliConfig {
    /// Path to a TOML roster; the bundled demo team is used when omitted
    #[arg(short, long)]
    pub roster: Option<String>,

    /// Comma-separated script: ArrowLeft, ArrowRight, next, prev, goto:N, click:N
    #[arg(short, long, default_value = "")]
    pub keys: String,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Override the ring radius from the roster
    #[arg(long)]
    pub radius: Option<f64>,

    /// Override the angular distance mode from the roster
    #[arg(long, value_enum)]
    pub arc: Option<ArcMode>,

    /// Collapse the ring for users who prefer reduced motion
    #[arg(long)]
    pub reduced_motion: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Layers command-line overrides on top of roster options.
    pub fn apply_overrides(&self, mut options: CarouselOptions) -> CarouselOptions {
        if let Some(radius) = self.radius {
            options.radius = radius;
        }
        if let Some(arc) = self.arc {
            options.arc = arc;
        }
        if self.reduced_motion {
            options.reduced_motion = true;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_roster_values() {
        let cli = CliConfig::parse_from([
            "ring-carousel",
            "--radius",
            "240",
            "--arc",
            "shortest",
            "--reduced-motion",
        ]);
        let options = cli.apply_overrides(CarouselOptions::default());

        assert_eq!(options.radius, 240.0);
        assert_eq!(options.arc, ArcMode::Shortest);
        assert!(options.reduced_motion);
    }

    #[test]
    fn test_no_overrides_keep_roster_values() {
        let cli = CliConfig::parse_from(["ring-carousel"]);
        let roster = CarouselOptions::default().with_radius(90.0);
        assert_eq!(cli.apply_overrides(roster.clone()), roster);
    }
}
