use clap::Parser;
use ring_carousel::domain::ports::FrameRenderer;
use ring_carousel::render::{CsvRenderer, JsonRenderer, OutputFormat, TextRenderer};
use ring_carousel::utils::error::{CarouselError, ErrorSeverity};
use ring_carousel::utils::{logger, validation::Validate};
use ring_carousel::{
    parse_script, Carousel, CliConfig, Command, KeyboardHub, ReplayEngine, ReplaySummary, RosterConfig,
    TeamMember,
};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting ring-carousel CLI");
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(summary) => {
            tracing::info!(
                "✅ Replayed {} frames, {} rejected, ended on item {}",
                summary.frames,
                summary.rejected,
                summary.final_state.active_index
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ ring-carousel failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

fn run(config: &CliConfig) -> Result<ReplaySummary, CarouselError> {
    let mut roster = match &config.roster {
        Some(path) => {
            tracing::info!("📁 Loading roster from: {}", path);
            RosterConfig::from_file(path)?
        }
        None => RosterConfig::builtin()?,
    };
    roster.carousel = config.apply_overrides(roster.carousel);
    roster.validate()?;

    let commands = parse_script(&config.keys)?;

    let mut carousel = Carousel::new(roster.members, roster.carousel)?;
    let hub = KeyboardHub::new();
    carousel.mount(&hub)?;

    let stdout = std::io::stdout().lock();
    let summary = match config.format {
        OutputFormat::Text => replay(TextRenderer::new(stdout), &mut carousel, &hub, &commands)?,
        OutputFormat::Json => replay(JsonRenderer::new(stdout), &mut carousel, &hub, &commands)?,
        OutputFormat::Csv => replay(CsvRenderer::new(stdout), &mut carousel, &hub, &commands)?,
    };

    if let Some(member) = carousel.item(summary.final_state.active_index) {
        tracing::debug!(
            "Final chips for {}: {:?}",
            member.name,
            carousel.chip_delays()
        );
    }

    carousel.unmount();
    Ok(summary)
}

fn replay<R: FrameRenderer<TeamMember>>(
    renderer: R,
    carousel: &mut Carousel<TeamMember>,
    hub: &KeyboardHub,
    commands: &[Command],
) -> Result<ReplaySummary, CarouselError> {
    let mut engine = ReplayEngine::new(renderer);
    engine.run(carousel, hub, commands)
}
