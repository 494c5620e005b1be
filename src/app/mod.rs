pub mod replay;

pub use replay::{parse_script, Command, ReplayEngine, ReplaySummary};
