// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "suzanne-island")]
#[command(about = "Headless Suzanne Island camera and culling simulation", long_about = None)]
pub struct Cli {
    /// Scene configuration (JSON); the built-in island scene when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Seconds per simulated frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Start in follow-path mode
    #[arg(long = "follow-path", default_value = "false")]
    pub follow_path: bool,

    /// Disable view frustum culling
    #[arg(long = "no-culling", default_value = "false")]
    pub no_culling: bool,

    /// Log culling statistics every N frames
    #[arg(long = "report-every", default_value_t = 60)]
    pub report_every: u64,

    /// Print the effective scene configuration as JSON and exit
    #[arg(long = "dump-config", default_value = "false")]
    pub dump_config: bool,
}
