use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "pixelboard")]
#[command(about = "Shared collaborative pixel canvas server")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Minimum time between two accepted paints from the same user, in ms
    #[arg(long, default_value_t = 1000)]
    pub cooldown_ms: u64,

    // Grid width in cells (feeds the served page, never gates writes)
    #[arg(long, default_value_t = 50)]
    pub grid_width: u32,

    // Grid height in cells
    #[arg(long, default_value_t = 50)]
    pub grid_height: u32,

    // Buffer depth of the live-update broadcast channel
    #[arg(long, default_value_t = 128)]
    pub events_capacity: usize,
}
