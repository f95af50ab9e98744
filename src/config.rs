use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "imc-server")]
#[command(about = "Calculadora de IMC profissional - servidor HTTP")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 100)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 3600)]
    pub rate_window: u64,

    // Interval between sweeps of expired rate limit entries, in seconds
    #[arg(long, default_value_t = 300)]
    pub evict_interval: u64,
}
