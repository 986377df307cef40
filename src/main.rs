use clap::{Parser, Subcommand};
use revbench::Result;

// Import handler modules
mod handlers;

#[derive(Parser)]
#[command(name = "revbench")]
#[command(about = "Reverse Benchmark - sequential vs parallel byte buffer reversal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full benchmark over every file size and thread count
    #[command(aliases = &["r"])]
    Run,

    /// Check parallel reversal against sequential reversal in memory
    #[command(aliases = &["v"])]
    Verify {
        /// Largest buffer length to check
        #[arg(short, long, default_value_t = revbench::verify::DEFAULT_MAX_LEN)]
        max_len: usize,
    },

    /// Remove generated test_<N>MB.txt files
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    revbench::debug_logger::init_from_env();

    match cli.command {
        Some(Commands::Run) | None => {
            handlers::handle_run();
        }
        Some(Commands::Verify { max_len }) => {
            handlers::handle_verify(max_len)?;
        }
        Some(Commands::Clean) => {
            handlers::handle_clean()?;
        }
    }

    Ok(())
}
