use clap::{Parser, Subcommand};
use shfr::cipher::Algorithm;
use shfr::cli::{decrypt_file, encrypt_file};
use shfr::error::Result;
use shfr::strategy::WorkerPool;
use shfr::transform::{Strategy, TransformPlan};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("SHFR_VERSION");
const BUILD: &str = env!("SHFR_BUILD");
const PROFILE: &str = env!("SHFR_PROFILE");
const GIT_HASH: &str = env!("SHFR_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "shfr")]
#[command(author, about = "Reversible byte-level file transforms", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transform a file into its .shfr sibling and remove the original
    #[command(alias = "e")]
    Encrypt {
        /// File to transform
        input: PathBuf,

        /// Algorithm id: 0 = reverse, 1 = pair swap, 2 = xor
        algorithm: u32,

        /// Execution strategy
        #[arg(long, default_value = "streaming", value_parser = parse_strategy)]
        strategy: Strategy,

        /// Worker count for the parallel strategy (defaults to detected cores)
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Restore a .shfr file under the given extension and remove the input
    #[command(alias = "d")]
    Decrypt {
        /// Transformed file (must carry the .shfr extension)
        input: PathBuf,

        /// Extension for the restored file
        extension: String,

        /// Algorithm id: 0 = reverse, 1 = pair swap, 2 = xor
        algorithm: u32,

        /// Execution strategy
        #[arg(long, default_value = "streaming", value_parser = parse_strategy)]
        strategy: Strategy,

        /// Worker count for the parallel strategy (defaults to detected cores)
        #[arg(long)]
        workers: Option<usize>,
    },
}

fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn build_plan(algorithm: u32, strategy: Strategy, workers: Option<usize>) -> Result<TransformPlan> {
    let algorithm = Algorithm::from_id(algorithm)?;
    let pool = match workers {
        Some(count) => WorkerPool::new(count),
        None => WorkerPool::detect(),
    };
    Ok(TransformPlan::new(algorithm, strategy, pool))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("shfr {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            input,
            algorithm,
            strategy,
            workers,
        } => build_plan(algorithm, strategy, workers).and_then(|plan| {
            let output = encrypt_file(&input, &plan)?;
            println!("Encrypted {} -> {}", input.display(), output.display());
            Ok(())
        }),

        Commands::Decrypt {
            input,
            extension,
            algorithm,
            strategy,
            workers,
        } => build_plan(algorithm, strategy, workers).and_then(|plan| {
            let output = decrypt_file(&input, &extension, &plan)?;
            println!("Decrypted {} -> {}", input.display(), output.display());
            Ok(())
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
