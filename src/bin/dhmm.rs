use clap::{Parser, Subcommand};
use dhmm::{cli, hmm::SampleParams, Model};

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the forward algorithm on an observed sequence
    Forward {
        /// Model file
        model: std::path::PathBuf,
        /// Observed symbols
        #[clap(required = true)]
        emissions: Vec<String>,
        /// Compute in log space
        #[clap(long)]
        log: bool,
        /// Treat each character as a symbol (`ACGT` is `A C G T`)
        #[clap(long)]
        chars: bool,
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
    /// Generate a state/observation sequence from the model
    Generate {
        /// Model file
        model: std::path::PathBuf,
        /// Minimum number of emitted pairs
        #[clap(short = 't', default_value_t = 10)]
        min_length: usize,
        /// Starting state. Sampled from the initial distribution if not given
        #[clap(long)]
        start: Option<String>,
        /// States the generation can stop at. All states if not given
        #[clap(long = "terminal")]
        terminals: Vec<String>,
        /// Maximum number of emitted pairs before giving up
        #[clap(long)]
        max_steps: Option<usize>,
        /// Seed of the random number generator
        #[clap(short = 's', long, default_value_t = 0)]
        seed: u64,
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
    /// Validate the model and print it back
    Show {
        /// Model file
        model: std::path::PathBuf,
    },
}

fn run(opts: &Opts) -> dhmm::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &opts.command {
        Commands::Forward {
            model,
            emissions,
            log,
            chars,
            json,
        } => {
            let model = Model::from_file(model)?;
            let emissions = cli::split_emissions(emissions, *chars);
            cli::forward(&mut out, &model, &emissions, *log, *json)
        }
        Commands::Generate {
            model,
            min_length,
            start,
            terminals,
            max_steps,
            seed,
            json,
        } => {
            let model = Model::from_file(model)?;
            let param = SampleParams {
                min_length: *min_length,
                start: start.clone(),
                terminals: terminals.clone(),
                max_steps: *max_steps,
            };
            cli::generate(&mut out, &model, &param, *seed, *json)
        }
        Commands::Show { model } => {
            let model = Model::from_file(model)?;
            cli::show(&mut out, &model)
        }
    }
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    eprintln!("# started_at={}", chrono::Local::now());
    eprintln!("# opts={:?}", opts);
    if let Err(e) = run(&opts) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    eprintln!("# finished_at={}", chrono::Local::now());
}
