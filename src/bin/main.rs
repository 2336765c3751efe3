use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use thousands::Separable;

use maze::algorithms::Searcher;
use maze::generators::Generator;
use maze::maze::Maze;
use maze::problem::MazeProblem;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Generates a maze and solves it with every requested searcher.
#[derive(Parser, Debug)]
#[clap(long_version = maze::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze height, odd.
    #[arg(long, default_value_t = 21)]
    pub rows: usize,
    /// Maze width, odd.
    #[arg(long, default_value_t = 21)]
    pub cols: usize,

    #[arg(short, long, value_enum, default_value_t = Generator::Dfs)]
    pub generator: Generator,

    /// Repeat to run several. Runs all of them when omitted.
    #[arg(short, long, value_enum)]
    pub searcher: Vec<Searcher>,

    /// Seed for every random choice. Drawn at random when omitted.
    #[arg(long, env = "MAZE_SEED")]
    pub seed: Option<u64>,

    /// Search between random passable cells instead of the corners.
    #[arg(long)]
    pub random_endpoints: bool,

    /// Print the generation and search records.
    #[arg(long)]
    pub trace: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn print_maze(maze: &Maze, args: &Args) {
    println!(
        "{} {}x{} maze, {} passable cells, {} records",
        args.generator.to_string().bold(),
        maze.rows(),
        maze.cols(),
        maze.passable_count().separate_with_commas(),
        maze.records().len().separate_with_commas(),
    );
    if args.trace {
        for (i, step) in maze.records().iter().enumerate() {
            println!("  {:>6} {step}", i.dimmed());
        }
    }
    println!("{maze}");
}

fn solve(problem: &MazeProblem, searcher: Searcher, rng: &mut ChaCha8Rng, trace: bool) {
    match problem.solve(searcher, rng) {
        Ok(Some(result)) => {
            println!(
                "{}: {} steps, {} records",
                searcher.to_string().green().bold(),
                result.len().separate_with_commas(),
                result.records.len().separate_with_commas(),
            );
            if trace {
                for (i, step) in result.records.iter().enumerate() {
                    println!("  {:>6} {step}", i.dimmed());
                }
            }
            println!("{}", problem.maze.render_path(&result.points));
        }
        Ok(None) => println!(
            "{}: {} is unreachable from {}",
            searcher.to_string().yellow().bold(),
            problem.end,
            problem.start
        ),
        Err(e) => println!("{}: {e}", searcher.to_string().red().bold()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    args.color.write_global();

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Seed {}", seed.yellow());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let maze = args.generator.generate(args.rows, args.cols, &mut rng)?;
    print_maze(&maze, &args);

    let problem = if args.random_endpoints {
        MazeProblem::randomize(maze, &mut rng).ok_or("No passable cells to search between")?
    } else {
        MazeProblem::corners(maze)
    };

    let searchers = if args.searcher.is_empty() {
        Searcher::ALL.to_vec()
    } else {
        args.searcher.clone()
    };
    for searcher in searchers {
        solve(&problem, searcher, &mut rng, args.trace);
    }

    Ok(())
}
