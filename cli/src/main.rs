use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use demos::{DEMO_NAMES, DemoOptions, parse_arm, run_demo, scenario};

#[derive(Parser)]
#[command(name = "blockfold", version, about = "Block combinator demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a demonstration by name
    Run(RunArgs),

    /// List available demonstrations
    List,

    /// Run TOML scenario files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Demonstration name (see `list`)
    demo: String,

    /// Conditional arm taken where the demo branches ("first" or "second")
    #[arg(long, default_value = "first")]
    arm: String,

    /// Name used by demos that introduce somebody
    #[arg(long, default_value = "Frodo")]
    name: String,

    /// Inclusive upper bound for demos that loop
    #[arg(long, default_value_t = 10)]
    end: i64,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a scenario .toml file or a directory of them
    path: String,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args),
        Command::List => {
            for name in DEMO_NAMES {
                println!("{}", name);
            }
        }
        Command::Test(args) => test(args),
    }
}

fn run(args: RunArgs) {
    let arm = match parse_arm(&args.arm) {
        Some(arm) => arm,
        None => {
            eprintln!("error: unknown arm '{}': expected 'first' or 'second'", args.arm);
            process::exit(1);
        }
    };
    let opts = DemoOptions {
        arm,
        name: args.name,
        end: args.end,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run_demo(&args.demo, &opts, &mut out) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn test(args: TestArgs) {
    let reports = match scenario::run_path(Path::new(&args.path)) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    let mut passed = 0;
    let mut failed = 0;
    for report in &reports {
        let label = report
            .description
            .clone()
            .unwrap_or_else(|| report.path.display().to_string());
        if report.passed {
            passed += 1;
            println!("PASS {}", label);
        } else {
            failed += 1;
            println!("FAIL {}", label);
            if let Some(detail) = &report.detail {
                println!("     {}", detail);
            }
        }
    }

    println!();
    println!("{} passed, {} failed", passed, failed);
    if failed > 0 {
        process::exit(1);
    }
}
