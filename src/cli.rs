use clap::Parser;
use lastword::{
    EXIT_FAILURE, EXIT_INTERRUPTED, InstanceHolder, LwError, Record, interrupt, parse_id,
    prompt_line, report,
};
use std::process;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "lastword",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register a named instance, then report it when interrupted"
)]
struct Cli {
    /// id number for the instance
    #[arg(required = true, num_args = 1, index = 1)]
    idnum: String,

    /// keep the trailing newline on the name
    #[arg(short = 'k', long)]
    keep_newline: bool,
}

fn main() {
    // try_parse instead of parse: usage errors exit with 1, not clap's 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.use_stderr() {
                eprint!("{err}");
                process::exit(EXIT_FAILURE);
            }
            print!("{err}");
            process::exit(0);
        }
    };

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            err.code()
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<i32, LwError> {
    let mut holder = InstanceHolder::new();

    let line = match prompt_line("Please enter name for instance: ") {
        Ok(Some(line)) => line,
        Ok(None) => {
            println!("exiting");
            return Ok(EXIT_FAILURE);
        }
        Err(err) => {
            eprintln!("{err}");
            println!("exiting");
            return Ok(EXIT_FAILURE);
        }
    };

    let record = Record::from_line(&line, parse_id(&cli.idnum), cli.keep_newline);
    holder.access(Some(record));

    // registration happens-before installation, so the report can never
    // observe a pre-registration state
    interrupt::install()?;
    println!("ok please send sigint ctrl+c");

    while !interrupt::pending() {
        thread::sleep(Duration::from_millis(50));
    }

    println!("{}", report(holder.access(None)));
    Ok(EXIT_INTERRUPTED)
}
