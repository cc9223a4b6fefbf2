//! Calcvm CLI: evaluate an expression from a file or the command line, or
//! run the REPL.

use std::env;
use std::fs;
use std::io;
use std::process;

use colored::Colorize;
use tracing_subscriber::{fmt, EnvFilter};

use calcvm::{disassemble, CalcError, Chunk};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI command to execute.
enum Command {
    /// Evaluate the contents of a file
    Run { file: String },
    /// Evaluate a string
    Eval { code: String },
    /// Start the REPL
    Repl,
}

/// CLI options parsed from arguments.
struct Options {
    command: Command,
    show_bytecode: bool,
    disassemble: bool,
    no_color: bool,
}

fn print_usage() {
    eprintln!("Calcvm {} - arithmetic expression compiler and VM", VERSION);
    eprintln!();
    eprintln!("Usage: calcvm [options] [file]");
    eprintln!("       calcvm [options] -e <expression>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e <expression>  Evaluate the expression and print the result");
    eprintln!("  --bytecode       Print the compiled bytecode cells");
    eprintln!("  --disassemble    Print a disassembly of the compiled bytecode");
    eprintln!("  --no-color       Disable colored diagnostics");
    eprintln!("  --version, -V    Show the version");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("With no file or expression, starts an interactive REPL.");
    eprintln!("Set RUST_LOG=calcvm=debug to trace pipeline stages.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  calcvm -e '2 ** 3 ** 2'          Evaluate an expression");
    eprintln!("  calcvm --disassemble -e '1 + 2'  Show the bytecode listing");
    eprintln!("  calcvm expr.txt                  Evaluate a file");
}

fn parse_args() -> Options {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut options = Options {
        command: Command::Repl,
        show_bytecode: false,
        disassemble: false,
        no_color: false,
    };

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--version" | "-V" => {
                println!("calcvm {}", VERSION);
                process::exit(0);
            }
            "--bytecode" => options.show_bytecode = true,
            "--disassemble" => options.disassemble = true,
            "--no-color" => options.no_color = true,
            "-e" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("-e requires an expression argument");
                    print_usage();
                    process::exit(64);
                }
                options.command = Command::Eval {
                    code: args[i].clone(),
                };
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                eprintln!("Unknown option: {}", arg);
                print_usage();
                process::exit(64);
            }
            _ => {
                if !matches!(options.command, Command::Repl) {
                    eprintln!("Only one file or expression can be specified");
                    print_usage();
                    process::exit(64);
                }
                options.command = Command::Run { file: arg.clone() };
            }
        }
        i += 1;
    }

    options
}

/// Initialize logging. `RUST_LOG` overrides the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let options = parse_args();
    init_logging();

    if options.no_color {
        colored::control::set_override(false);
    }

    match &options.command {
        Command::Repl => run_repl(&options),
        Command::Run { file } => run_file(file, &options),
        Command::Eval { code } => run_eval(code, &options),
    }
}

fn run_file(path: &str, options: &Options) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{} cannot read '{}': {}", "error:".red().bold(), path, e);
            process::exit(74);
        }
    };

    run_eval(&source, options);
}

fn run_eval(code: &str, options: &Options) {
    let chunk = match calcvm::compile_chunk(code) {
        Ok(chunk) => chunk,
        Err(e) => fail(&e),
    };

    print_listing(&chunk, options);

    match calcvm::execute(&chunk.code) {
        Ok(value) => println!("{}", value),
        Err(e) => fail(&e.into()),
    }
}

fn print_listing(chunk: &Chunk, options: &Options) {
    if options.show_bytecode {
        println!("{:?}", chunk.code);
    }
    if options.disassemble {
        print!("{}", disassemble(chunk));
    }
}

fn fail(err: &CalcError) -> ! {
    eprintln!("{} {}", "error:".red().bold(), err);
    let code = match err {
        CalcError::Lex(_) | CalcError::Parse(_) => 65,
        CalcError::Runtime(_) => 70,
    };
    process::exit(code);
}

fn run_repl(options: &Options) {
    let mut repl = calcvm::repl::Repl::new(options.show_bytecode, options.disassemble);
    let stdin = io::stdin();
    if let Err(e) = repl.run(stdin.lock(), io::stdout()) {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(74);
    }
}
