// bfvm: tape-machine interpreter with a time-travel tape debugger

use std::fs;
use std::io::{self, IsTerminal, Read};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use bfvm::interpreter::constants::DEFAULT_SNAPSHOT_LIMIT;
use bfvm::interpreter::engine::{Engine, EngineConfig};
use bfvm::interpreter::io::StdIo;
use bfvm::snapshot::history::History;
use bfvm::ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--debug] <file>", program_name);
    eprintln!();
    eprintln!("Runs the program in <file>, reading input from stdin and writing output to stdout.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --debug    Record every step, then browse the run in a terminal debugger.");
    eprintln!("             Program input is read from stdin when it is piped.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} hello.bf", program_name);
    eprintln!("  echo 'abc' | {} --debug cat.bf", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("bfvm");

    let mut debug = false;
    let mut files = Vec::new();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--debug" | "-d" => debug = true,
            flag if flag.starts_with('-') => {
                eprintln!("Error: Unknown option '{}'", flag);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            file => files.push(file),
        }
    }

    let &[file] = files.as_slice() else {
        print_usage(program_name);
        std::process::exit(1);
    };

    // Bytes outside UTF-8 can only be comments, so a lossy decode is safe
    let source = match fs::read(file) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => {
            eprintln!("File {} could not be used", file);
            std::process::exit(1);
        }
    };

    if debug {
        return run_debugger(file, &source);
    }

    let mut engine = Engine::new();
    let mut io = StdIo::stdio();
    if let Err(e) = engine.run(&source, false, &mut io) {
        eprintln!("File {} does not contain a valid program: {}", file, e);
        std::process::exit(1);
    }
    io.finish()?;

    Ok(())
}

fn run_debugger(file: &str, source: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Piped stdin becomes program input; the TUI reads keys from the tty
    let mut input = Vec::new();
    if !io::stdin().is_terminal() {
        io::stdin().read_to_end(&mut input)?;
    }

    eprintln!("Recording {}...", file);
    let history = match History::record(
        source,
        &input,
        EngineConfig::default(),
        DEFAULT_SNAPSHOT_LIMIT,
    ) {
        Ok(history) => history,
        Err(e) => {
            eprintln!(
                "File {} does not contain a valid program: {}",
                file, e
            );
            std::process::exit(1);
        }
    };

    match history.truncation() {
        None => eprintln!("Recorded {} steps.", history.len()),
        Some(e) => {
            eprintln!("Recording stopped early: {}", e);
            eprintln!("Entering TUI with partial execution history...");
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(history);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
