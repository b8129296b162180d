// Sortty: sorting algorithm visualizer with step-by-step trace playback

mod algorithms;
mod comparison;
mod playback;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use ui::app::parse_values;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let data = if args.len() > 1 {
        match parse_values(&args[1..].join(" ")) {
            Ok(values) => values,
            Err(token) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");
                eprintln!("Error: '{}' is not an integer", token);
                eprintln!();
                eprintln!("Usage: {} [value ...]", program_name);
                eprintln!();
                eprintln!("Examples:");
                eprintln!(
                    "  {}                      # Visualize the default dataset",
                    program_name
                );
                eprintln!(
                    "  {} 5 3 8 1 9            # Visualize your own values",
                    program_name
                );
                eprintln!(
                    "  {} 170,45,75,90,802     # Commas work too",
                    program_name
                );
                std::process::exit(1);
            }
        }
    } else {
        vec![3, 7, 4, 5, 13, 10, 6, 8, 1]
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(data);
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
