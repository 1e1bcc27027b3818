//! fnplot - plot a function of x in the terminal.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fnplot::app::{App, Theme};
use fnplot::form::{Focus, Form};
use fnplot::validator::{Field, PlotRequest, PlotRequestValidator, UndefinedPolicy};
use fnplot::{ui, util, FnplotError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "fnplot")]
#[command(about = "Plot a function of x over an integer range", long_about = None)]
struct Args {
    /// Function of x to plot, e.g. "2x^2 - 3"
    #[arg(short, long, allow_hyphen_values = true)]
    function: Option<String>,

    /// Minimum value of x
    #[arg(long, allow_hyphen_values = true)]
    min: Option<String>,

    /// Maximum value of x
    #[arg(long, allow_hyphen_values = true)]
    max: Option<String>,

    /// Print the sampled series as CSV instead of opening the dialog
    #[arg(long)]
    print: bool,

    /// Where the function is undefined: leave a gap, or abort the plot [gap|abort]
    #[arg(long, default_value = "gap")]
    on_undefined: UndefinedPolicy,

    /// Color theme [dark|light]
    #[arg(long, default_value = "dark")]
    theme: Theme,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting fnplot");
    }

    let request = PlotRequest::new(
        args.function.unwrap_or_default(),
        args.min.unwrap_or_default(),
        args.max.unwrap_or_default(),
    );
    let validator = PlotRequestValidator::new(args.on_undefined);

    if args.print {
        let stdout = io::stdout();
        return match util::write_series(&mut stdout.lock(), &request, &validator) {
            Ok(()) => Ok(()),
            Err(FnplotError::Validation(e)) => {
                tracing::error!("Invalid request: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            },
            Err(e) => Err(e.into()),
        };
    }

    let mut app = App::new(Form::from_request(&request), validator, args.theme);
    if Field::ALL.iter().all(|&field| !request.field(field).is_empty()) {
        app.plot();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("fnplot exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Paste(text) => {
                app.paste(&text);
                continue;
            },
            _ => continue,
        };

        match (key.modifiers, key.code) {
            // Quit
            (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

            // Clipboard
            (KeyModifiers::CONTROL, KeyCode::Char('v')) => app.paste_from_clipboard(),
            (KeyModifiers::CONTROL, KeyCode::Char('y')) => app.copy_series(),

            (KeyModifiers::CONTROL, KeyCode::Char('t')) => app.cycle_theme(),

            // Plot
            (_, KeyCode::Enter) => {
                app.plot();
            },
            (KeyModifiers::NONE, KeyCode::Char(' ')) if app.focus == Focus::PlotButton => {
                app.plot();
            },

            // Focus
            (_, KeyCode::Tab) | (_, KeyCode::Down) => app.focus_next(),
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => app.focus_prev(),

            // Editing
            (_, KeyCode::Left) => app.cursor_left(),
            (_, KeyCode::Right) => app.cursor_right(),
            (_, KeyCode::Home) => app.cursor_home(),
            (_, KeyCode::End) => app.cursor_end(),
            (_, KeyCode::Backspace) => app.backspace(),
            (_, KeyCode::Delete) => app.delete(),
            (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                app.input(c)
            },

            _ => {},
        }
    }
}
