//! docfold: A sectioned, collapsible document viewer.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use docfold::{app_state, config, document, logging, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docfold")]
#[command(about = "View heading-delimited documents with collapsible sections", long_about = None)]
struct Args {
    /// Document to view: raw text, or a JSON store record ending in .json
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Version label to show for the document
    #[arg(long)]
    doc_version: Option<String>,

    /// Date the document takes effect
    #[arg(long, value_name = "YYYY-MM-DD")]
    effective_date: Option<String>,

    /// Expand these section indices before showing the document
    #[arg(long, value_name = "INDEX")]
    expand: Vec<usize>,

    /// Number of body lines shown for collapsed sections
    #[arg(long)]
    preview_lines: Option<usize>,

    /// Print the document view as JSON instead of opening the viewer
    #[arg(long)]
    json: bool,

    /// Write logs to this file while the viewer is open
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> docfold::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(preview_lines) = args.preview_lines {
        cfg.preview_lines = preview_lines;
    }

    let sink = match (&args.log_file, args.json) {
        (Some(path), _) => logging::Sink::File(path),
        (None, true) => logging::Sink::Stderr,
        (None, false) => logging::Sink::Off,
    };
    logging::init(&cfg.log_level, &sink)?;

    let options = document::LoadOptions {
        version: args.doc_version,
        effective_date: args
            .effective_date
            .as_deref()
            .map(document::parse_date)
            .transpose()?,
    };
    let doc = document::Document::load(&args.path, &options)?;

    let mut state =
        app_state::AppState::new(doc, cfg.policy(), cfg.wrap_width, cfg.preview_lines);
    state.expand(&args.expand)?;

    if args.json {
        let json = serde_json::to_string_pretty(&state.view())?;
        println!("{json}");
        return Ok(());
    }

    run_tui(&mut state)?;
    Ok(())
}

fn run_tui(app: &mut app_state::AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            let shift = key.modifiers.contains(KeyModifiers::SHIFT);
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up if shift => app.select(app.navigate_to_prev_sibling()),
                KeyCode::Down if shift => app.select(app.navigate_to_next_sibling()),
                KeyCode::Up | KeyCode::Char('k') => app.select(app.find_prev_section()),
                KeyCode::Down | KeyCode::Char('j') => app.select(app.find_next_section()),
                KeyCode::Left | KeyCode::Char('h') => app.select(app.navigate_to_parent()),
                KeyCode::Right | KeyCode::Char('l') => app.select(app.navigate_to_first_child()),
                KeyCode::Home => app.select(app.navigate_to_first()),
                KeyCode::End => app.select(app.navigate_to_last()),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_current(),
                KeyCode::Char('e') => app.expand_all(),
                KeyCode::Char('c') => app.collapse_all(),
                _ => {}
            }
        }
    }
}
