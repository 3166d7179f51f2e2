use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use industry_pulse::app::{App, Page};
use industry_pulse::types::{IndustryLevel, Metric};
use industry_pulse::{constants, join, loader, metrics, pages, summary};

#[derive(Parser)]
#[command(name = "industry_pulse")]
#[command(about = "Industry revenue & profit growth dashboard", long_about = None)]
struct Cli {
    /// Directory holding the yearly Data<YYYY>.xlsx extracts
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Classification spreadsheet; defaults to <data-dir>/classification.xlsx
    #[arg(short, long)]
    classification: Option<PathBuf>,

    /// Filename prefix of the yearly extracts
    #[arg(long, default_value = constants::files::DATA_PREFIX)]
    prefix: String,

    /// Industry classification tier to aggregate by
    #[arg(short, long, value_enum, default_value_t = IndustryLevel::Broad)]
    level: IndustryLevel,

    /// Metric to analyze
    #[arg(short, long, value_enum, default_value_t = Metric::Revenue)]
    metric: Metric,

    /// Print the summary table to stdout instead of opening the dashboard
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rows = loader::load_dir(&cli.data_dir, &cli.prefix)?;
    let classification_path = cli
        .classification
        .clone()
        .unwrap_or_else(|| cli.data_dir.join(constants::files::CLASSIFICATION_FILE));
    let classes = join::load_classification(&classification_path)?;
    let joined = join::left_join(rows, &classes);

    if cli.summary {
        let rows = metrics::industry_summary(&joined, cli.level, cli.metric);
        summary::print_summary(&rows, cli.level, cli.metric);
        return Ok(());
    }

    println!("{}", "Loaded data, opening dashboard".green());
    let mut app = App::new(joined, cli.level, cli.metric);
    run_tui(&mut app)
}

fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| match app.page {
            Page::Summary => pages::summary_page::render(f, app),
            Page::Charts => pages::charts_page::render(f, app),
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Tab => app.toggle_page(),
                    KeyCode::Char('1') => app.set_level(IndustryLevel::Broad),
                    KeyCode::Char('2') => app.set_level(IndustryLevel::Medium),
                    KeyCode::Char('3') => app.set_level(IndustryLevel::Narrow),
                    KeyCode::Char('m') => app.toggle_metric(),
                    KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                    KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                    KeyCode::PageDown => app.scroll_down(10),
                    KeyCode::PageUp => app.scroll_up(10),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => app.scroll_down(3),
                MouseEventKind::ScrollUp => app.scroll_up(3),
                _ => {}
            },
            _ => {}
        }
    }
}
