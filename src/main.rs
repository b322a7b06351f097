mod app;
mod config;
mod event;
mod keymap;
mod session;
mod ui;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{error, info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use app::{App, AppScreen};
use config::Config;
use event::{AppEvent, EventHandler};
use quizr::quiz;
use quizr::quiz::dataset::Dataset;
use ui::components::question_card::QuestionCard;
use ui::components::status_bar::StatusBar;
use ui::layout::{AppLayout, centered_rect, pack_hint_lines};
use ui::theme::Theme;

const QUIZ_HINTS: &[&str] = &[
    "[a-z] Answer",
    "[\u{2190}/\u{2192}/Space] Prev/Next",
    "[Shift+\u{2190}/\u{2192}] Chapter",
    "[\u{2191}] Random question",
    "[\u{2193}] Random chapter",
    "[Tab] Auto next",
    "[Ctrl+S] Shuffle mode",
    "[Ctrl+O] Chapters",
    "[Ctrl+G] Questions",
    "[Esc] Quit",
];

#[derive(Parser)]
#[command(name = "quizr", version, about = "Terminal quiz viewer with chapter navigation")]
struct Cli {
    #[arg(help = "Question bank JSON file (default: questions.json)")]
    path: Option<PathBuf>,

    #[arg(long, help = "Use the bundled demo question bank", conflicts_with = "path")]
    demo: bool,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Delay before auto-advancing after a correct answer, in ms")]
    delay_ms: Option<u64>,

    #[arg(long, help = "Start with auto next disabled")]
    no_auto_next: bool,

    #[arg(long, default_value = "info", help = "Log level (off, error, warn, info, debug, trace)")]
    log_level: LevelFilter,
}

fn init_logging(level: LevelFilter) {
    let Some(dir) = dirs::data_dir().map(|d| d.join("quizr")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(dir.join("quizr.log")) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn load_dataset(cli: &Cli, config: &Config) -> Result<Dataset> {
    if cli.demo {
        return Dataset::bundled("demo").context("loading bundled demo bank");
    }
    let path = config.resolve_questions_path(cli.path.clone());
    info!("loading question bank from {}", path.display());
    Dataset::load(&path).with_context(|| format!("loading question bank {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("config unreadable, using defaults: {e:#}");
        Config::default()
    });
    if let Some(theme) = cli.theme.clone() {
        config.theme = theme;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.auto_advance_delay_ms = delay_ms;
    }
    if cli.no_auto_next {
        config.auto_next = false;
    }

    // No terminal setup and no navigation state until the bank has loaded.
    let dataset = match load_dataset(&cli, &config) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("{e:#}");
            return Err(e);
        }
    };

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!("unknown theme '{}', using default", config.theme);
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));
    let mut app = App::new(dataset, &config, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(50));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        error!("{err:#}");
    }
    info!("quizr exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let action = match app.screen {
        AppScreen::Quiz => keymap::quiz_action(key, app.session.options.len()),
        AppScreen::Picker => keymap::picker_action(key),
    };
    if let Some(action) = action {
        app.apply(action, Instant::now());
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let hint_lines = pack_hint_lines(QUIZ_HINTS, area.width as usize);
    let footer_height = u16::try_from(hint_lines.len()).unwrap_or(u16::MAX);
    let layout = AppLayout::new(area, footer_height);

    let nav = &app.navigator;
    let state = nav.state();
    let status = StatusBar {
        chapter: nav.current_chapter_name(),
        chapter_number: state.chapter + 1,
        chapter_count: nav.dataset().chapter_count(),
        question_number: state.question + 1,
        question_count: nav.current_chapter().len(),
        mode: app.mode(),
        auto_next: app.auto_next,
        theme: app.theme,
    };
    frame.render_widget(status, layout.header);

    let card = QuestionCard::new(app.current_question(), &app.session, app.theme);
    frame.render_widget(card, layout.main);

    let footer: Vec<Line> = hint_lines
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_muted()))))
        .collect();
    frame.render_widget(Paragraph::new(footer), layout.footer);

    if app.screen == AppScreen::Picker {
        if let Some(ref picker) = app.picker {
            let popup = centered_rect(50, 60, area);
            frame.render_widget(picker, popup);
        }
    }
}
