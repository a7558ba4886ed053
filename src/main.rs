mod app;
mod cli;
mod config;
mod error;
mod logic;
mod models;
mod ui;

use app::{App, Screen};
use clap::Parser;
use cli::{Cli, Commands, ConditionArgs, FieldArgs};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use error::{AgroPredictError, Result};
use logic::{estimate_yield, recommend_crops, validate_field_conditions, validate_field_data};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{FieldFormScreen, FormMode, PredictionScreen, RecommendationsScreen};
use ui::Theme;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Headless subcommands bypass the TUI entirely
    match &cli.command {
        Some(Commands::Init) => {
            if let Err(e) = Config::setup_interactive() {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
        Some(Commands::Predict(args)) => {
            if let Err(e) = run_predict(args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
        Some(Commands::Recommend(args)) => {
            if let Err(e) = run_recommend(args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return Ok(());
        }
        None => {}
    }

    // Load configuration; the app is fully usable without one
    let config = if Config::exists(cli.config.as_ref()) {
        Config::load(cli.config.clone())?
    } else {
        tracing::warn!("no config file found, using defaults (run `agropredict init`)");
        Config::default()
    };

    let mut app = App::new(config);
    app.set_status("Welcome! Fill in your field data and press c to calculate.");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// One-shot yield estimate printed as JSON.
fn run_predict(args: &FieldArgs) -> Result<()> {
    let draft = args.to_draft()?;
    let data = validate_field_data(&draft)?;
    let result = estimate_yield(&data);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// One-shot suitability ranking printed as JSON.
fn run_recommend(args: &ConditionArgs) -> Result<()> {
    let conditions = validate_field_conditions(&args.to_draft())?;
    let recommendations = recommend_crops(&conditions);
    println!("{}", serde_json::to_string_pretty(&recommendations)?);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    AgroPredictError: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        // Short poll timeout keeps the tick running while a computation is
        // waiting out its presentation delay.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key.code, key.modifiers);
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(f: &mut ratatui::Frame, app: &App) {
    use ratatui::layout::{Constraint, Direction, Layout};
    use ratatui::text::Span;
    use ratatui::widgets::Paragraph;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    match app.screen {
        Screen::YieldForm => {
            let form = &app.yield_form;
            let screen = FieldFormScreen::new(FormMode::Yield, &form.values)
                .with_focus(form.focused)
                .editing(form.editing, &form.edit_buffer)
                .computing(app.is_computing());
            f.render_widget(screen, chunks[0]);
        }
        Screen::ConditionsForm => {
            let form = &app.conditions_form;
            let screen = FieldFormScreen::new(FormMode::Conditions, &form.values)
                .with_focus(form.focused)
                .editing(form.editing, &form.edit_buffer)
                .computing(app.is_computing());
            f.render_widget(screen, chunks[0]);
        }
        Screen::Prediction => {
            if let Some((crop, result)) = &app.prediction {
                f.render_widget(PredictionScreen::new(*crop, result), chunks[0]);
            }
        }
        Screen::Recommendations => {
            let screen = RecommendationsScreen::new(&app.recommendations)
                .with_selection(app.recommendations_state.selected_index);
            f.render_widget(screen, chunks[0]);
        }
    }

    if let Some(status) = &app.status_message {
        let style = if status.is_error {
            Theme::error()
        } else {
            Theme::success()
        };
        f.render_widget(
            Paragraph::new(Span::styled(status.text.as_str(), style)),
            chunks[1],
        );
    }
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let editing = match app.screen {
        Screen::YieldForm => app.yield_form.editing,
        Screen::ConditionsForm => app.conditions_form.editing,
        _ => false,
    };

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
        }
        KeyCode::Char('q') if !editing => {
            app.quit();
        }
        KeyCode::Esc if editing => {
            if let Some(form) = app.active_form_mut() {
                form.cancel_editing();
            }
        }
        KeyCode::Esc => {
            app.switch_screen(app.screen.back());
        }
        KeyCode::Char(c) if !editing => {
            if let Some(screen) = Screen::from_key(c) {
                app.switch_screen(screen);
            } else {
                handle_screen_input(app, code);
            }
        }
        _ => {
            handle_screen_input(app, code);
        }
    }
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::YieldForm | Screen::ConditionsForm => handle_form_input(app, code),
        Screen::Prediction => {}
        Screen::Recommendations => handle_recommendations_input(app, code),
    }
}

fn handle_form_input(app: &mut App, code: KeyCode) {
    let editing = match app.screen {
        Screen::YieldForm => app.yield_form.editing,
        Screen::ConditionsForm => app.conditions_form.editing,
        _ => false,
    };

    if !editing && code == KeyCode::Char('c') {
        app.submit_active_form();
        return;
    }

    let Some(form) = app.active_form_mut() else {
        return;
    };

    if editing {
        match code {
            KeyCode::Enter => form.finish_editing(),
            KeyCode::Backspace => {
                form.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                form.edit_buffer.push(c);
            }
            _ => {}
        }
    } else {
        match code {
            KeyCode::Up | KeyCode::BackTab => form.prev_field(),
            KeyCode::Down | KeyCode::Tab => form.next_field(),
            KeyCode::Left => form.values.cycle(form.focused, -1),
            KeyCode::Right => form.values.cycle(form.focused, 1),
            KeyCode::Enter => {
                if form.focused.is_select() {
                    form.values.cycle(form.focused, 1);
                } else {
                    form.start_editing();
                }
            }
            _ => {}
        }
    }
}

fn handle_recommendations_input(app: &mut App, code: KeyCode) {
    let count = app.recommendations.len();
    match code {
        KeyCode::Up => app.recommendations_state.prev(),
        KeyCode::Down => app.recommendations_state.next(count),
        _ => {}
    }
}
