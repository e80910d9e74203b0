pub mod app;
pub mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use safeskip_core::{PlannerUseCase, PlanningWindow, SettingsRepository, SnapshotRepository};

use crate::tui::app::App;
use crate::Dashboard;

pub fn run(dashboard: &Dashboard) -> Result<()> {
    let planner = PlannerUseCase::new(dashboard, PlanningWindow::today())?;
    if planner.subjects().is_empty() {
        println!("No attendance data. Run `safeskip import <file>` first.");
        return Ok(());
    }
    let mut app = App::new(planner);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, R, S>(terminal: &mut Terminal<B>, app: &mut App<'_, R, S>) -> Result<()>
where
    B: Backend,
    R: SnapshotRepository,
    S: SettingsRepository,
{
    loop {
        let report = app.report()?;
        terminal
            .draw(|f| ui::draw(f, app, &report))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next_subject(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_subject(),
                    KeyCode::Right | KeyCode::Char('l') => app.next_day(),
                    KeyCode::Left | KeyCode::Char('h') => app.previous_day(),
                    KeyCode::Char(' ') | KeyCode::Enter => app.toggle(),
                    KeyCode::Char('r') => app.reset(),
                    KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_threshold(1.0),
                    KeyCode::Char('-') => app.adjust_threshold(-1.0),
                    _ => {}
                }
            }
        }
    }
}
