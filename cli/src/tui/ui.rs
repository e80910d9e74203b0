use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use safeskip_core::forecast::weighting::LAB_WEIGHT;
use safeskip_core::{Decision, ForecastReport, SettingsRepository, SnapshotRepository};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::report::advice_text;
use crate::tui::app::App;

const NAME_WIDTH: u16 = 22;
const DAY_WIDTH: u16 = 6;

pub fn draw<R, S>(f: &mut Frame, app: &mut App<'_, R, S>, report: &ForecastReport)
where
    R: SnapshotRepository,
    S: SettingsRepository,
{
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(5), // Global card
            Constraint::Min(1),    // Grid
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    draw_global_card(f, report, app.planner.plan().len(), main_chunks[0]);
    draw_grid(f, app, report, main_chunks[1]);

    let help = match &app.message {
        Some(msg) => msg.clone(),
        None => "←/→ day | ↑/↓ subject | space: attend/skip | r: reset | +/-: goal | q: quit".to_string(),
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn pct_color(report: &ForecastReport, pct: f64) -> Color {
    if report.meets_threshold(pct) { Color::Green } else { Color::Red }
}

fn delta_span(delta: f64, precision: usize) -> Span<'static> {
    if delta.abs() <= 0.01 {
        return Span::raw("");
    }
    let color = if delta > 0.0 { Color::Green } else { Color::Red };
    Span::styled(
        format!(" {:+.*}%", precision, delta),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn draw_global_card(f: &mut Frame, report: &ForecastReport, planned: usize, area: Rect) {
    let g = &report.global;
    let trend = if g.delta >= 0.0 { "▲" } else { "▼" };
    let trend_color = if g.delta >= 0.0 { Color::Green } else { Color::Red };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", trend), Style::default().fg(trend_color)),
            Span::styled("Projected Global Attendance  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.2}%", g.projected_percentage),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            delta_span(g.delta, 2),
        ]),
        Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("{:.2}%", g.current_percentage)),
            Span::styled("  →  Future: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{:.2}%", g.projected_percentage), Style::default().fg(trend_color)),
            Span::styled(format!("   Goal: {}%", report.threshold), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("   Planned: {}", planned), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("After plan: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                advice_text(&report.global_projected),
                Style::default().fg(if report.global_projected.is_safe() { Color::Green } else { Color::Red }),
            ),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(" SafeSkip Forecast ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(card, area);
}

fn draw_grid<R, S>(f: &mut Frame, app: &mut App<'_, R, S>, report: &ForecastReport, area: Rect)
where
    R: SnapshotRepository,
    S: SettingsRepository,
{
    let window = app.planner.window();
    let selected = app.state.selected();

    let mut header = vec![Cell::from("Subject")];
    for day in window.days() {
        let style = if day.is_sunday {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Yellow)
        };
        header.push(Cell::from(Span::styled(day.label.clone(), style)));
    }
    header.push(Cell::from("Impact"));

    let rows: Vec<Row> = report
        .subjects
        .iter()
        .enumerate()
        .map(|(i, outlook)| {
            let row = &outlook.row;
            let mut cells = vec![Cell::from(Line::from(vec![
                Span::styled(
                    truncate(&row.name, NAME_WIDTH as usize - 6),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    if row.weight == LAB_WEIGHT { " LAB" } else { "" },
                    Style::default().fg(Color::DarkGray),
                ),
            ]))];

            for day in window.days() {
                let (mark, mut style) = match app.decision_at(day.offset, &row.subject_id) {
                    Some(Decision::Attend) => (" ✔ ", Style::default().fg(Color::Black).bg(Color::Green)),
                    Some(Decision::Skip) => (" ✖ ", Style::default().fg(Color::Black).bg(Color::Red)),
                    None => (" · ", Style::default().fg(Color::DarkGray)),
                };
                if selected == Some(i) && day.offset == app.day {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                cells.push(Cell::from(Span::styled(mark, style)));
            }

            cells.push(Cell::from(Line::from(vec![
                Span::styled(format!("{:.1}%", row.current_percentage), Style::default().fg(Color::DarkGray)),
                Span::raw(" → "),
                Span::styled(
                    format!("{:.1}%", row.projected_percentage),
                    Style::default()
                        .fg(pct_color(report, row.projected_percentage))
                        .add_modifier(Modifier::BOLD),
                ),
                delta_span(row.delta, 1),
            ])));

            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(NAME_WIDTH)];
    widths.extend(window.days().iter().map(|_| Constraint::Length(DAY_WIDTH)));
    widths.push(Constraint::Min(20));

    let table = Table::new(rows, widths)
        .header(Row::new(header))
        .block(Block::default().title(" Next 7 days ").borders(Borders::ALL).border_type(BorderType::Rounded))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
