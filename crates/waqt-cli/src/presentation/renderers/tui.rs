use anyhow::Result;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;
use waqt_runtime::{Frame, RenderSink, TickerEvent};

use crate::presentation::formatters::countdown;
use crate::presentation::presenters::build_timeline;
use crate::presentation::view_models::{TimelineMode, TimelineViewModel};

const KEY_POLL: Duration = Duration::from_millis(200);

/// Full-screen sink for the live loop. Owns the terminal and a key reader
/// thread that turns key presses into `TickerEvent`s.
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    ring_radius: f64,
    timeline: Option<TimelineViewModel>,
    error: Option<String>,
    stop: Arc<AtomicBool>,
    keys: Option<JoinHandle<()>>,
}

impl TuiRenderer {
    pub fn new(tx: Sender<TickerEvent>, ring_radius: f64) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Set up Ctrl+C handler to restore terminal
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let stop = Arc::new(AtomicBool::new(false));
        let keys = spawn_key_reader(tx, stop.clone())?;

        Ok(Self {
            terminal,
            ring_radius,
            timeline: None,
            error: None,
            stop,
            keys: Some(keys),
        })
    }

    fn redraw(&mut self) -> io::Result<()> {
        let timeline = self.timeline.as_ref();
        let error = self.error.as_deref();
        self.terminal.draw(|f| draw(f, timeline, error))?;
        Ok(())
    }
}

impl RenderSink for TuiRenderer {
    fn render(&mut self, frame: &Frame) -> waqt_runtime::Result<()> {
        self.timeline = Some(build_timeline(frame, self.ring_radius));
        self.redraw()?;
        Ok(())
    }

    fn report_error(&mut self, err: &waqt_runtime::Error) -> waqt_runtime::Result<()> {
        self.error = Some(err.to_string());
        self.redraw()?;
        Ok(())
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.keys.take() {
            let _ = handle.join();
        }
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn spawn_key_reader(tx: Sender<TickerEvent>, stop: Arc<AtomicBool>) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("waqt-keys".to_string())
        .spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                match event::poll(KEY_POLL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        log::warn!("Key polling failed: {}", e);
                        break;
                    }
                }

                let Ok(Event::Key(key)) = event::read() else {
                    continue;
                };
                if let Some(action) = map_key(key)
                    && tx.send(action).is_err()
                {
                    break;
                }
            }
        })
}

fn map_key(key: KeyEvent) -> Option<TickerEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(TickerEvent::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(TickerEvent::Quit),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(TickerEvent::Step(-1)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Some(TickerEvent::Step(1)),
        KeyCode::Char('t') | KeyCode::Home => Some(TickerEvent::Today),
        _ => None,
    }
}

fn draw(f: &mut ratatui::Frame, timeline: Option<&TimelineViewModel>, error: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    match timeline {
        Some(vm) => {
            draw_header(f, chunks[0], vm);
            draw_gauge(f, chunks[1], vm);
            draw_prayers(f, chunks[2], vm);
        }
        None => {
            let waiting = Paragraph::new("Loading timetable...")
                .block(Block::default().borders(Borders::ALL).title("waqt"));
            f.render_widget(waiting, chunks[0]);
        }
    }

    draw_footer(f, chunks[3], timeline, error);
}

fn draw_header(f: &mut ratatui::Frame, area: Rect, vm: &TimelineViewModel) {
    let (tag, tag_color) = match vm.mode {
        TimelineMode::Live => ("LIVE", Color::Green),
        TimelineMode::Inspect => ("INSPECTING", Color::Yellow),
    };

    let mut lines = vec![Line::from(Span::styled(
        vm.header.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(hijri) = &vm.hijri {
        lines.push(Line::from(Span::styled(
            format!(
                "{} {} {} AH",
                hijri.day,
                hijri.month_name.to_uppercase(),
                hijri.year
            ),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(vec![
        Span::raw(format!("{}  {}  ", vm.local_time, vm.timezone)),
        Span::styled(tag, Style::default().fg(tag_color).add_modifier(Modifier::BOLD)),
    ]));

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("waqt"));
    f.render_widget(header, area);
}

fn draw_gauge(f: &mut ratatui::Frame, area: Rect, vm: &TimelineViewModel) {
    let fraction = vm.progress.fraction;
    let percent = (fraction * 100.0).round().clamp(0.0, 100.0) as u8;

    let label = match (vm.mode, &vm.next) {
        (TimelineMode::Live, Some(next)) => format!(
            "NEXT {} {} {}",
            next.label.display_name(),
            next.clock_time,
            countdown(next.seconds_until)
        ),
        (TimelineMode::Live, None) => "NEXT unknown".to_string(),
        (TimelineMode::Inspect, _) => format!("{}%", percent),
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) })
        .label(label);
    f.render_widget(gauge, area);
}

fn draw_prayers(f: &mut ratatui::Frame, area: Rect, vm: &TimelineViewModel) {
    let items: Vec<ListItem> = vm
        .prayers
        .iter()
        .map(|row| {
            let style = if row.active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if row.seconds_from_now < 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!(
                    " {:<8} {}  {}",
                    row.label.display_name(),
                    row.clock_time,
                    row.delta
                ),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Prayers"));
    f.render_widget(list, area);
}

fn draw_footer(
    f: &mut ratatui::Frame,
    area: Rect,
    timeline: Option<&TimelineViewModel>,
    error: Option<&str>,
) {
    let mut spans = vec![Span::styled(
        "←/→ day  t today  q quit",
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(message) = error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Red)));
    } else if let Some(note) = timeline.and_then(|vm| vm.notes.first()) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(note.clone(), Style::default().fg(Color::Yellow)));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
