use super::{HandlerContext, parse_date};
use crate::args::OutputFormat;
use crate::presentation::presenters::build_timeline;
use crate::presentation::view_models::DisplayOptions;
use crate::presentation::views::TimelineView;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::mpsc::Sender;
use waqt_runtime::{Frame, LiveTicker, RenderSink, SystemClock, TickerEvent, drive};

/// Line-oriented live mode: prints a frame whenever its text changes and
/// reads navigation commands from stdin
pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let mut controller = ctx.controller(SystemClock);
    let ticker = LiveTicker::start(ctx.config.tick_interval())?;

    let quit = ticker.sender();
    ctrlc::set_handler(move || {
        let _ = quit.send(TickerEvent::Quit);
    })?;
    spawn_stdin_reader(ticker.sender())?;

    let mut sink = ConsoleSink::new(
        ctx.format,
        ctx.options,
        ctx.config.ring_radius,
        std::io::stdout(),
        std::io::stderr(),
    );
    drive(&mut controller, ticker.receiver(), &mut sink)?;
    Ok(())
}

/// Writes frames to `out` and errors to `err`, skipping any text identical
/// to the previous write
struct ConsoleSink<O, E> {
    format: OutputFormat,
    options: DisplayOptions,
    ring_radius: f64,
    out: O,
    err: E,
    last: Option<String>,
}

impl<O: Write, E: Write> ConsoleSink<O, E> {
    fn new(format: OutputFormat, options: DisplayOptions, ring_radius: f64, out: O, err: E) -> Self {
        Self {
            format,
            options,
            ring_radius,
            out,
            err,
            last: None,
        }
    }

    fn fresh(&mut self, text: String) -> Option<String> {
        if self.last.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.last = Some(text.clone());
        Some(text)
    }

    fn format_frame(&self, frame: &Frame) -> waqt_runtime::Result<String> {
        let vm = build_timeline(frame, self.ring_radius);
        match self.format {
            OutputFormat::Json => {
                let line = serde_json::to_string(&vm)
                    .map_err(|e| waqt_runtime::Error::Io(e.into()))?;
                Ok(format!("{}\n", line))
            }
            OutputFormat::Plain => Ok(format!("{}\n", TimelineView::new(&vm, self.options))),
        }
    }
}

impl<O: Write, E: Write> RenderSink for ConsoleSink<O, E> {
    fn render(&mut self, frame: &Frame) -> waqt_runtime::Result<()> {
        let text = self.format_frame(frame)?;
        // Ticks within the same minute produce identical text
        if let Some(text) = self.fresh(text) {
            self.out.write_all(text.as_bytes())?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn report_error(&mut self, err: &waqt_runtime::Error) -> waqt_runtime::Result<()> {
        // A missing day fails the same way on every tick
        if let Some(text) = self.fresh(format!("Error: {}\n", err)) {
            self.err.write_all(text.as_bytes())?;
        }
        Ok(())
    }
}

fn spawn_stdin_reader(tx: Sender<TickerEvent>) -> Result<()> {
    std::thread::Builder::new()
        .name("waqt-stdin".to_string())
        .spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                match parse_input(&line) {
                    Ok(Some(event)) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(message) => eprintln!("{}", message),
                }
            }
            log::debug!("stdin closed, input reader stopped");
        })?;
    Ok(())
}

/// One line of console input
fn parse_input(line: &str) -> Result<Option<TickerEvent>, String> {
    let input = line.trim();
    let event = match input {
        "" => return Ok(None),
        "q" | "quit" | "exit" => TickerEvent::Quit,
        "t" | "today" | "live" => TickerEvent::Today,
        "+" | "next" => TickerEvent::Step(1),
        "-" | "prev" => TickerEvent::Step(-1),
        _ if input.starts_with('+') || input.starts_with('-') => {
            let days: i64 = input
                .parse()
                .map_err(|_| format!("Cannot step by '{}'", input))?;
            TickerEvent::Step(days)
        }
        _ => match parse_date(input) {
            Ok(date) => TickerEvent::Select(date),
            Err(_) => {
                return Err(format!(
                    "Unknown input '{}': try YYYY-MM-DD, +N, -N, today or quit",
                    input
                ));
            }
        },
    };
    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("  "), Ok(None));
        assert_eq!(parse_input("q"), Ok(Some(TickerEvent::Quit)));
        assert_eq!(parse_input("today"), Ok(Some(TickerEvent::Today)));
        assert_eq!(parse_input("+"), Ok(Some(TickerEvent::Step(1))));
        assert_eq!(parse_input("-7"), Ok(Some(TickerEvent::Step(-7))));
        assert_eq!(
            parse_input("2024-06-02"),
            Ok(Some(TickerEvent::Select(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap())))
        );
        assert_eq!(parse_input("+x"), Err("Cannot step by '+x'".to_string()));
        assert!(parse_input("tomorrow").is_err());
    }

    #[test]
    fn test_repeated_error_written_once() {
        let mut sink = ConsoleSink::new(
            OutputFormat::Plain,
            DisplayOptions::plain(),
            100.0,
            Vec::new(),
            Vec::new(),
        );
        let from = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let err = waqt_runtime::Error::DateOutOfRange { from, days: i64::MAX };

        for _ in 0..5 {
            sink.report_error(&err).unwrap();
        }

        let written = String::from_utf8(sink.err).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.starts_with("Error: "));
        assert!(sink.out.is_empty());
    }
}
