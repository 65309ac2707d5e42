use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use match_core::geo::within_radius;
use match_core::tiers::{BadgeLevels, RankScale, TrackBadge};
use match_core::{update, AppState, Msg, PointerEvent};
use match_engine::EngineConfig;
use match_logging::{match_info, match_warn};

use super::commands::{self, Command, HELP};
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::{map_points, render};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
/// How long to keep draining engine results after stdin closes.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(1);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let config = EngineConfig::from_env().context("reading MATCH_* configuration")?;
    let runner = EffectRunner::new(&config)?;
    let mut app = App::new(AppState::with_fetch_params(config.fetch), io::stdout());

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if line_tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("spawning stdin reader")?;

    app.dispatch(runner.load_preferences(), &runner)?;
    app.dispatch(Msg::RefreshRequested, &runner)?;
    app.print(&["Type `help` for commands.".to_string()])?;

    loop {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                if app.handle_line(&line, &runner)? == Flow::Quit {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                app.settle(&runner, SETTLE_TIMEOUT)?;
                break;
            }
        }
        app.pump(&runner)?;
    }

    app.dispatch(Msg::Detached, &runner)?;
    match_info!("Shutting down");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct App<W: Write> {
    state: AppState,
    ranks: RankScale,
    badges: BadgeLevels,
    out: W,
}

impl<W: Write> App<W> {
    fn new(state: AppState, out: W) -> Self {
        Self {
            state,
            ranks: RankScale::default(),
            badges: BadgeLevels::default(),
            out,
        }
    }

    fn dispatch(&mut self, msg: Msg, runner: &EffectRunner) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        runner.enqueue(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    /// Feeds finished engine work back through `update`.
    fn pump(&mut self, runner: &EffectRunner) -> io::Result<()> {
        for msg in runner.poll() {
            self.dispatch(msg, runner)?;
        }
        Ok(())
    }

    fn settle(&mut self, runner: &EffectRunner, quiet_for: Duration) -> io::Result<()> {
        let mut idle = Duration::ZERO;
        while idle < quiet_for {
            thread::sleep(POLL_INTERVAL);
            let messages = runner.poll();
            if messages.is_empty() {
                idle += POLL_INTERVAL;
                continue;
            }
            idle = Duration::ZERO;
            for msg in messages {
                self.dispatch(msg, runner)?;
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str, runner: &EffectRunner) -> io::Result<Flow> {
        match commands::parse(line) {
            Ok(command) => self.handle(command, runner),
            Err(commands::CommandError::Empty) => Ok(Flow::Continue),
            Err(err) => {
                match_warn!("Rejected input {:?}: {}", line, err);
                self.print(&[err.to_string()])?;
                Ok(Flow::Continue)
            }
        }
    }

    fn handle(&mut self, command: Command, runner: &EffectRunner) -> io::Result<Flow> {
        match command {
            Command::Pointer(event) => self.dispatch(Msg::Pointer(event), runner)?,
            Command::Drag(dx) => {
                for event in [
                    PointerEvent::Down { x: 0.0, y: 0.0 },
                    PointerEvent::Move { x: dx, y: 0.0 },
                    PointerEvent::Up,
                ] {
                    self.dispatch(Msg::Pointer(event), runner)?;
                }
            }
            Command::Action(action) => self.dispatch(Msg::CardAction(action), runner)?,
            Command::Refresh => self.dispatch(Msg::RefreshRequested, runner)?,
            Command::Pref(change) => self.dispatch(Msg::PreferenceChanged(change), runner)?,
            Command::PrefReset => self.dispatch(Msg::PreferencesReset, runner)?,
            Command::Rank(points) => self.print(&render::rank_lines(points, &self.ranks))?,
            Command::Badge(track, points) => {
                let badge = TrackBadge::from_points(track, points, &self.badges);
                self.print(&render::badge_lines(&badge))?;
            }
            Command::Nearby { center, radius_km } => {
                let points = map_points::activity_points();
                let nearby = within_radius(center, &points, radius_km);
                self.print(&render::nearby_lines(center, &nearby))?;
            }
            Command::View => self.render()?,
            Command::Help => {
                let help: Vec<String> = HELP.iter().map(|line| line.to_string()).collect();
                self.print(&help)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render(&mut self) -> io::Result<()> {
        let lines = render::render(&self.state.view(), Utc::now());
        self.print(&lines)
    }

    fn print(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use match_core::StackPhase;
    use match_engine::{
        mock_jobs, EngineHandle, MemoryPreferenceStore, MockMatchingClient, PreferenceStore,
    };

    use super::*;

    fn harness(jobs: usize) -> (App<Vec<u8>>, EffectRunner, Arc<MemoryPreferenceStore>) {
        match_logging::initialize_for_tests();
        let mut batch = mock_jobs(Utc::now());
        batch.truncate(jobs);
        let mock = Arc::new(MockMatchingClient::instant().with_jobs(batch));
        let engine = EngineHandle::new(mock.clone(), mock).unwrap();
        let store = Arc::new(MemoryPreferenceStore::new());
        let runner = EffectRunner::with_parts(engine, store.clone());
        (App::new(AppState::new(), Vec::new()), runner, store)
    }

    fn output(app: &App<Vec<u8>>) -> String {
        String::from_utf8_lossy(&app.out).into_owned()
    }

    #[test]
    fn swipes_through_a_batch_to_the_empty_state() {
        let (mut app, runner, _) = harness(2);
        app.dispatch(Msg::RefreshRequested, &runner).unwrap();
        app.settle(&runner, Duration::from_millis(300)).unwrap();
        assert_eq!(app.state.stack().len(), 2);

        app.handle_line("drag 150", &runner).unwrap();
        app.settle(&runner, Duration::from_millis(300)).unwrap();
        app.handle_line("skip", &runner).unwrap();
        app.settle(&runner, Duration::from_millis(300)).unwrap();

        assert_eq!(app.state.stack().phase(), StackPhase::Exhausted);
        let text = output(&app);
        assert!(text.contains("Food Bank Volunteer"));
        assert!(text.contains("Saved: You expressed interest"));
        assert!(text.contains("All caught up!"));
    }

    #[test]
    fn preference_changes_are_persisted() {
        let (mut app, runner, store) = harness(1);
        app.handle_line("pref contrast on", &runner).unwrap();
        app.handle_line("pref contrast on", &runner).unwrap();

        assert_eq!(store.save_count(), 1);
        assert!(store.load().unwrap().high_contrast);
        assert!(output(&app).contains("[high-contrast]"));
    }

    #[test]
    fn tier_and_map_queries_print_directly() {
        let (mut app, runner, _) = harness(1);
        app.handle_line("rank 0", &runner).unwrap();
        app.handle_line("badge firefighter 150", &runner).unwrap();
        app.handle_line("nearby", &runner).unwrap();
        app.handle_line("bogus", &runner).unwrap();

        let text = output(&app);
        assert!(text.contains("0 points: Bronze rank (0% through)"));
        assert!(text.contains("Firefighter badge: Silver (150 points, 33% through)"));
        assert!(text.contains("Food Bank of South Michigan"));
        assert!(text.contains("unknown command `bogus`"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let (mut app, runner, _) = harness(1);
        assert_eq!(app.handle_line("quit", &runner).unwrap(), Flow::Quit);
        assert_eq!(app.handle_line("view", &runner).unwrap(), Flow::Continue);
    }
}
