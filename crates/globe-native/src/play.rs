//! Interactive terminal rounds. Stdin is read on its own thread so the
//! session's timers keep firing while the player thinks.

use globe_core::{
    GameMode, GeoPoint, Outcome, Region, RoundEvent, RoundPhase, Session, SessionError, Step,
    TimerDirective, TimerToken,
};
use std::io::BufRead;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Point(GeoPoint),
    Confirm,
    Quit,
    Guess(String),
}

/// `48.8, 2.3` or `48.8 2.3` is a point (lat first); `c`/`confirm` and
/// `q`/`quit` are commands; anything else is a typed guess.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.to_ascii_lowercase().as_str() {
        "c" | "confirm" => return Some(Command::Confirm),
        "q" | "quit" | "menu" => return Some(Command::Quit),
        _ => {}
    }
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if let [lat, lon] = parts.as_slice() {
        if let (Ok(lat), Ok(lon)) = (lat.parse::<f64>(), lon.parse::<f64>()) {
            if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
                return Some(Command::Point(GeoPoint::new(lat, lon)));
            }
        }
    }
    Some(Command::Guess(line.to_string()))
}

/// Host side of the session's single timer.
#[derive(Default)]
struct HostTimer {
    pending: Option<(TimerToken, Instant)>,
}

impl HostTimer {
    fn apply(&mut self, directive: TimerDirective) {
        match directive {
            TimerDirective::Keep => {}
            TimerDirective::Cancel => self.pending = None,
            TimerDirective::Arm(req) => {
                self.pending = Some((req.token, Instant::now() + req.delay))
            }
        }
    }
}

pub struct PlayOptions {
    pub mode: GameMode,
    pub region: Region,
    pub rounds: u32,
}

fn describe(event: &RoundEvent, mode: Option<GameMode>) {
    match event {
        RoundEvent::ShuffleStarted { region, pool, .. } => {
            println!("\n{region}: picking from {pool} countries...")
        }
        RoundEvent::Decoy { name } => log::debug!("[shuffle] {name}"),
        RoundEvent::AwaitingInput { target, seconds } => match mode {
            Some(GameMode::Typing) => println!(
                "Which country is centred near {:.2}, {:.2} ({})? {seconds}s",
                target.lat, target.lon, target.region
            ),
            Some(GameMode::Precision) => println!(
                "Pinpoint {}: enter `lat, lon`, then `c` to confirm. {seconds}s",
                target.name
            ),
            _ => println!("Find {}: enter `lat, lon`. {seconds}s", target.name),
        },
        RoundEvent::Countdown { remaining, .. } => {
            if *remaining > 0 && (*remaining <= 5 || remaining % 15 == 0) {
                println!("  {remaining}s left");
            }
        }
        RoundEvent::Miss { point } => {
            println!("  {:.2}, {:.2} is open water", point.lat, point.lon)
        }
        RoundEvent::Selected { point } => {
            println!("  marker at {:.2}, {:.2}; `c` to confirm", point.lat, point.lon)
        }
        RoundEvent::NothingSelected => println!("  place a marker first"),
        RoundEvent::Incorrect { guess, score } => {
            println!("  not {guess} (streak {})", score.streak)
        }
        RoundEvent::Resolved(result) => {
            let name = &result.target.name;
            match &result.outcome {
                Outcome::Correct => println!("Correct, {name}! {:+}", result.delta),
                Outcome::WrongCountry {
                    clicked,
                    distance_km,
                } => println!(
                    "That is {clicked}, {distance_km:.0} km from {name}. {:+}",
                    result.delta
                ),
                Outcome::Located { distance_km } => {
                    println!("{distance_km:.0} km from {name}. {:+}", result.delta)
                }
                Outcome::TimedOut => println!("Time's up, it was {name}. {:+}", result.delta),
            }
            let s = &result.score;
            print!("Score {} | streak {} | best {}", s.score, s.streak, s.high_score);
            if result.new_high_score {
                print!(" (new best)");
            }
            println!();
        }
        RoundEvent::ModeSelected { .. } | RoundEvent::MenuEntered => {}
    }
}

/// Rounds finished by a batch of events.
fn resolved_count(events: &[RoundEvent]) -> u32 {
    events
        .iter()
        .filter(|e| matches!(e, RoundEvent::Resolved(_)))
        .count() as u32
}

fn render(session: &Session, host: &mut HostTimer, step: Step) -> u32 {
    let mode = session.mode();
    for event in &step.events {
        describe(event, mode);
    }
    host.apply(step.timer);
    resolved_count(&step.events)
}

fn handle(session: &mut Session, command: Command) -> Result<Step, SessionError> {
    match command {
        Command::Point(point) => session.click(point),
        Command::Confirm => session.confirm(),
        Command::Guess(text) => session.submit_guess(&text),
        Command::Quit => Ok(session.exit_to_menu()),
    }
}

pub fn run(session: &mut Session, options: PlayOptions) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel::<std::io::Result<String>>();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut host = HostTimer::default();
    let step = session.select_mode(options.mode)?;
    render(session, &mut host, step);
    let step = session.select_region(options.region)?;
    render(session, &mut host, step);

    let mut played: u32 = 0;
    loop {
        let line = match host.pending {
            Some((token, deadline)) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(line) => Some(line?),
                    Err(RecvTimeoutError::Timeout) => {
                        host.pending = None;
                        let step = session.on_timer(token);
                        played += render(session, &mut host, step);
                        None
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match rx.recv() {
                Ok(line) => Some(line?),
                Err(_) => break,
            },
        };

        if let Some(command) = line.as_deref().and_then(parse_command) {
            let quit = command == Command::Quit;
            match handle(session, command) {
                Ok(step) => played += render(session, &mut host, step),
                Err(SessionError::WrongPhase { .. }) => println!("  hold on..."),
                Err(e) => println!("  {e}"),
            }
            if quit {
                break;
            }
        }

        if played >= options.rounds {
            break;
        }
        if session.phase() == RoundPhase::Resolved {
            let step = session.next_round()?;
            render(session, &mut host, step);
        }
    }

    let s = session.score();
    println!("\nFinal score {} (best {})", s.score, s.high_score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_in_either_separator() {
        assert_eq!(parse_command("48.5, 2.25"), Some(Command::Point(GeoPoint::new(48.5, 2.25))));
        assert_eq!(parse_command(" -33 151 "), Some(Command::Point(GeoPoint::new(-33.0, 151.0))));
    }

    #[test]
    fn out_of_range_numbers_are_guesses() {
        assert_eq!(parse_command("95, 10"), Some(Command::Guess("95, 10".into())));
    }

    #[test]
    fn only_resolutions_count_as_played_rounds() {
        let events = vec![
            RoundEvent::NothingSelected,
            RoundEvent::Miss {
                point: GeoPoint::new(0.0, 0.0),
            },
            RoundEvent::MenuEntered,
        ];
        assert_eq!(resolved_count(&events), 0);

        let resolved = RoundEvent::Resolved(globe_core::RoundResult {
            outcome: Outcome::TimedOut,
            delta: -5,
            score: globe_core::ScoreState::default(),
            new_high_score: false,
            target: globe_core::CountryRecord {
                name: "Peru".into(),
                lat: -10.0,
                lon: -75.0,
                region: Region::Americas,
            },
            line: None,
        });
        let played: u32 = resolved_count(&[RoundEvent::NothingSelected, resolved]);
        assert!(played >= 1u32);
        assert_eq!(played, 1);
    }

    #[test]
    fn keywords_and_names() {
        assert_eq!(parse_command("C"), Some(Command::Confirm));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("New Zealand"), Some(Command::Guess("New Zealand".into())));
        assert_eq!(parse_command("   "), None);
    }
}
