use globe_core::*;
use std::time::Duration;

fn ticks_until_done(mut pacing: ShufflePacing) -> (usize, Vec<Duration>) {
    let mut delays = vec![pacing.first_delay()];
    let mut ticks = 0;
    loop {
        ticks += 1;
        match pacing.tick() {
            Some(d) => delays.push(d),
            None => return (ticks, delays),
        }
        assert!(ticks < 1000, "shuffle never ends");
    }
}

#[test]
fn typing_shuffle_runs_a_fixed_window() {
    let pacing = ShufflePacing::for_mode(GameMode::Typing, &ShuffleParams::default());
    let (ticks, delays) = ticks_until_done(pacing);
    // 60 ms steps until 1.5 s has elapsed
    assert_eq!(ticks, 25);
    assert!(delays.iter().all(|d| *d == Duration::from_millis(60)));
}

#[test]
fn click_shuffle_slows_until_ceiling() {
    for mode in [GameMode::Click, GameMode::Precision] {
        let pacing = ShufflePacing::for_mode(mode, &ShuffleParams::default());
        let (ticks, delays) = ticks_until_done(pacing);
        // 50 ms * 1.15^20 is the first interval above 800 ms
        assert_eq!(ticks, 20, "{mode}");
        assert_eq!(delays[0], Duration::from_millis(50));
        assert!(delays.windows(2).all(|w| w[1] > w[0]));
        assert!(delays.iter().all(|d| *d <= Duration::from_millis(800)));
    }
}

#[test]
fn growth_below_one_still_terminates() {
    let params = ShuffleParams {
        growth: 0.5,
        ..ShuffleParams::default()
    };
    let (ticks, _) = ticks_until_done(ShufflePacing::for_mode(GameMode::Click, &params));
    assert!(ticks < 1000);
}

#[test]
fn countdown_expires_after_its_length() {
    let mut c = Countdown::new(3);
    assert_eq!(c.fraction(), 1.0);
    assert!(!c.tick());
    assert!(!c.tick());
    assert!(c.tick());
    assert_eq!(c.remaining(), 0);
    assert_eq!(c.fraction(), 0.0);
    // stays expired
    assert!(c.tick());
}

#[test]
fn timer_slot_only_honours_latest_token() {
    let mut slot = TimerSlot::default();
    let first = slot.arm(Duration::from_millis(10));
    let second = slot.arm(Duration::from_millis(10));
    assert_ne!(first.token, second.token);
    assert!(!slot.fire(first.token));
    assert!(slot.fire(second.token));
    // consumed
    assert!(!slot.fire(second.token));
}

#[test]
fn cancelled_token_is_dead() {
    let mut slot = TimerSlot::default();
    let req = slot.arm(Duration::from_secs(1));
    assert!(slot.cancel());
    assert!(!slot.cancel());
    assert!(!slot.fire(req.token));
    assert_eq!(slot.armed(), None);
}

#[test]
fn params_fill_missing_fields_from_defaults() {
    let params = QuizParams::from_json(r#"{ "round_seconds": 30, "shuffle": { "growth": 1.3 } }"#)
        .unwrap();
    assert_eq!(params.round_seconds, 30);
    assert_eq!(params.wrong_click_penalty, -10);
    assert_eq!(params.shuffle.growth, 1.3);
    assert_eq!(params.shuffle.ceiling_ms, 800);
    assert_eq!(params.resolver, ResolverKind::LinearScan);
}
