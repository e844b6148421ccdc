//! Session phase transitions
//!
//! ```text
//! Running <--toggle--> Paused
//! Running --score >= win--> GameOver --restart--> Running
//! ```
//!
//! Every function returns whether the request changed anything; requests that
//! don't apply to the current phase are dropped.

use super::state::{GameEvent, GamePhase, GameState, Route};

fn enter(state: &mut GameState, to: GamePhase) {
    let from = state.phase;
    state.phase = to;
    log::info!("Phase {:?} -> {:?}", from, to);
    state.events.push(GameEvent::PhaseChanged { from, to });
}

/// Flip between Running and Paused
pub fn toggle_pause(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Running => enter(state, GamePhase::Paused),
        GamePhase::Paused => enter(state, GamePhase::Running),
        GamePhase::GameOver => {
            log::trace!("Ignoring pause toggle after game over");
            return false;
        }
    }
    true
}

/// Start a fresh round; only valid from GameOver
pub fn restart(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        log::trace!("Ignoring restart while {:?}", state.phase);
        return false;
    }

    state.reset();
    enter(state, GamePhase::Running);
    true
}

/// Move the gate; only while Running
pub fn set_gate(state: &mut GameState, route: Route) -> bool {
    if state.phase != GamePhase::Running {
        log::trace!("Ignoring gate change while {:?}", state.phase);
        return false;
    }
    if state.gate == route {
        return false;
    }

    state.gate = route;
    log::debug!("Gate -> {:?}", route);
    state.events.push(GameEvent::GateMoved { to: route });
    true
}

/// End the round once enough animals are sorted
pub fn check_win(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Running || state.score < state.tuning.win_score {
        return false;
    }

    enter(state, GamePhase::GameOver);
    log::info!(
        "Round over after {} ticks: score {}, missed {}",
        state.time_ticks,
        state.score,
        state.missed
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_round_trip() {
        let mut state = GameState::new(1);
        assert!(toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_gate_only_moves_while_running() {
        let mut state = GameState::new(1);
        assert!(set_gate(&mut state, Route::Diverted));
        assert_eq!(state.gate, Route::Diverted);
        // Same position is a no-op
        assert!(!set_gate(&mut state, Route::Diverted));

        toggle_pause(&mut state);
        assert!(!set_gate(&mut state, Route::Straight));
        assert_eq!(state.gate, Route::Diverted);

        state.phase = GamePhase::GameOver;
        assert!(!set_gate(&mut state, Route::Straight));
        assert_eq!(state.gate, Route::Diverted);
    }

    #[test]
    fn test_no_pause_or_restart_shortcuts() {
        let mut state = GameState::new(1);

        // Restart is only for finished rounds
        assert!(!restart(&mut state));
        toggle_pause(&mut state);
        assert!(!restart(&mut state));
        assert_eq!(state.phase, GamePhase::Paused);

        // Winning is never evaluated while paused
        state.score = 50;
        assert!(!check_win(&mut state));
        assert_eq!(state.phase, GamePhase::Paused);

        // And a finished round cannot be paused
        state.phase = GamePhase::GameOver;
        assert!(!toggle_pause(&mut state));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_win_threshold() {
        let mut state = GameState::new(1);
        state.score = 19;
        assert!(!check_win(&mut state));
        state.score = 20;
        assert!(check_win(&mut state));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::PhaseChanged {
            from: GamePhase::Running,
            to: GamePhase::GameOver
        }));
    }

    #[test]
    fn test_restart_resets_round() {
        let mut state = GameState::new(9);
        state.score = 20;
        state.missed = 4;
        state.gate = Route::Diverted;
        state.spawner.accumulator_ms = 500.0;
        check_win(&mut state);

        assert!(restart(&mut state));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.missed, 0);
        assert_eq!(state.gate, Route::Straight);
        assert_eq!(state.animals.len(), 1);
        assert_eq!(state.spawner.accumulator_ms, 0.0);
        assert_eq!(
            state.events.last(),
            Some(&GameEvent::PhaseChanged {
                from: GamePhase::GameOver,
                to: GamePhase::Running
            })
        );
    }
}
