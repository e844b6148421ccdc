//! Animal movement and lifecycle
//!
//! One call to [`advance`] moves a single animal by one tick and reports what
//! happened to it. [`advance_all`] applies those reports to the session
//! counters and sweeps resolved animals out of the active list.

use super::pen::{Pen, out_of_bounds};
use super::routing;
use super::state::{Animal, GameEvent, GameState, MissCause, RemovalState, Route, SortPath};
use crate::consts::GATE_X;
use crate::tuning::Tuning;

/// What a tick did to an animal's standing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still walking (or still poofing)
    Moving,
    /// Reached the correct pen; counts toward the score
    Sorted(Route),
    /// Counts as a miss. `WrongRoute` starts the poof, `OutOfBounds` resolves
    Missed(MissCause),
    /// Poof finished; already counted when it went wrong
    Removed,
}

/// Report from a single [`advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Set on the tick the animal crossed the gate
    pub routed: Option<SortPath>,
    pub outcome: Outcome,
}

impl Advance {
    const IDLE: Self = Self {
        routed: None,
        outcome: Outcome::Moving,
    };
}

/// Move one animal by one tick.
///
/// Poofing animals only age their animation. Everyone else walks forward,
/// gets routed the first time they pass the gate, follows their route and is
/// checked against their pen and the world bounds.
pub fn advance(animal: &mut Animal, gate: Route, tuning: &Tuning, dt: f32) -> Advance {
    if animal.resolved {
        return Advance::IDLE;
    }

    if let RemovalState::Poofing { elapsed } = &mut animal.removal {
        *elapsed += dt;
        if *elapsed > tuning.poof_duration {
            animal.removal = RemovalState::None;
            animal.resolved = true;
            return Advance {
                routed: None,
                outcome: Outcome::Removed,
            };
        }
        return Advance::IDLE;
    }

    animal.pos.x += animal.speed;

    let mut routed = None;
    if animal.pos.x > GATE_X && animal.sort_path == SortPath::Unassigned {
        let path = routing::resolve(animal.kind, gate);
        animal.sort_path = path;
        routed = Some(path);

        if path == SortPath::Wrong {
            animal.removal = RemovalState::Poofing { elapsed: 0.0 };
            return Advance {
                routed,
                outcome: Outcome::Missed(MissCause::WrongRoute),
            };
        }
    }

    if let SortPath::Routed(route) = animal.sort_path {
        match route {
            Route::Straight => animal.pos.x += animal.speed * tuning.straight_boost,
            Route::Diverted => {
                animal.pos.y -= tuning.divert_rise;
                animal.pos.x += tuning.divert_drift;
            }
        }

        if Pen::for_route(route).admits(route, animal.pos) {
            animal.resolved = true;
            return Advance {
                routed,
                outcome: Outcome::Sorted(route),
            };
        }
    }

    // Fallback for anything that walks off the map unsorted
    if out_of_bounds(animal.pos) {
        animal.resolved = true;
        return Advance {
            routed,
            outcome: Outcome::Missed(MissCause::OutOfBounds),
        };
    }

    Advance {
        routed,
        outcome: Outcome::Moving,
    }
}

/// Advance every animal, update the counters, then drop resolved animals
pub fn advance_all(state: &mut GameState, dt: f32) {
    let gate = state.gate;

    for animal in &mut state.animals {
        let report = advance(animal, gate, &state.tuning, dt);

        if let Some(path) = report.routed {
            log::debug!("{:?} #{} crossed the gate: {:?}", animal.kind, animal.id, path);
            state.events.push(GameEvent::AnimalRouted { id: animal.id, path });
        }

        match report.outcome {
            Outcome::Moving | Outcome::Removed => {}
            Outcome::Sorted(route) => {
                state.score += 1;
                log::debug!("{:?} #{} sorted into {:?} pen", animal.kind, animal.id, route);
                state.events.push(GameEvent::AnimalSorted { id: animal.id, route });
            }
            Outcome::Missed(cause) => {
                state.missed += 1;
                log::debug!("{:?} #{} missed: {:?}", animal.kind, animal.id, cause);
                state.events.push(GameEvent::AnimalMissed { id: animal.id, cause });
            }
        }
    }

    let events = &mut state.events;
    state.animals.retain(|animal| {
        if animal.resolved {
            events.push(GameEvent::AnimalRemoved { id: animal.id });
        }
        !animal.resolved
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::state::AnimalKind;
    use glam::Vec2;

    fn animal(kind: AnimalKind, x: f32, speed: f32) -> Animal {
        Animal::new(1, kind, Vec2::new(x, 240.0), speed)
    }

    /// Advance until something other than plain movement happens
    fn run_until_event(animal: &mut Animal, gate: Route, max_ticks: u32) -> (u32, Advance) {
        let tuning = Tuning::default();
        for i in 1..=max_ticks {
            let report = advance(animal, gate, &tuning, SIM_DT);
            if report != Advance::IDLE {
                return (i, report);
            }
        }
        panic!("nothing happened in {max_ticks} ticks");
    }

    #[test]
    fn test_walks_forward_before_gate() {
        let mut a = animal(AnimalKind::Sheep, 0.0, 5.0);
        let report = advance(&mut a, Route::Straight, &Tuning::default(), SIM_DT);
        assert_eq!(report, Advance::IDLE);
        assert_eq!(a.pos, Vec2::new(5.0, 240.0));
        assert_eq!(a.sort_path(), SortPath::Unassigned);
    }

    #[test]
    fn test_sheep_straight_gets_sorted() {
        let mut a = animal(AnimalKind::Sheep, 390.0, 5.0);

        let (_, crossing) = run_until_event(&mut a, Route::Straight, 10);
        assert_eq!(crossing.routed, Some(SortPath::Routed(Route::Straight)));
        assert_eq!(crossing.outcome, Outcome::Moving);

        let (_, arrival) = run_until_event(&mut a, Route::Straight, 100);
        assert_eq!(arrival.outcome, Outcome::Sorted(Route::Straight));
        assert!(a.resolved);
        assert!(a.pos.x > 710.0);
    }

    #[test]
    fn test_lamb_diverted_gets_sorted() {
        let mut a = animal(AnimalKind::Lamb, 398.0, 3.0);

        let (_, crossing) = run_until_event(&mut a, Route::Diverted, 10);
        assert_eq!(crossing.routed, Some(SortPath::Routed(Route::Diverted)));

        let (_, arrival) = run_until_event(&mut a, Route::Diverted, 200);
        assert_eq!(arrival.outcome, Outcome::Sorted(Route::Diverted));
        assert!(a.pos.y < 60.0 && a.pos.y > 0.0);
    }

    #[test]
    fn test_wrong_route_poofs_in_place() {
        let mut a = animal(AnimalKind::Lamb, 399.0, 2.0);
        let tuning = Tuning::default();

        let report = advance(&mut a, Route::Straight, &tuning, SIM_DT);
        assert_eq!(report.routed, Some(SortPath::Wrong));
        assert_eq!(report.outcome, Outcome::Missed(MissCause::WrongRoute));
        assert!(a.removal.is_poofing());
        assert!(!a.resolved);

        let frozen_at = a.pos;
        let mut ticks = 0;
        while !a.resolved {
            let report = advance(&mut a, Route::Diverted, &tuning, SIM_DT);
            assert_eq!(a.pos, frozen_at);
            assert_eq!(a.sort_path(), SortPath::Wrong);
            assert_ne!(report.outcome, Outcome::Missed(MissCause::WrongRoute));
            ticks += 1;
            assert!(ticks < 100);
        }
        // 0.4 s at 60 Hz, strictly exceeded
        assert!((24..=26).contains(&ticks), "poof took {ticks} ticks");
        assert_eq!(a.removal, RemovalState::None);
    }

    #[test]
    fn test_path_never_reassigned() {
        let mut a = animal(AnimalKind::Sheep, 399.0, 4.0);
        let tuning = Tuning::default();

        advance(&mut a, Route::Straight, &tuning, SIM_DT);
        assert_eq!(a.sort_path(), SortPath::Routed(Route::Straight));

        // Flipping the gate afterwards changes nothing
        let report = advance(&mut a, Route::Diverted, &tuning, SIM_DT);
        assert_eq!(report.routed, None);
        assert_eq!(a.sort_path(), SortPath::Routed(Route::Straight));
    }

    #[test]
    fn test_escape_counts_as_miss() {
        let mut a = animal(AnimalKind::Lamb, 840.0, 3.0);
        a.sort_path = SortPath::Routed(Route::Diverted);

        let (_, report) = run_until_event(&mut a, Route::Diverted, 10);
        assert_eq!(report.outcome, Outcome::Missed(MissCause::OutOfBounds));
        assert!(a.resolved);
    }

    #[test]
    fn test_diverted_overshoot_above_pen_is_miss() {
        // Past the pen's right inset, so it climbs straight out of the top
        let mut a = Animal::new(1, AnimalKind::Lamb, Vec2::new(790.0, 3.0), 3.0);
        a.sort_path = SortPath::Routed(Route::Diverted);

        let report = advance(&mut a, Route::Diverted, &Tuning::default(), SIM_DT);
        assert!(a.pos.y < 0.0);
        assert_eq!(report.outcome, Outcome::Missed(MissCause::OutOfBounds));
        assert!(a.resolved);
    }

    #[test]
    fn test_advance_all_counts_and_sweeps() {
        let mut state = GameState::new(3);
        state.animals.clear();
        state.events.clear();

        let sheep_id = state.next_entity_id();
        state
            .animals
            .push(Animal::new(sheep_id, AnimalKind::Sheep, Vec2::new(705.0, 240.0), 5.0));
        let lamb_id = state.next_entity_id();
        state
            .animals
            .push(Animal::new(lamb_id, AnimalKind::Lamb, Vec2::new(399.0, 240.0), 2.0));
        let walker_id = state.next_entity_id();
        state
            .animals
            .push(Animal::new(walker_id, AnimalKind::Lamb, Vec2::new(10.0, 240.0), 2.0));
        // Sheep is already past the gate on the straight route
        state.animals[0].sort_path = SortPath::Routed(Route::Straight);

        advance_all(&mut state, SIM_DT);

        assert_eq!(state.score, 1);
        assert_eq!(state.missed, 1);
        let ids: Vec<u32> = state.animals.iter().map(|a| a.id).collect();
        // Sorted sheep removed; poofing lamb and walker stay, in spawn order
        assert_eq!(ids, vec![lamb_id, walker_id]);
        assert!(state.events.contains(&GameEvent::AnimalSorted {
            id: sheep_id,
            route: Route::Straight
        }));
        assert!(state.events.contains(&GameEvent::AnimalRemoved { id: sheep_id }));
        assert!(state.events.contains(&GameEvent::AnimalMissed {
            id: lamb_id,
            cause: MissCause::WrongRoute
        }));
    }
}
