//! Game state and core simulation types
//!
//! `GameState` is the single owned session aggregate; nothing in the
//! simulation lives at process scope.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::{SpawnScheduler, spawn_animal};
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Animals walk, spawn and get sorted
    Running,
    /// Simulation frozen, frames keep coming
    Paused,
    /// Win threshold reached, frames stop until restart
    GameOver,
}

/// Animal type, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    /// Juvenile, belongs in the diverted pen
    Lamb,
    /// Adult, belongs in the straight pen
    Sheep,
}

impl AnimalKind {
    /// The route that sorts this animal correctly
    pub fn correct_route(self) -> Route {
        match self {
            AnimalKind::Sheep => Route::Straight,
            AnimalKind::Lamb => Route::Diverted,
        }
    }
}

/// Gate positions, and the two paths past the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Route {
    /// Straight through to the sheep pen
    #[default]
    Straight,
    /// Up the side branch to the lamb pen
    Diverted,
}

impl Route {
    /// Map an external gate index (0 = straight, 1 = diverted)
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Route::Straight),
            1 => Some(Route::Diverted),
            _ => None,
        }
    }
}

/// Path decision made at the gate, assigned at most once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortPath {
    /// Has not crossed the gate yet
    #[default]
    Unassigned,
    /// Following the correct route
    Routed(Route),
    /// Gate was set for the other animal type
    Wrong,
}

/// Removal animation state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RemovalState {
    #[default]
    None,
    /// Frozen in place, fading out
    Poofing { elapsed: f32 },
}

impl RemovalState {
    /// Animation progress in `0..=1` for the renderer (0 when not poofing)
    pub fn progress(&self, duration: f32) -> f32 {
        match *self {
            RemovalState::None => 0.0,
            RemovalState::Poofing { elapsed } => (elapsed / duration).clamp(0.0, 1.0),
        }
    }

    pub fn is_poofing(&self) -> bool {
        matches!(self, RemovalState::Poofing { .. })
    }
}

/// An animal walking the path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: u32,
    pub pos: Vec2,
    pub kind: AnimalKind,
    /// World units per tick
    pub speed: f32,
    pub(crate) sort_path: SortPath,
    pub removal: RemovalState,
    /// Scored or missed; swept at the end of the tick
    pub resolved: bool,
}

impl Animal {
    pub fn new(id: u32, kind: AnimalKind, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos,
            kind,
            speed,
            sort_path: SortPath::Unassigned,
            removal: RemovalState::None,
            resolved: false,
        }
    }

    pub fn sort_path(&self) -> SortPath {
        self.sort_path
    }
}

/// Why an animal counted as missed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissCause {
    /// Crossed the gate while it pointed at the other pen
    WrongRoute,
    /// Left the world without reaching a pen
    OutOfBounds,
}

/// Things that happened during a frame, for the renderer and tests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    AnimalSpawned { id: u32, kind: AnimalKind },
    AnimalRouted { id: u32, path: SortPath },
    AnimalSorted { id: u32, route: Route },
    AnimalMissed { id: u32, cause: MissCause },
    AnimalRemoved { id: u32 },
    GateMoved { to: Route },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete session state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    /// Balance values for this session
    pub tuning: Tuning,
    /// Correctly sorted animals
    pub score: u32,
    /// Mis-routed or escaped animals
    pub missed: u32,
    /// Current gate position
    pub gate: Route,
    /// Current phase
    pub phase: GamePhase,
    /// Active animals, in spawn order
    pub animals: Vec<Animal>,
    /// Spawn timer
    pub spawner: SpawnScheduler,
    /// Simulation tick counter (this session)
    pub time_ticks: u64,
    /// Events since the last frame, drained by the frame driver
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, Tuning::default())
    }

    /// Create a new session with custom tuning, rejecting values the
    /// simulation can't run with
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(seed, tuning))
    }

    /// One animal is already on the path
    fn build(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            score: 0,
            missed: 0,
            gate: Route::default(),
            phase: GamePhase::Running,
            animals: Vec::new(),
            spawner: SpawnScheduler::default(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        state.spawn_animal();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a freshly created animal to the path
    pub fn spawn_animal(&mut self) {
        let id = self.next_entity_id();
        let animal = spawn_animal(&mut self.rng, &self.tuning, id);
        log::debug!(
            "Spawned {:?} #{} at y={:.1} speed={:.2}",
            animal.kind,
            id,
            animal.pos.y,
            animal.speed
        );
        self.events.push(GameEvent::AnimalSpawned { id, kind: animal.kind });
        self.animals.push(animal);
    }

    /// Reset counters, animals, gate and timers for a new round. The phase is
    /// left to the caller.
    ///
    /// The RNG keeps running so consecutive rounds differ.
    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.missed = 0;
        self.gate = Route::default();
        self.animals.clear();
        self.spawner.reset();
        self.time_ticks = 0;
        self.spawn_animal();
    }

    /// Sorted plus missed; never decreases within a round
    pub fn tally(&self) -> u32 {
        self.score + self.missed
    }
}
