//! Gate routing decision

use super::state::{AnimalKind, Route, SortPath};

/// Decide the path for an animal crossing the gate.
///
/// | gate     | animal | path             |
/// |----------|--------|------------------|
/// | Straight | Sheep  | Routed(Straight) |
/// | Diverted | Lamb   | Routed(Diverted) |
/// | Straight | Lamb   | Wrong            |
/// | Diverted | Sheep  | Wrong            |
pub fn resolve(kind: AnimalKind, gate: Route) -> SortPath {
    if kind.correct_route() == gate {
        SortPath::Routed(gate)
    } else {
        SortPath::Wrong
    }
}
