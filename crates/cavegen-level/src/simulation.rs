//! Cellular-automaton smoothing for levels.
//!
//! One step applies a birth/death rule to every cell simultaneously: a wall
//! survives while it has fewer than `death_limit` wall neighbors, and a free
//! cell turns into a wall once it has at least `birth_limit` wall neighbors.
//! Crowding therefore grows walls and isolation erodes them, which melts
//! randomly seeded walls into connected cave formations.

use crate::level::Level;
use cavegen_core::Cell;
use tracing::debug;

impl Level {
    /// Apply one simultaneous automaton transition to the whole level.
    ///
    /// New states are computed into a scratch level from the old states, so
    /// updates within a step never observe each other, then swapped in
    /// wholesale.
    pub fn simulation_step(&mut self, birth_limit: u32, death_limit: u32) {
        let mut next = self.clone();
        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.count_alive_neighbors(x, y);
                let cell = match self.get(x, y) {
                    Cell::Wall => {
                        if neighbors < death_limit {
                            Cell::Wall
                        } else {
                            Cell::Free
                        }
                    }
                    Cell::Free => {
                        if neighbors < birth_limit {
                            Cell::Free
                        } else {
                            Cell::Wall
                        }
                    }
                };
                next.set(x, y, cell);
            }
        }
        *self = next;
    }

    /// Run `steps` simulation steps in sequence, each feeding the next.
    ///
    /// Zero steps leaves the level untouched.
    pub fn run_simulation(&mut self, steps: u32, birth_limit: u32, death_limit: u32) {
        for step in 0..steps {
            self.simulation_step(birth_limit, death_limit);
            debug!(
                step = step + 1,
                steps,
                walls = self.wall_count(),
                "simulation step complete"
            );
        }
    }
}
