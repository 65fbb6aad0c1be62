use crate::grid::{Direction, GridSize, Loc};
use crate::random::Random;
use crate::visited::{VisitRecord, VisitedStore};
use log::{debug, trace};
use std::time::Duration;

pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// What one step of a [`FloodFill`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Visited(VisitRecord),
    /// The neighbor was off the grid or already visited.
    Pruned { from: Loc, direction: Direction },
    Finished,
}

/// Depth-first 4-directional flood fill, advanced one paced step at a time.
///
/// Every visited cell owns four continuations, tried east, west, north, south. Each
/// continuation is one [`step`](Self::step), and the caller waits the pacing delay before
/// every step. A newly visited cell's continuations all run before its parent's remaining
/// ones, so on an open `W x H` grid the fill reaches every cell in exactly `4 * W * H` steps.
#[derive(Debug)]
pub struct FloodFill {
    grid_size: GridSize,
    visited: VisitedStore,
    pending: Vec<Frame>,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    loc: Loc,
    next_direction: usize,
}

impl Frame {
    fn new(loc: Loc) -> Self {
        Self {
            loc,
            next_direction: 0,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.next_direction >= Direction::VISIT_ORDER.len()
    }
}

impl FloodFill {
    /// Visits `origin` right away. The traversal keeps `grid_size` for its whole run.
    pub fn start(origin: Loc, grid_size: GridSize, rand: &mut Random) -> Self {
        let mut result = Self {
            grid_size,
            visited: VisitedStore::new(),
            pending: vec![],
        };
        result.visit(origin, rand);
        result
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn visited(&self) -> &VisitedStore {
        &self.visited
    }

    pub fn snapshot(&self) -> VisitedStore {
        self.visited.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn cancel(&mut self) {
        if !self.pending.is_empty() {
            debug!(
                "Flood fill cancelled with {} of {} cells visited",
                self.visited.len(),
                self.grid_size.num_cells()
            );
        }
        self.pending.clear();
    }

    /// Marks `loc` visited with a fresh color. Does nothing if `loc` is off the grid or
    /// already visited.
    pub fn visit(&mut self, loc: Loc, rand: &mut Random) -> Option<VisitRecord> {
        if !self.grid_size.contains(loc) || self.visited.contains(loc) {
            return None;
        }
        let record = VisitRecord::new(loc, rand.next_color());
        self.visited.insert(record);
        self.pending.push(Frame::new(loc));
        debug!("Visited {} with {}", loc, record.color);
        Some(record)
    }

    /// Runs the next continuation. Call once per elapsed pacing delay.
    pub fn step(&mut self, rand: &mut Random) -> Step {
        let Some(frame) = self.pending.last_mut() else {
            return Step::Finished;
        };
        let from = frame.loc;
        let direction = Direction::VISIT_ORDER[frame.next_direction];
        frame.next_direction += 1;

        let visited = from
            .neighbor(direction)
            .and_then(|loc| self.visit(loc, rand));
        self.pop_exhausted();

        match visited {
            Some(record) => Step::Visited(record),
            None => {
                trace!("Pruned {:?} of {}", direction, from);
                Step::Pruned { from, direction }
            }
        }
    }

    fn pop_exhausted(&mut self) {
        while self.pending.last().is_some_and(Frame::is_exhausted) {
            self.pending.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(fill: &mut FloodFill, rand: &mut Random) -> usize {
        let mut steps = 0;
        while fill.step(rand) != Step::Finished {
            steps += 1;
        }
        steps
    }

    #[test]
    fn start_visits_origin_immediately() {
        let mut rand = Random::from_seed(1);
        let fill = FloodFill::start(Loc::ORIGIN, GridSize::new(10, 10), &mut rand);
        assert_eq!(fill.visited().len(), 1);
        assert!(fill.visited().contains(Loc::ORIGIN));
        assert!(!fill.is_finished());
    }

    #[test]
    fn first_step_goes_east() {
        let mut rand = Random::from_seed(1);
        let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(10, 10), &mut rand);
        match fill.step(&mut rand) {
            Step::Visited(record) => assert_eq!(record.loc(), Loc::new(1, 0)),
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn start_outside_grid_does_nothing() {
        let mut rand = Random::from_seed(1);
        let mut fill = FloodFill::start(Loc::new(10, 0), GridSize::new(10, 10), &mut rand);
        assert!(fill.visited().is_empty());
        assert!(fill.is_finished());
        assert_eq!(fill.step(&mut rand), Step::Finished);
    }

    #[test]
    fn visit_ignores_known_and_outside_cells() {
        let mut rand = Random::from_seed(1);
        let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(10, 10), &mut rand);
        assert!(fill.visit(Loc::ORIGIN, &mut rand).is_none());
        assert!(fill.visit(Loc::new(0, 10), &mut rand).is_none());
        assert!(fill.visit(Loc::new(5, 5), &mut rand).is_some());
        assert_eq!(fill.visited().len(), 2);
    }

    #[test]
    fn every_visited_cell_takes_four_steps() {
        let mut rand = Random::from_seed(3);
        let size = GridSize::new(12, 10);
        let mut fill = FloodFill::start(Loc::ORIGIN, size, &mut rand);
        assert_eq!(run_to_end(&mut fill, &mut rand), 4 * size.num_cells());
        assert!(fill.visited().is_complete(size));
    }

    #[test]
    fn cancel_drops_pending_work() {
        let mut rand = Random::from_seed(5);
        let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(10, 10), &mut rand);
        for _ in 0..7 {
            fill.step(&mut rand);
        }
        let visited = fill.visited().len();
        fill.cancel();
        assert!(fill.is_finished());
        assert_eq!(fill.step(&mut rand), Step::Finished);
        assert_eq!(fill.visited().len(), visited);
    }
}
