use crate::grid::{GridSize, Loc};
use crate::random::DisplayColor;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisitRecord {
    pub x: u32,
    pub y: u32,
    pub visited: bool,
    pub color: DisplayColor,
}

impl VisitRecord {
    pub fn new(loc: Loc, color: DisplayColor) -> Self {
        Self {
            x: loc.x,
            y: loc.y,
            visited: true,
            color,
        }
    }

    pub fn loc(&self) -> Loc {
        Loc::new(self.x, self.y)
    }
}

/// Visited cells keyed by location, in visiting order.
///
/// Clones share their records, so a clone is a cheap snapshot. Inserting into a store whose
/// records are still shared copies them first, leaving every snapshot unchanged.
#[derive(Clone, Debug, Default)]
pub struct VisitedStore {
    records: Arc<VisitedRecords>,
}

#[derive(Clone, Debug, Default)]
struct VisitedRecords {
    indexes: HashMap<Loc, usize>,
    in_order: Vec<VisitRecord>,
}

impl VisitedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.in_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.in_order.is_empty()
    }

    pub fn contains(&self, loc: Loc) -> bool {
        self.records.indexes.contains_key(&loc)
    }

    pub fn get(&self, loc: Loc) -> Option<&VisitRecord> {
        self.records
            .indexes
            .get(&loc)
            .map(|&index| &self.records.in_order[index])
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &VisitRecord> + Clone {
        self.records.in_order.iter()
    }

    /// Returns false, leaving the store untouched, if the record's cell is already present.
    pub fn insert(&mut self, record: VisitRecord) -> bool {
        let loc = record.loc();
        if self.contains(loc) {
            return false;
        }
        let records = Arc::make_mut(&mut self.records);
        records.indexes.insert(loc, records.in_order.len());
        records.in_order.push(record);
        true
    }

    pub fn is_complete(&self, grid_size: GridSize) -> bool {
        self.len() == grid_size.num_cells()
    }
}
