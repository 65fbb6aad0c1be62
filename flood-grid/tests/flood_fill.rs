use flood_grid::{
    Direction, FloodFill, GridSize, Loc, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION, Random, Step,
    VisitRecord, cell_rect,
};
use std::collections::HashSet;

fn run_to_end(fill: &mut FloodFill, rand: &mut Random) -> Vec<Step> {
    let mut steps = vec![];
    loop {
        let step = fill.step(rand);
        if step == Step::Finished {
            return steps;
        }
        steps.push(step);
    }
}

fn visiting_order(fill: &FloodFill) -> Vec<(u32, u32)> {
    fill.visited().iter().map(|record| (record.x, record.y)).collect()
}

#[test]
fn two_by_two_is_visited_depth_first() {
    // The grid itself never goes below 10x10 from the controls, but the traversal has no
    // such limit and a tiny grid makes the order easy to check by hand.
    let mut rand = Random::from_seed(11);
    let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(2, 2), &mut rand);
    run_to_end(&mut fill, &mut rand);
    assert_eq!(visiting_order(&fill), vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
}

#[test]
fn three_by_two_snakes_back_along_the_bottom_row() {
    let mut rand = Random::from_seed(11);
    let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(3, 2), &mut rand);
    run_to_end(&mut fill, &mut rand);
    assert_eq!(
        visiting_order(&fill),
        vec![(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]
    );
}

#[test]
fn full_grid_is_covered_exactly_once() {
    for (width, height) in [(10, 10), (MAX_GRID_DIMENSION, MIN_GRID_DIMENSION), (37, 64)] {
        let size = GridSize::new(width, height);
        let mut rand = Random::from_seed(width as u64 * 1000 + height as u64);
        let mut fill = FloodFill::start(Loc::ORIGIN, size, &mut rand);
        run_to_end(&mut fill, &mut rand);

        let locs: HashSet<Loc> = fill.visited().iter().map(VisitRecord::loc).collect();
        assert_eq!(fill.visited().len(), size.num_cells());
        assert_eq!(locs.len(), size.num_cells());
        assert!(size.locs().all(|loc| locs.contains(&loc)));
        assert!(fill.visited().iter().all(|record| record.visited));
    }
}

#[test]
fn largest_grid_finishes_without_deep_recursion() {
    let size = GridSize::new(MAX_GRID_DIMENSION, MAX_GRID_DIMENSION);
    let mut rand = Random::from_seed(99);
    let mut fill = FloodFill::start(Loc::ORIGIN, size, &mut rand);
    let steps = run_to_end(&mut fill, &mut rand);
    assert_eq!(steps.len(), 4 * size.num_cells());
    assert!(fill.visited().is_complete(size));
}

#[test]
fn origin_prunes_west_and_north() {
    let mut rand = Random::from_seed(2);
    let size = GridSize::new(10, 10);
    let mut fill = FloodFill::start(Loc::ORIGIN, size, &mut rand);
    let steps = run_to_end(&mut fill, &mut rand);

    let origin_steps: Vec<Step> = steps
        .into_iter()
        .filter(|step| matches!(step, Step::Pruned { from, .. } if *from == Loc::ORIGIN))
        .collect();
    assert!(origin_steps.contains(&Step::Pruned {
        from: Loc::ORIGIN,
        direction: Direction::West,
    }));
    assert!(origin_steps.contains(&Step::Pruned {
        from: Loc::ORIGIN,
        direction: Direction::North,
    }));
    assert!(fill.visited().iter().all(|record| size.contains(record.loc())));
}

#[test]
fn no_cell_is_inserted_twice() {
    let mut rand = Random::from_seed(8);
    let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(15, 11), &mut rand);
    let mut seen = HashSet::from([Loc::ORIGIN]);
    for step in run_to_end(&mut fill, &mut rand) {
        if let Step::Visited(record) = step {
            assert!(seen.insert(record.loc()), "{} visited twice", record.loc());
        }
    }
    assert_eq!(seen.len(), 15 * 11);
}

#[test]
fn same_seed_gives_same_colors() {
    let size = GridSize::new(10, 10);
    let colors = |seed| {
        let mut rand = Random::from_seed(seed);
        let mut fill = FloodFill::start(Loc::ORIGIN, size, &mut rand);
        run_to_end(&mut fill, &mut rand);
        fill.visited()
            .iter()
            .map(|record| record.color)
            .collect::<Vec<_>>()
    };
    assert_eq!(colors(21), colors(21));
}

#[test]
fn restart_rebuilds_with_fresh_colors() {
    let size = GridSize::new(10, 10);
    let mut rand = Random::from_seed(4);

    let mut first = FloodFill::start(Loc::ORIGIN, size, &mut rand);
    run_to_end(&mut first, &mut rand);
    let first_store = first.snapshot();

    let mut second = FloodFill::start(Loc::ORIGIN, size, &mut rand);
    assert_eq!(second.visited().len(), 1);
    run_to_end(&mut second, &mut rand);

    assert!(second.visited().is_complete(size));
    assert_eq!(first_store.len(), size.num_cells());
    let differing = size
        .locs()
        .filter(|&loc| first_store.get(loc).map(|r| r.color) != second.visited().get(loc).map(|r| r.color))
        .count();
    assert!(differing > 0);
}

#[test]
fn snapshots_stay_frozen_while_the_fill_continues() {
    let mut rand = Random::from_seed(6);
    let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(10, 10), &mut rand);
    let mut snapshots = vec![fill.snapshot()];
    while fill.step(&mut rand) != Step::Finished {
        snapshots.push(fill.snapshot());
    }
    for pair in snapshots.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        assert!(later.len() == earlier.len() || later.len() == earlier.len() + 1);
        assert!(earlier.iter().zip(later.iter()).all(|(a, b)| a == b));
    }
    assert_eq!(snapshots[0].len(), 1);
}

#[test]
fn record_rect_follows_current_dimensions() {
    let mut rand = Random::from_seed(10);
    let mut fill = FloodFill::start(Loc::ORIGIN, GridSize::new(10, 10), &mut rand);
    run_to_end(&mut fill, &mut rand);
    let record = fill.visited().get(Loc::new(4, 7)).copied().unwrap();

    let rect = cell_rect(record.loc(), 900.0, 600.0, GridSize::new(10, 10));
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (360.0, 420.0, 90.0, 60.0));

    let rect = cell_rect(record.loc(), 900.0, 600.0, GridSize::new(20, 30));
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (180.0, 140.0, 45.0, 20.0));
}
