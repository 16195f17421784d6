use crate::domain::entities::{Aabb, EntityId, Object, Unit};
use crate::domain::grid::WorldGrid;
use crate::domain::state::WorldContents;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementReport {
    pub moved: usize,
    pub stopped: usize,
}

/// Advances every moving unit by one step.
///
/// Units are visited once each, in id order. A unit that moves earlier in the pass is seen at
/// its new position by units visited after it. Collision checks run terrain, then objects,
/// then units, and the first hit stops the unit in place.
pub fn tick_units(contents: &mut WorldContents, grid: &WorldGrid) -> MovementReport {
    let mut report = MovementReport::default();
    let ids: Vec<EntityId> = contents.units.keys().copied().collect();

    for id in ids {
        let Some(unit) = contents.units.get(&id) else {
            continue;
        };
        if !unit.is_moving() {
            continue;
        }

        let (next_x, next_y) = unit.next_position();
        let next = Aabb::square(next_x, next_y, unit.size);
        let blocked = tile_blocked(grid, &next)
            || object_blocked(contents.objects.values(), &next)
            || unit_blocked(contents.units.values(), &next, id);

        let Some(unit) = contents.units.get_mut(&id) else {
            continue;
        };
        if blocked {
            unit.stop();
            report.stopped += 1;
        } else {
            unit.x = next_x;
            unit.y = next_y;
            report.moved += 1;
        }
    }

    report
}

/// True if any cell the box touches is impassable or off the grid.
///
/// The covered range is inclusive on both ends, so a box whose edge lies exactly on a cell
/// boundary also tests the cell beyond it.
pub fn tile_blocked(grid: &WorldGrid, bounds: &Aabb) -> bool {
    if ![bounds.left, bounds.bottom, bounds.right, bounds.top]
        .iter()
        .all(|v| v.is_finite())
    {
        return true;
    }

    let (min_x, max_x) = (bounds.left.floor() as i64, bounds.right.floor() as i64);
    let (min_y, max_y) = (bounds.bottom.floor() as i64, bounds.top.floor() as i64);

    for ty in min_y..=max_y {
        for tx in min_x..=max_x {
            if !grid.tile_at(tx as f64, ty as f64).is_passable() {
                return true;
            }
        }
    }
    false
}

pub fn object_blocked<'a>(objects: impl IntoIterator<Item = &'a Object>, bounds: &Aabb) -> bool {
    objects.into_iter().any(|o| bounds.overlaps(&o.bounds()))
}

/// Overlap against every unit except `self_id`.
pub fn unit_blocked<'a>(
    units: impl IntoIterator<Item = &'a Unit>,
    bounds: &Aabb,
    self_id: EntityId,
) -> bool {
    units
        .into_iter()
        .filter(|u| u.id != self_id)
        .any(|u| bounds.overlaps(&u.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::properties::{ObjectKind, TileKind, UnitKind};

    fn land(width: usize, height: usize) -> WorldGrid {
        WorldGrid::filled(width, height, TileKind::Land).expect("grid")
    }

    fn id(n: u8) -> EntityId {
        EntityId::from_random_bytes([n; 16])
    }

    fn unit(id: EntityId, x: f64, y: f64, size: f64, facing: f64, velocity: f64) -> Unit {
        Unit::new(
            Object::new(id, x, y, size, ObjectKind::Tree),
            UnitKind::Worker,
            1,
        )
        .with_motion(facing, velocity)
    }

    fn contents(units: Vec<Unit>, objects: Vec<Object>) -> WorldContents {
        WorldContents {
            objects: objects.into_iter().map(|o| (o.id, o)).collect(),
            units: units.into_iter().map(|u| (u.id, u)).collect(),
            tick: 0,
        }
    }

    #[test]
    fn unblocked_unit_advances_along_facing() {
        let grid = land(4, 4);
        let u = id(1);
        let mut world = contents(vec![unit(u, 1.0, 1.0, 0.5, 0.0, 0.01)], Vec::new());

        let report = tick_units(&mut world, &grid);

        let moved = &world.units[&u];
        assert!((moved.x - 1.01).abs() < 1e-12);
        assert_eq!(moved.y, 1.0);
        assert_eq!(moved.velocity, 0.01);
        assert_eq!(report, MovementReport { moved: 1, stopped: 0 });
    }

    #[test]
    fn footprint_reaching_rock_stops_unit() {
        let mut grid = land(4, 4);
        grid.set(2, 1, TileKind::Rock);
        let u = id(1);
        let mut world = contents(vec![unit(u, 1.6, 1.0, 0.5, 0.0, 0.5)], Vec::new());

        tick_units(&mut world, &grid);

        let stopped = &world.units[&u];
        assert_eq!(stopped.velocity, 0.0);
        assert_eq!((stopped.x, stopped.y), (1.6, 1.0));
        assert_eq!(stopped.facing, 0.0);
    }

    #[test]
    fn moving_into_another_unit_stops_only_the_mover() {
        let grid = land(4, 4);
        let (a, b) = (id(1), id(2));
        let mut world = contents(
            vec![
                unit(a, 1.0, 1.0, 0.5, 0.0, 0.2),
                unit(b, 1.3, 1.0, 0.5, 0.0, 0.0),
            ],
            Vec::new(),
        );

        tick_units(&mut world, &grid);

        assert_eq!(world.units[&a].velocity, 0.0);
        assert_eq!((world.units[&a].x, world.units[&a].y), (1.0, 1.0));
        assert_eq!((world.units[&b].x, world.units[&b].y), (1.3, 1.0));
        assert_eq!(world.units[&b].velocity, 0.0);
    }

    #[test]
    fn static_object_blocks_move() {
        let grid = land(4, 4);
        let u = id(1);
        let tree = Object::new(id(9), 1.5, 1.2, 0.5, ObjectKind::Tree);
        let mut world = contents(vec![unit(u, 1.0, 1.0, 0.5, 0.0, 0.1)], vec![tree]);

        tick_units(&mut world, &grid);

        assert_eq!(world.units[&u].velocity, 0.0);
        assert_eq!(world.units[&u].x, 1.0);
    }

    #[test]
    fn touching_an_object_edge_is_not_a_collision() {
        let grid = land(4, 4);
        let u = id(1);
        // After the step the unit's right edge sits exactly on the object's left edge.
        let tree = Object::new(id(9), 1.75, 1.0, 0.5, ObjectKind::Tree);
        let mut world = contents(vec![unit(u, 1.0, 1.0, 0.5, 0.0, 0.25)], vec![tree]);

        tick_units(&mut world, &grid);

        assert_eq!(world.units[&u].x, 1.25);
        assert_eq!(world.units[&u].velocity, 0.25);
    }

    #[test]
    fn leaving_the_grid_is_blocked() {
        let grid = land(4, 4);
        let u = id(1);
        let mut world = contents(
            vec![unit(u, 0.05, 1.0, 0.5, std::f64::consts::PI, 0.1)],
            Vec::new(),
        );

        tick_units(&mut world, &grid);

        assert_eq!(world.units[&u].velocity, 0.0);
        assert_eq!(world.units[&u].x, 0.05);
    }

    #[test]
    fn stationary_units_never_change() {
        let grid = land(4, 4);
        let u = id(1);
        let mut world = contents(vec![unit(u, 2.0, 2.0, 0.5, 1.3, 0.0)], Vec::new());
        let before = world.units[&u].clone();

        for _ in 0..100 {
            let report = tick_units(&mut world, &grid);
            assert_eq!(report, MovementReport::default());
        }

        assert_eq!(world.units[&u], before);
    }

    #[test]
    fn buildings_are_excluded_from_movement() {
        let grid = land(4, 4);
        let s = id(1);
        let spawner = Unit::new(
            Object::new(s, 1.0, 1.0, 1.0, ObjectKind::Tree),
            UnitKind::Spawner,
            1,
        )
        .with_motion(0.0, 0.5);
        let mut world = contents(vec![spawner], Vec::new());

        tick_units(&mut world, &grid);

        assert_eq!(world.units[&s].x, 1.0);
        assert_eq!(world.units[&s].velocity, 0.5);
    }

    #[test]
    fn unit_never_collides_with_itself() {
        let units = [
            unit(id(1), 1.0, 1.0, 0.5, 0.0, 0.1),
            unit(id(2), 3.0, 3.0, 0.5, 0.0, 0.0),
        ];
        for u in &units {
            // The unit's own current box always overlaps a slightly shifted copy of itself.
            let shifted = Aabb::square(u.x + 0.01, u.y, u.size);
            let others_overlap = units
                .iter()
                .filter(|o| o.id != u.id)
                .any(|o| shifted.overlaps(&o.bounds()));
            assert_eq!(unit_blocked(units.iter(), &shifted, u.id), others_overlap);
        }
    }

    #[test]
    fn outcome_does_not_depend_on_obstacle_order() {
        let mut grid = land(4, 4);
        grid.set(2, 1, TileKind::Rock);
        let mover = unit(id(1), 1.6, 1.0, 0.5, 0.0, 0.5);
        let (next_x, next_y) = mover.next_position();
        let next = Aabb::square(next_x, next_y, mover.size);
        let others = vec![
            mover.clone(),
            unit(id(2), 2.2, 1.1, 0.5, 0.0, 0.0),
            unit(id(3), 0.2, 3.0, 0.5, 0.0, 0.0),
        ];
        let objects = vec![
            Object::new(id(7), 2.3, 1.0, 0.5, ObjectKind::Tree),
            Object::new(id(8), 0.1, 0.1, 0.3, ObjectKind::Decoration),
        ];

        // Terrain and the unit at (2.2, 1.1) both block; any visiting order still blocks.
        assert!(tile_blocked(&grid, &next));
        assert!(unit_blocked(others.iter(), &next, mover.id));
        assert!(unit_blocked(others.iter().rev(), &next, mover.id));
        assert!(object_blocked(objects.iter(), &next));
        assert!(object_blocked(objects.iter().rev(), &next));

        // Same configuration under reversed id order resolves identically.
        let mut forward = contents(others.clone(), objects.clone());
        let relabeled: Vec<Unit> = others
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, mut u)| {
                u.object.id = id(200 - i as u8);
                u
            })
            .collect();
        let mut reversed = contents(relabeled, objects);
        tick_units(&mut forward, &grid);
        tick_units(&mut reversed, &grid);

        let stopped = |w: &WorldContents| {
            w.units
                .values()
                .find(|u| u.x == 1.6)
                .map(|u| u.velocity)
        };
        assert_eq!(stopped(&forward), Some(0.0));
        assert_eq!(stopped(&reversed), Some(0.0));
    }

    #[test]
    fn later_units_see_earlier_moves_in_the_same_pass() {
        let grid = land(8, 4);
        // id(1) is visited first and steps into the space id(2) is heading for. Against
        // id(1)'s old box the second move would have been clear.
        let (first, second) = (id(1), id(2));
        let mut world = contents(
            vec![
                unit(first, 1.0, 1.0, 0.5, 0.0, 0.5),
                unit(second, 2.5, 1.0, 0.5, std::f64::consts::PI, 0.6),
            ],
            Vec::new(),
        );

        tick_units(&mut world, &grid);

        assert_eq!(world.units[&first].x, 1.5);
        assert_eq!(world.units[&second].velocity, 0.0);
        assert_eq!(world.units[&second].x, 2.5);
    }
}
