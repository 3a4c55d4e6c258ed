//! Species update rules: feeding, movement, reproduction, aging, death.
//!
//! Each step function is invoked once per cell that held the active species
//! in the pre-tick snapshot. It reads the snapshot ("current") freely and
//! commits results into the staging buffer ("next") through the grid's claim
//! discipline. Every function starts by re-reading its own cell from next:
//! if an earlier phase already overwrote it (a carnivore moved onto this
//! herbivore, say), the occupant no longer exists and the rule is a no-op.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use trophic_core::{Animal, Cell, GridError, Species};
use trophic_grid::DualGrid;
use trophic_space::Adjacency;

use crate::config::SimConfig;

/// Shared read context for one phase.
pub(crate) struct RuleContext<'a> {
    pub grid: &'a DualGrid,
    pub config: &'a SimConfig,
}

impl RuleContext<'_> {
    fn neighbours(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
        self.grid.lattice().neighbours(row, col, Adjacency::Moore)
    }
}

/// One percentage draw against the cell's stream.
fn percent_roll(rng: &mut ChaCha8Rng, pct: u32) -> bool {
    rng.random_range(0..100) < pct
}

fn make_cell(species: Species, animal: Animal) -> Cell {
    match species {
        Species::Herbivore => Cell::Herbivore(animal),
        Species::Carnivore => Cell::Carnivore(animal),
        Species::Plant => unreachable!("plants are not animals"),
    }
}

/// What the given animal species eats.
fn prey_of(species: Species) -> Species {
    match species {
        Species::Herbivore => Species::Plant,
        Species::Carnivore => Species::Herbivore,
        Species::Plant => unreachable!("plants do not hunt"),
    }
}

/// Plant rule: age, overcrowding, reproduction.
pub(crate) fn step_plant(
    ctx: &RuleContext<'_>,
    row: usize,
    col: usize,
    rng: &mut ChaCha8Rng,
) -> Result<(), GridError> {
    // Skip if a consumer already overwrote this cell earlier in the tick.
    let Cell::Plant { age } = ctx.grid.read_next(row, col)? else {
        return Ok(());
    };

    let age = age + 1;
    if age > ctx.config.plant_max_age {
        ctx.grid.store_next(row, col, Cell::Empty)?;
        return Ok(());
    }

    let neighbours = ctx.neighbours(row, col);
    let mut empty_neighbours = 0usize;
    for &(r, c) in &neighbours {
        if ctx.grid.read_next(r, c)?.is_empty() {
            empty_neighbours += 1;
        }
    }
    if empty_neighbours == 0 {
        // Overcrowded. A 1x1 lattice has no neighbours at all, which counts.
        ctx.grid.store_next(row, col, Cell::Empty)?;
        return Ok(());
    }

    ctx.grid.store_next(row, col, Cell::Plant { age })?;

    if percent_roll(rng, ctx.config.plant_reproduction_pct) {
        for &(r, c) in &neighbours {
            if ctx.grid.read_next(r, c)?.is_empty() {
                // Claim the first empty neighbour; win or lose, this plant
                // spawns at most one offspring per tick.
                ctx.grid
                    .claim_next(r, c, Cell::is_empty, Cell::Plant { age: 0 })?;
                break;
            }
        }
    }
    Ok(())
}

/// Herbivore rule: eats plants.
pub(crate) fn step_herbivore(
    ctx: &RuleContext<'_>,
    row: usize,
    col: usize,
    rng: &mut ChaCha8Rng,
) -> Result<(), GridError> {
    step_animal(ctx, row, col, rng, Species::Herbivore)
}

/// Carnivore rule: hunts herbivores.
pub(crate) fn step_carnivore(
    ctx: &RuleContext<'_>,
    row: usize,
    col: usize,
    rng: &mut ChaCha8Rng,
) -> Result<(), GridError> {
    step_animal(ctx, row, col, rng, Species::Carnivore)
}

/// The shared herbivore/carnivore state machine.
fn step_animal(
    ctx: &RuleContext<'_>,
    row: usize,
    col: usize,
    rng: &mut ChaCha8Rng,
    species: Species,
) -> Result<(), GridError> {
    let animal = match (species, ctx.grid.read_next(row, col)?) {
        (Species::Herbivore, Cell::Herbivore(a)) => a,
        (Species::Carnivore, Cell::Carnivore(a)) => a,
        // Consumed or displaced earlier in the tick.
        _ => return Ok(()),
    };

    let cfg = ctx.config;
    let neighbours = ctx.neighbours(row, col);
    let prey = prey_of(species);
    let gain = match species {
        Species::Herbivore => cfg.herbivore_energy_gain,
        _ => cfg.carnivore_energy_gain,
    };

    // 1. Feeding: first neighbour holding prey in BOTH buffers. Requiring
    //    the snapshot too keeps a carnivore from chasing a herbivore that
    //    only arrived there this tick.
    let mut claim_lost = false;
    for &(r, c) in &neighbours {
        if ctx.grid.current(r, c)?.species() == Some(prey)
            && ctx.grid.read_next(r, c)?.species() == Some(prey)
        {
            let fed = Animal {
                energy: animal.energy + gain,
                ticks_without_food: 0,
                ..animal
            };
            if ctx
                .grid
                .claim_next(r, c, |cell| cell.species() == Some(prey), make_cell(species, fed))?
            {
                ctx.grid.store_next(row, col, Cell::Empty)?;
                return Ok(());
            }
            // Another hunter got there first; no feeding and no movement
            // this tick.
            claim_lost = true;
            break;
        }
    }

    // 2. Random movement into the first empty neighbour. Note the literal
    //    legacy behaviour: moving resets the starvation counter even though
    //    nothing was eaten.
    if !claim_lost && percent_roll(rng, cfg.movement_pct) {
        for &(r, c) in &neighbours {
            if ctx.grid.read_next(r, c)?.is_empty() {
                let moved = Animal {
                    ticks_without_food: 0,
                    ..animal
                };
                if ctx
                    .grid
                    .claim_next(r, c, Cell::is_empty, make_cell(species, moved))?
                {
                    ctx.grid.store_next(row, col, Cell::Empty)?;
                    return Ok(());
                }
                break;
            }
        }
    }

    // 3. Neither fed nor moved: starve a little, maybe die, maybe reproduce.
    let mut animal = Animal {
        energy: animal.energy - 1,
        age: animal.age + 1,
        ticks_without_food: animal.ticks_without_food + 1,
    };
    if animal.ticks_without_food >= cfg.max_no_food_ticks || animal.energy <= 0 {
        ctx.grid.store_next(row, col, Cell::Empty)?;
        return Ok(());
    }
    if animal.energy >= cfg.reproduction_energy_threshold
        && try_reproduce(ctx, &neighbours, species, rng)?
    {
        animal.energy -= cfg.reproduction_energy_cost;
    }
    ctx.grid.store_next(row, col, make_cell(species, animal))?;
    Ok(())
}

/// Attempt reproduction into the first empty neighbour.
///
/// Returns whether an offspring was placed; the caller deducts the energy
/// cost. At most one offspring per parent per tick, and the claim guarantees
/// at most one parent wins a given empty cell.
fn try_reproduce(
    ctx: &RuleContext<'_>,
    neighbours: &[(usize, usize)],
    species: Species,
    rng: &mut ChaCha8Rng,
) -> Result<bool, GridError> {
    if !percent_roll(rng, ctx.config.animal_reproduction_pct) {
        return Ok(false);
    }
    for &(r, c) in neighbours {
        if ctx.grid.read_next(r, c)?.is_empty() {
            return ctx
                .grid
                .claim_next(r, c, Cell::is_empty, make_cell(species, Animal::newborn()));
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trophic_space::Lattice;

    fn ctx_grid(side: usize) -> DualGrid {
        DualGrid::new(Lattice::new(side).unwrap())
    }

    fn rng() -> ChaCha8Rng {
        crate::rng::cell_stream(1, 1, 0, 0)
    }

    fn base_config() -> SimConfig {
        SimConfig {
            side: 5,
            ..SimConfig::default()
        }
    }

    #[test]
    fn plant_dies_of_old_age() {
        let cfg = base_config();
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Plant { age: cfg.plant_max_age })
            .unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_plant(&ctx, 2, 2, &mut rng()).unwrap();
        assert!(grid.read_next(2, 2).unwrap().is_empty());
    }

    #[test]
    fn plant_with_no_empty_neighbours_dies_of_overcrowding() {
        let cfg = SimConfig {
            plant_max_age: 100,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Plant { age: 0 }).unwrap();
        for (r, c) in Lattice::new(5).unwrap().neighbours(2, 2, Adjacency::Moore) {
            grid.set_current(r, c, Cell::Plant { age: 0 }).unwrap();
        }
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_plant(&ctx, 2, 2, &mut rng()).unwrap();
        assert!(grid.read_next(2, 2).unwrap().is_empty());
    }

    #[test]
    fn surviving_plant_ages_in_place() {
        let cfg = SimConfig {
            plant_reproduction_pct: 0,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Plant { age: 3 }).unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_plant(&ctx, 2, 2, &mut rng()).unwrap();
        assert_eq!(grid.read_next(2, 2).unwrap(), Cell::Plant { age: 4 });
    }

    #[test]
    fn plant_reproduction_claims_exactly_one_neighbour() {
        let cfg = SimConfig {
            plant_reproduction_pct: 100,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Plant { age: 0 }).unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_plant(&ctx, 2, 2, &mut rng()).unwrap();
        let offspring: usize = Lattice::new(5)
            .unwrap()
            .neighbours(2, 2, Adjacency::Moore)
            .iter()
            .filter(|&&(r, c)| !grid.read_next(r, c).unwrap().is_empty())
            .count();
        assert_eq!(offspring, 1);
        // Fixed scan order: the first offset (north) wins.
        assert_eq!(grid.read_next(1, 2).unwrap(), Cell::Plant { age: 0 });
    }

    #[test]
    fn plant_rule_skips_cell_consumed_this_tick() {
        let cfg = base_config();
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Plant { age: 0 }).unwrap();
        grid.snapshot_to_next();
        // A herbivore moved here during its phase.
        let eater = Cell::Herbivore(Animal::with_energy(4));
        grid.store_next(2, 2, eater).unwrap();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_plant(&ctx, 2, 2, &mut rng()).unwrap();
        assert_eq!(grid.read_next(2, 2).unwrap(), eater);
    }

    #[test]
    fn herbivore_eats_adjacent_plant() {
        let cfg = base_config();
        let mut grid = ctx_grid(5);
        let herb = Animal::with_energy(3);
        grid.set_current(2, 2, Cell::Herbivore(herb)).unwrap();
        grid.set_current(1, 2, Cell::Plant { age: 1 }).unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        assert!(grid.read_next(2, 2).unwrap().is_empty());
        assert_eq!(
            grid.read_next(1, 2).unwrap(),
            Cell::Herbivore(Animal {
                energy: 3 + cfg.herbivore_energy_gain,
                age: herb.age,
                ticks_without_food: 0,
            })
        );
    }

    #[test]
    fn carnivore_hunts_adjacent_herbivore() {
        let cfg = base_config();
        let mut grid = ctx_grid(5);
        let carn = Animal::with_energy(4);
        grid.set_current(2, 2, Cell::Carnivore(carn)).unwrap();
        grid.set_current(2, 3, Cell::Herbivore(Animal::with_energy(2)))
            .unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_carnivore(&ctx, 2, 2, &mut rng()).unwrap();
        assert!(grid.read_next(2, 2).unwrap().is_empty());
        assert_eq!(
            grid.read_next(2, 3).unwrap(),
            Cell::Carnivore(Animal {
                energy: 4 + cfg.carnivore_energy_gain,
                age: carn.age,
                ticks_without_food: 0,
            })
        );
    }

    #[test]
    fn carnivore_ignores_plants() {
        let cfg = SimConfig {
            movement_pct: 0,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Carnivore(Animal::with_energy(4)))
            .unwrap();
        grid.set_current(1, 2, Cell::Plant { age: 0 }).unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_carnivore(&ctx, 2, 2, &mut rng()).unwrap();
        // No hunt, no movement: starved in place.
        assert_eq!(grid.read_next(1, 2).unwrap(), Cell::Plant { age: 0 });
        match grid.read_next(2, 2).unwrap() {
            Cell::Carnivore(a) => {
                assert_eq!(a.energy, 3);
                assert_eq!(a.ticks_without_food, 1);
            }
            other => panic!("expected carnivore, got {other:?}"),
        }
    }

    #[test]
    fn unfed_animal_starves_at_threshold() {
        let cfg = SimConfig {
            movement_pct: 0,
            max_no_food_ticks: 3,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(
            2,
            2,
            Cell::Herbivore(Animal {
                energy: 10,
                age: 0,
                ticks_without_food: 2,
            }),
        )
        .unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        assert!(grid.read_next(2, 2).unwrap().is_empty());
    }

    #[test]
    fn unfed_animal_dies_at_zero_energy() {
        let cfg = SimConfig {
            movement_pct: 0,
            max_no_food_ticks: 100,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Herbivore(Animal::with_energy(1)))
            .unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        assert!(grid.read_next(2, 2).unwrap().is_empty());
    }

    #[test]
    fn move_resets_starvation_counter_without_feeding() {
        // The legacy rule, kept deliberately: wandering resets the counter
        // even though nothing was eaten.
        let cfg = SimConfig {
            movement_pct: 100,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        let wanderer = Animal {
            energy: 4,
            age: 2,
            ticks_without_food: 2,
        };
        grid.set_current(2, 2, Cell::Herbivore(wanderer)).unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        assert!(grid.read_next(2, 2).unwrap().is_empty());
        // First empty neighbour in scan order is north.
        assert_eq!(
            grid.read_next(1, 2).unwrap(),
            Cell::Herbivore(Animal {
                energy: 4,
                age: 2,
                ticks_without_food: 0,
            })
        );
    }

    #[test]
    fn eligible_animal_reproduces_once_and_pays_cost() {
        let cfg = SimConfig {
            movement_pct: 0,
            animal_reproduction_pct: 100,
            max_no_food_ticks: 100,
            reproduction_energy_threshold: 5,
            reproduction_energy_cost: 2,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Herbivore(Animal::with_energy(9)))
            .unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        match grid.read_next(2, 2).unwrap() {
            // 9 - 1 (no food) - 2 (reproduction cost)
            Cell::Herbivore(a) => assert_eq!(a.energy, 6),
            other => panic!("expected herbivore, got {other:?}"),
        }
        let offspring: Vec<Cell> = Lattice::new(5)
            .unwrap()
            .neighbours(2, 2, Adjacency::Moore)
            .iter()
            .map(|&(r, c)| grid.read_next(r, c).unwrap())
            .filter(|c| !c.is_empty())
            .collect();
        assert_eq!(offspring, vec![Cell::Herbivore(Animal::newborn())]);
    }

    #[test]
    fn animal_below_threshold_does_not_reproduce() {
        let cfg = SimConfig {
            movement_pct: 0,
            animal_reproduction_pct: 100,
            max_no_food_ticks: 100,
            reproduction_energy_threshold: 5,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Herbivore(Animal::with_energy(4)))
            .unwrap();
        grid.snapshot_to_next();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        let occupied: usize = (0..5 * 5)
            .filter(|&i| !grid.read_next(i / 5, i % 5).unwrap().is_empty())
            .count();
        assert_eq!(occupied, 1);
    }

    #[test]
    fn animal_rule_skips_cell_consumed_this_tick() {
        let cfg = base_config();
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Herbivore(Animal::with_energy(3)))
            .unwrap();
        grid.snapshot_to_next();
        // A carnivore took this cell during its phase.
        let hunter = Cell::Carnivore(Animal::with_energy(6));
        grid.store_next(2, 2, hunter).unwrap();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        assert_eq!(grid.read_next(2, 2).unwrap(), hunter);
    }

    #[test]
    fn feeding_requires_prey_in_both_buffers() {
        let cfg = SimConfig {
            movement_pct: 0,
            ..base_config()
        };
        let mut grid = ctx_grid(5);
        grid.set_current(2, 2, Cell::Herbivore(Animal::with_energy(5)))
            .unwrap();
        grid.set_current(1, 2, Cell::Plant { age: 0 }).unwrap();
        grid.snapshot_to_next();
        // The plant was already eaten out of the staging buffer this tick.
        grid.store_next(1, 2, Cell::Herbivore(Animal::with_energy(2)))
            .unwrap();
        let ctx = RuleContext {
            grid: &grid,
            config: &cfg,
        };
        step_herbivore(&ctx, 2, 2, &mut rng()).unwrap();
        // Could not feed: starved in place instead.
        match grid.read_next(2, 2).unwrap() {
            Cell::Herbivore(a) => assert_eq!(a.ticks_without_food, 1),
            other => panic!("expected herbivore, got {other:?}"),
        }
    }
}
