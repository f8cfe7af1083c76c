use grid_distance_field::generate::random_grid;
use grid_distance_field::{Navigator, PathOutcome};
use grid_util::point::Point;
use rand::{rngs::StdRng, SeedableRng};

// Generates a 20x12 grid with 30% obstacles, marks opposite corners as start and end and
// prints the distance overlay and the path, if any.

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = random_grid(20, 12, 0.3, &mut rng).unwrap();
    let mut navigator = Navigator::new(grid);
    let start = Point::new(0, 0);
    let end = Point::new(19, 11);
    navigator.set_blocked(start, false).unwrap();
    navigator.set_blocked(end, false).unwrap();
    navigator.set_target(end).unwrap();
    navigator.set_source(start).unwrap();
    if let Some(field) = navigator.field() {
        println!("{}", field.render(navigator.grid()));
    }
    match navigator.path().unwrap() {
        PathOutcome::Found(path) => println!("{} steps: {:?}", path.steps(), path.cells()),
        PathOutcome::Unreachable => println!("No path found"),
    }
}
