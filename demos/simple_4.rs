use grid_distance_field::{build_distance_field, reconstruct_path, Grid, PathOutcome};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_blocked(&Point::new(1, 1), true).unwrap();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let field = build_distance_field(&grid, end).unwrap();
    println!("Distances:\n{}", field.render(&grid));
    match reconstruct_path(&grid, &field, start, end).unwrap() {
        PathOutcome::Found(path) => {
            println!("Path:");
            for p in path {
                println!("{:?}", p);
            }
        }
        PathOutcome::Unreachable => println!("No path found"),
    }
}
