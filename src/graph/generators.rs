use crate::graph::WeightMatrix;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a symmetric matrix where each vertex pair is connected with
/// probability `density`, using integer weights in `1..=max_weight`
pub fn random_symmetric_matrix(n: usize, density: f64, max_weight: u32) -> WeightMatrix<f64> {
    let mut rng = rand::thread_rng();
    fill_symmetric(&mut rng, n, density, max_weight)
}

/// Seeded variant of [`random_symmetric_matrix`] for reproducible runs
pub fn seeded_symmetric_matrix(seed: u64, n: usize, density: f64, max_weight: u32) -> WeightMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    fill_symmetric(&mut rng, n, density, max_weight)
}

fn fill_symmetric<R: Rng>(rng: &mut R, n: usize, density: f64, max_weight: u32) -> WeightMatrix<f64> {
    assert!((0.0..=1.0).contains(&density), "density must be within [0, 1]");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut matrix = WeightMatrix::empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(density) {
                let weight = rng.gen_range(1..=max_weight) as f64;
                matrix.set_weight(i, j, weight);
                matrix.set_weight(j, i, weight);
            }
        }
    }
    matrix
}

/// Generates a `width x height` grid with 4-connectivity and unit weights
/// Vertex `(x, y)` has index `y * width + x`.
pub fn grid_matrix(width: usize, height: usize) -> WeightMatrix<f64> {
    let n = width * height;
    let mut matrix = WeightMatrix::empty(n);

    let get_index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x + 1 < width {
                let neighbor = get_index(x + 1, y);
                matrix.set_weight(current, neighbor, 1.0);
                matrix.set_weight(neighbor, current, 1.0);
            }
            if y + 1 < height {
                let neighbor = get_index(x, y + 1);
                matrix.set_weight(current, neighbor, 1.0);
                matrix.set_weight(neighbor, current, 1.0);
            }
        }
    }

    matrix
}

/// Generates a random geometric graph in the unit square
/// Vertices within distance `r` are connected with weight equal to that distance.
pub fn geometric_matrix(n: usize, r: f64) -> WeightMatrix<f64> {
    let mut rng = rand::thread_rng();
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    let mut matrix = WeightMatrix::empty(n);
    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = f64::sqrt((x1 - x2).powi(2) + (y1 - y2).powi(2));

            // Coincident points would produce a zero weight, i.e. no edge
            if dist <= r && dist > 0.0 {
                matrix.set_weight(i, j, dist);
                matrix.set_weight(j, i, dist);
            }
        }
    }

    matrix
}
