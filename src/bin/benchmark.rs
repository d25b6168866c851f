use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use matrix_paths::algorithm::ShortestPathAlgorithm;
use matrix_paths::graph::generators::random_symmetric_matrix;
use matrix_paths::graph::{Graph, WeightMatrix};
use matrix_paths::{Dijkstra, HeapDijkstra, ShortestPathResult};

// Function to benchmark an algorithm on a matrix
fn benchmark_algorithm<A>(
    algorithm: &A,
    matrix: &WeightMatrix<OrderedFloat<f64>>,
    source: usize,
) -> Result<(Duration, ShortestPathResult<OrderedFloat<f64>>), matrix_paths::Error>
where
    A: ShortestPathAlgorithm<OrderedFloat<f64>, WeightMatrix<OrderedFloat<f64>>>,
{
    println!("Running {} on matrix with {} vertices...", algorithm.name(), matrix.vertex_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(matrix, source)?;
    let duration = start.elapsed();

    println!("  - Found {} reachable vertices in {:?}", result.reachable_count(), duration);

    Ok((duration, result))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sizes = vec![100, 250, 500, 1_000, 2_000];

    // Probability that a vertex pair is connected
    let density = 0.05;

    println!("=====================================================");
    println!("Benchmark: scan Dijkstra vs heap Dijkstra");
    println!("Edge density: {}", density);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let heap_dijkstra = HeapDijkstra::new();

    let mut results = Vec::new();

    for &size in &sizes {
        println!("\nGenerating random matrix with {} vertices...", size);
        let matrix = random_symmetric_matrix(size, density, 100).map_weights(OrderedFloat);
        println!("Matrix has {} edges", matrix.edge_count());

        let (scan_time, scan_result) = benchmark_algorithm(&dijkstra, &matrix, 0)?;
        let (heap_time, heap_result) = benchmark_algorithm(&heap_dijkstra, &matrix, 0)?;

        if scan_result != heap_result {
            return Err("scan and heap Dijkstra disagree".into());
        }

        let speedup = scan_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - heap vs scan: {:.2}x", speedup);
        results.push((size, scan_time, heap_time, speedup));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Vertices", "Scan (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, scan_time, heap_time, speedup) in &results {
        println!(
            "{:<10} | {:<15.3} | {:<15.3} | {:<10.2}",
            size,
            scan_time.as_secs_f64() * 1000.0,
            heap_time.as_secs_f64() * 1000.0,
            speedup
        );
    }

    Ok(())
}
