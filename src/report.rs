//! Plain-text reports of engine results.

use std::fmt::{Debug, Display};
use num_traits::{Float, Zero};
use serde::Deserialize;

use crate::algorithm::{longest_path, shortest_paths, Path, ShortestPathResult};
use crate::graph::{fold_vertex_costs, orient_ascending, WeightMatrix};
use crate::Result;

fn join_vertices(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per non-source vertex: route, distance and the path taken
pub fn format_shortest_paths<W>(result: &ShortestPathResult<W>) -> String
where
    W: Float + Zero + Debug + Copy + Display,
{
    let mut out = String::from("Vertex\tDistance (or Cost)\tPath\n");

    for target in 0..result.distances.len() {
        if target == result.source {
            continue;
        }

        let (distance, path) = match (result.distance(target), result.path_to(target)) {
            (Some(distance), Some(path)) => (distance.to_string(), join_vertices(&path)),
            _ => ("unreachable".to_string(), "-".to_string()),
        };
        out.push_str(&format!("{} -> {}\t{}\t{}\n", result.source, target, distance, path));
    }

    out
}

pub fn format_longest_path<W>(path: &Path<W>) -> String
where
    W: Display,
{
    if path.is_empty() {
        return "Longest path: (empty graph)\n".to_string();
    }
    format!(
        "Longest path: {}\nPath length: {}\n",
        join_vertices(&path.vertices),
        path.weight
    )
}

/// A matrix problem as read by the `solve` binary
#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
    pub matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub source: usize,
    #[serde(default)]
    pub vertex_costs: Option<Vec<f64>>,
}

/// Runs both engines on `problem` and renders their reports
///
/// Shortest paths run on the cost-folded matrix. The longest path uses the
/// ascending orientation of the input matrix with the same costs folded into
/// the directed edges. A longest path failure is reported in the text; any
/// other failure is returned.
pub fn solve_report(problem: &Problem) -> Result<String> {
    let matrix = WeightMatrix::new(problem.matrix.clone())?;
    matrix.check_non_negative()?;
    let folded = match &problem.vertex_costs {
        Some(costs) => matrix.with_vertex_costs(costs)?,
        None => matrix.clone(),
    };

    let mut out = format!("Assuming starting point at vertex: {}\n", problem.source);
    out.push_str(&format_shortest_paths(&shortest_paths(&folded, problem.source)?));
    out.push('\n');

    let longest = orient_ascending(&matrix)
        .and_then(|graph| match &problem.vertex_costs {
            Some(costs) => fold_vertex_costs(&graph, costs),
            None => Ok(graph),
        })
        .and_then(|graph| longest_path(&graph));
    match longest {
        Ok(path) => out.push_str(&format_longest_path(&path)),
        Err(err) => out.push_str(&format!("Longest path unavailable: {}\n", err)),
    }

    Ok(out)
}
