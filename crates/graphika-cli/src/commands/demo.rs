//! Demo command: runs the whole algorithm suite on showcase graphs or a
//! user-supplied edge list.

use std::path::Path;

use anyhow::Result;
use graphika_common::types::VertexId;
use graphika_common::utils::error::Error;
use graphika_common::utils::timer::Timer;
use graphika_core::algorithms::{
    brute_force, dfs_components, dijkstra, dominating_set_greedy, find_path, greedy_coloring,
    hybrid_solver, is_connected, k_centers, kruskal, largest_component_size, nearest_neighbor,
    prim, welsh_powell_coloring,
};
use graphika_core::UndirectedGraph;

use crate::output::{self, Format};
use crate::{load, OutputFormat};

// Exhaustive TSP is factorial; past this many vertices only heuristics run.
const BRUTE_FORCE_LIMIT: usize = 10;

fn v(id: u64) -> VertexId {
    VertexId::new(id)
}

/// The 5-vertex weighted showcase graph.
fn simple_graph() -> UndirectedGraph<f64> {
    let mut g = UndirectedGraph::new();
    for i in 0..5 {
        g.add_vertex_with_label(v(i), format!("V{i}"));
    }
    g.add_edge(v(0), v(1), 2.0);
    g.add_edge(v(0), v(2), 4.0);
    g.add_edge(v(1), v(2), 1.0);
    g.add_edge(v(1), v(3), 7.0);
    g.add_edge(v(2), v(3), 2.0);
    g.add_edge(v(3), v(4), 1.0);
    g
}

/// Six fully-connected cities for the TSP showcase.
fn tsp_graph() -> UndirectedGraph<f64> {
    let distances = [
        [0.0, 10.0, 15.0, 20.0, 25.0, 30.0],
        [10.0, 0.0, 35.0, 25.0, 15.0, 40.0],
        [15.0, 35.0, 0.0, 30.0, 40.0, 20.0],
        [20.0, 25.0, 30.0, 0.0, 15.0, 25.0],
        [25.0, 15.0, 40.0, 15.0, 0.0, 10.0],
        [30.0, 40.0, 20.0, 25.0, 10.0, 0.0],
    ];

    let mut g = UndirectedGraph::new();
    for i in 0..6 {
        g.add_vertex_with_label(v(i), format!("City{i}"));
    }
    for i in 0..6 {
        for j in (i + 1)..6 {
            g.add_edge(v(i as u64), v(j as u64), distances[i][j]);
        }
    }
    g
}

/// Three components: {0,1,2}, {3,4}, {5}.
fn disconnected_graph() -> UndirectedGraph<f64> {
    let mut g = UndirectedGraph::new();
    for i in 0..6 {
        g.add_vertex_with_label(v(i), format!("V{i}"));
    }
    g.add_edge(v(0), v(1), 1.0);
    g.add_edge(v(1), v(2), 1.0);
    g.add_edge(v(3), v(4), 2.0);
    g
}

/// Seven vertices needing three colors.
fn coloring_graph() -> UndirectedGraph<f64> {
    let mut g = UndirectedGraph::new();
    for i in 0..7 {
        g.add_vertex_with_label(v(i), format!("V{i}"));
    }
    for (a, b) in [(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (3, 4), (4, 5), (5, 6), (6, 4)] {
        g.add_edge(v(a), v(b), 1.0);
    }
    g
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let mut timer = Timer::new();
    timer.start();
    let result = f();
    timer.stop();
    (result, timer.elapsed_ms())
}

fn show_graph_info(g: &UndirectedGraph<f64>, format: Format, quiet: bool) {
    let items = vec![
        ("Vertices", g.vertex_count().to_string()),
        ("Edges", g.edge_count().to_string()),
        (
            "Connected",
            if is_connected(g) { "yes" } else { "no" }.to_string(),
        ),
    ];
    output::print_key_value_table(&items, format, quiet);
}

fn show_shortest_path(g: &UndirectedGraph<f64>, format: Format, quiet: bool) -> Result<()> {
    output::heading("Shortest Path (Dijkstra)", quiet);

    let vertices = g.vertices();
    let (Some(&from), Some(&to)) = (vertices.first(), vertices.last()) else {
        output::status("graph is empty", quiet);
        return Ok(());
    };

    let (result, ms) = timed(|| find_path(g, from, to));
    match format {
        Format::Json => output::print_json(&result)?,
        Format::Table => {
            let path = result
                .path
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> ");
            let items = vec![
                ("From", from.to_string()),
                ("To", to.to_string()),
                ("Found", result.found.to_string()),
                ("Path", path),
                ("Distance", format!("{}", result.distance)),
                ("Time", format!("{ms:.3} ms")),
            ];
            output::print_key_value_table(&items, format, quiet);
        }
    }

    if !quiet {
        if let Format::Table = format {
            let all = dijkstra(g, from);
            let mut table = output::create_table();
            output::add_header(&mut table, &["Target", "Distance"]);
            for target in g.vertices() {
                table.add_row(vec![target.to_string(), format!("{}", all.distance(target))]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

fn show_mst(g: &UndirectedGraph<f64>, format: Format, quiet: bool) -> Result<()> {
    output::heading("Minimum Spanning Tree (Kruskal & Prim)", quiet);

    let (mst, kruskal_ms) = timed(|| kruskal(g));
    match format {
        Format::Json => output::print_json(&mst)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["From", "To", "Weight"]);
            for edge in &mst.edges {
                table.add_row(vec![
                    edge.from.to_string(),
                    edge.to.to_string(),
                    format!("{}", edge.weight),
                ]);
            }
            if !quiet {
                println!("{table}");
            }
            let items = vec![
                ("Total weight", format!("{}", mst.total_weight)),
                ("Spanning", mst.is_connected.to_string()),
                ("Kruskal time", format!("{kruskal_ms:.3} ms")),
            ];
            output::print_key_value_table(&items, format, quiet);
        }
    }

    if let Some(&start) = g.vertices().first() {
        let (prim_mst, prim_ms) = timed(|| prim(g, start));
        output::status(
            &format!(
                "Prim agrees: total weight {} in {prim_ms:.3} ms",
                prim_mst.total_weight
            ),
            quiet,
        );
    }
    Ok(())
}

fn show_components(g: &UndirectedGraph<f64>, format: Format, quiet: bool) -> Result<()> {
    output::heading("Connectivity (DFS components)", quiet);

    let (result, ms) = timed(|| dfs_components(g));
    match format {
        Format::Json => output::print_json(&result)?,
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Component", "Size", "Vertices"]);
            for (index, component) in result.components.iter().enumerate() {
                let members = component
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                table.add_row(vec![index.to_string(), component.len().to_string(), members]);
            }
            if !quiet {
                println!("{table}");
            }
            let items = vec![
                ("Components", result.component_count.to_string()),
                ("Connected", is_connected(g).to_string()),
                ("Largest", largest_component_size(g).to_string()),
                ("Time", format!("{ms:.3} ms")),
            ];
            output::print_key_value_table(&items, format, quiet);
        }
    }
    Ok(())
}

fn show_coloring(g: &UndirectedGraph<f64>, format: Format, quiet: bool) -> Result<()> {
    output::heading("Graph Coloring (Greedy & Welsh-Powell)", quiet);

    let (greedy, greedy_ms) = timed(|| greedy_coloring(g));
    let (wp, wp_ms) = timed(|| welsh_powell_coloring(g));

    match format {
        Format::Json => {
            output::print_json(&greedy)?;
            output::print_json(&wp)?;
        }
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, &["Vertex", "Greedy color", "Welsh-Powell color"]);
            for vertex in g.vertices() {
                table.add_row(vec![
                    vertex.to_string(),
                    greedy.colors[&vertex].to_string(),
                    wp.colors[&vertex].to_string(),
                ]);
            }
            if !quiet {
                println!("{table}");
            }
            let items = vec![
                ("Greedy colors", greedy.chromatic_number.to_string()),
                ("Greedy valid", greedy.is_valid.to_string()),
                ("Greedy time", format!("{greedy_ms:.3} ms")),
                ("Welsh-Powell colors", wp.chromatic_number.to_string()),
                ("Welsh-Powell valid", wp.is_valid.to_string()),
                ("Welsh-Powell time", format!("{wp_ms:.3} ms")),
            ];
            output::print_key_value_table(&items, format, quiet);
        }
    }
    Ok(())
}

fn show_tsp(g: &UndirectedGraph<f64>, format: Format, quiet: bool) -> Result<()> {
    output::heading("Traveling Salesman", quiet);

    let Some(&start) = g.vertices().first() else {
        output::status("graph is empty", quiet);
        return Ok(());
    };

    let mut rows: Vec<(&str, graphika_core::algorithms::TspResult<f64>, f64)> = Vec::new();

    if g.vertex_count() <= BRUTE_FORCE_LIMIT {
        let (exact, ms) = timed(|| brute_force(g, start));
        rows.push(("brute force", exact, ms));
    } else {
        output::status(
            &format!(
                "skipping brute force: {} vertices exceeds the exact-solver limit of {BRUTE_FORCE_LIMIT}",
                g.vertex_count()
            ),
            quiet,
        );
    }

    let (nn, nn_ms) = timed(|| nearest_neighbor(g, start));
    rows.push(("nearest neighbor", nn, nn_ms));

    let (hybrid, hybrid_ms) = timed(|| hybrid_solver(g, start));
    rows.push(("hybrid (NN + 2-opt)", hybrid, hybrid_ms));

    match format {
        Format::Json => {
            for (_, result, _) in &rows {
                output::print_json(result)?;
            }
        }
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(
                &mut table,
                &["Solver", "Distance", "Iterations", "Optimal", "Time"],
            );
            for (name, result, ms) in &rows {
                table.add_row(vec![
                    (*name).to_string(),
                    format!("{}", result.total_distance),
                    result.iterations.to_string(),
                    result.is_optimal.to_string(),
                    format!("{ms:.3} ms"),
                ]);
            }
            if !quiet {
                println!("{table}");
            }
        }
    }
    Ok(())
}

fn show_facility(g: &UndirectedGraph<f64>, k: usize, format: Format, quiet: bool) -> Result<()> {
    output::heading("Facility Location (Dominating Set & K-Centers)", quiet);

    let (dom, dom_ms) = timed(|| dominating_set_greedy(g));
    let k = k.min(g.vertex_count());
    let (centers, centers_ms) = timed(|| k_centers(g, k));

    match format {
        Format::Json => {
            output::print_json(&dom)?;
            output::print_json(&centers)?;
        }
        Format::Table => {
            let show = |label: &str, result: &graphika_core::algorithms::FacilityResult<f64>, ms: f64| {
                let chosen = result
                    .centers
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                let items = vec![
                    ("Strategy", label.to_string()),
                    ("Centers", chosen),
                    ("Max distance", format!("{}", result.max_distance)),
                    ("Mean distance", format!("{:.3}", result.mean_distance)),
                    ("Valid", result.is_valid.to_string()),
                    ("Time", format!("{ms:.3} ms")),
                ];
                output::print_key_value_table(&items, format, quiet);
            };
            show("dominating set", &dom, dom_ms);
            show(&format!("k-centers (k={k})"), &centers, centers_ms);
        }
    }
    Ok(())
}

fn run_suite(g: &UndirectedGraph<f64>, k: usize, format: Format, quiet: bool) -> Result<()> {
    show_graph_info(g, format, quiet);
    show_shortest_path(g, format, quiet)?;
    show_mst(g, format, quiet)?;
    show_components(g, format, quiet)?;
    show_coloring(g, format, quiet)?;
    show_tsp(g, format, quiet)?;
    show_facility(g, k, format, quiet)?;
    Ok(())
}

/// Run the demo command.
pub fn run(graph: Option<&Path>, centers: usize, format: OutputFormat, quiet: bool) -> Result<()> {
    if centers == 0 {
        return Err(Error::InvalidParameter("--centers must be at least 1".into()).into());
    }

    let fmt: Format = format.into();

    if let Some(path) = graph {
        let g = load::load_edge_list(path)?;
        output::heading(&format!("Graph from {}", path.display()), quiet);
        return run_suite(&g, centers, fmt, quiet);
    }

    output::heading("Showcase: simple weighted graph", quiet);
    let simple = simple_graph();
    show_graph_info(&simple, fmt, quiet);
    show_shortest_path(&simple, fmt, quiet)?;
    show_mst(&simple, fmt, quiet)?;
    show_components(&simple, fmt, quiet)?;
    show_facility(&simple, centers, fmt, quiet)?;

    output::heading("Showcase: six-city tour", quiet);
    let cities = tsp_graph();
    show_graph_info(&cities, fmt, quiet);
    show_tsp(&cities, fmt, quiet)?;

    output::heading("Showcase: disconnected graph", quiet);
    let split = disconnected_graph();
    show_graph_info(&split, fmt, quiet);
    show_components(&split, fmt, quiet)?;

    output::heading("Showcase: coloring graph", quiet);
    let colored = coloring_graph();
    show_graph_info(&colored, fmt, quiet);
    show_coloring(&colored, fmt, quiet)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_graphs_shape() {
        assert_eq!(simple_graph().edge_count(), 6);
        assert_eq!(tsp_graph().edge_count(), 15);
        assert_eq!(disconnected_graph().edge_count(), 3);
        assert_eq!(coloring_graph().edge_count(), 9);
    }

    #[test]
    fn test_suite_runs_quietly_on_all_showcases() {
        for g in [
            simple_graph(),
            tsp_graph(),
            disconnected_graph(),
            coloring_graph(),
        ] {
            run_suite(&g, 2, Format::Table, true).unwrap();
        }
    }

    #[test]
    fn test_zero_centers_is_rejected() {
        assert!(run(None, 0, crate::OutputFormat::Table, true).is_err());
    }
}
