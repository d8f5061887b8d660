//! Bench command: timing tables for each algorithm family on generated
//! graphs. For statistically rigorous numbers use the criterion benches;
//! this command gives a quick comparative overview.

use anyhow::Result;
use graphika_common::types::VertexId;
use graphika_common::utils::timer::Timer;
use graphika_core::algorithms::{
    bfs_components, bfs_path, dfs_components, dijkstra, greedy_coloring, hybrid_solver, kruskal,
    nearest_neighbor, prim, two_opt, welsh_powell_coloring,
};
use tracing::info;

use crate::output::{self, Format};
use crate::{generate, BenchFamily, OutputFormat};

fn v(id: u64) -> VertexId {
    VertexId::new(id)
}

/// Average wall-clock milliseconds over `repeats` calls.
fn time_avg<T>(repeats: u32, mut f: impl FnMut() -> T) -> f64 {
    let mut timer = Timer::new();
    timer.start();
    for _ in 0..repeats {
        std::hint::black_box(f());
    }
    timer.stop();
    timer.elapsed_ms() / f64::from(repeats)
}

fn print_rows(title: &str, headers: &[&str], rows: Vec<Vec<String>>, format: Format, quiet: bool) {
    if quiet {
        return;
    }

    output::heading(title, quiet);
    match format {
        Format::Json => {
            let objects: Vec<_> = rows
                .iter()
                .map(|row| {
                    headers
                        .iter()
                        .zip(row)
                        .map(|(h, c)| (*h, c.as_str()))
                        .collect::<std::collections::BTreeMap<_, _>>()
                })
                .collect();
            match serde_json::to_string_pretty(&objects) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("✗ {e}"),
            }
        }
        Format::Table => {
            let mut table = output::create_table();
            output::add_header(&mut table, headers);
            for row in rows {
                table.add_row(row);
            }
            println!("{table}");
        }
    }
}

fn bench_shortest_path(seed: u64, format: Format, quiet: bool) {
    let mut rows = Vec::new();

    for n in (10..=100).step_by(10) {
        let g = generate::random_graph(n, 0.3, seed);
        let target = v(n - 1);

        let dijkstra_ms = time_avg(5, || dijkstra(&g, v(0)));
        let bfs_ms = time_avg(5, || bfs_path(&g, v(0), target));
        let ratio = dijkstra_ms / bfs_ms.max(0.001);

        rows.push(vec![
            format!("{n}"),
            format!("{dijkstra_ms:.3}"),
            format!("{bfs_ms:.3}"),
            format!("{ratio:.2}x"),
        ]);
    }

    print_rows(
        "Shortest Path",
        &["Vertices", "Dijkstra (ms)", "BFS (ms)", "Dijkstra/BFS"],
        rows,
        format,
        quiet,
    );
}

fn bench_mst(seed: u64, format: Format, quiet: bool) {
    let mut rows = Vec::new();

    for n in (10..=100).step_by(10) {
        let g = generate::random_graph(n, 0.5, seed);

        let kruskal_ms = time_avg(10, || kruskal(&g));
        let prim_ms = time_avg(10, || prim(&g, v(0)));
        let ratio = kruskal_ms / prim_ms.max(0.001);

        rows.push(vec![
            format!("{n}"),
            format!("{kruskal_ms:.3}"),
            format!("{prim_ms:.3}"),
            format!("{ratio:.2}x"),
        ]);
    }

    print_rows(
        "Minimum Spanning Tree",
        &["Vertices", "Kruskal (ms)", "Prim (ms)", "Kruskal/Prim"],
        rows,
        format,
        quiet,
    );
}

fn bench_connectivity(seed: u64, format: Format, quiet: bool) {
    let mut rows = Vec::new();

    for n in (10..=100).step_by(10) {
        let g = generate::random_graph(n, 0.4, seed);

        let dfs_ms = time_avg(20, || dfs_components(&g));
        let bfs_ms = time_avg(20, || bfs_components(&g));
        let ratio = dfs_ms / bfs_ms.max(0.001);

        rows.push(vec![
            format!("{n}"),
            format!("{dfs_ms:.3}"),
            format!("{bfs_ms:.3}"),
            format!("{ratio:.2}x"),
        ]);
    }

    print_rows(
        "Connectivity",
        &["Vertices", "DFS (ms)", "BFS (ms)", "DFS/BFS"],
        rows,
        format,
        quiet,
    );
}

fn bench_coloring(seed: u64, format: Format, quiet: bool) {
    let mut rows = Vec::new();

    for n in (10..=80).step_by(10) {
        let g = generate::random_graph(n, 0.4, seed);

        let greedy_ms = time_avg(10, || greedy_coloring(&g));
        let wp_ms = time_avg(10, || welsh_powell_coloring(&g));

        let greedy_colors = greedy_coloring(&g).chromatic_number;
        let wp_colors = welsh_powell_coloring(&g).chromatic_number;

        rows.push(vec![
            format!("{n}"),
            format!("{greedy_ms:.3}"),
            format!("{wp_ms:.3}"),
            format!("{greedy_colors}"),
            format!("{wp_colors}"),
        ]);
    }

    print_rows(
        "Coloring",
        &[
            "Vertices",
            "Greedy (ms)",
            "Welsh-Powell (ms)",
            "Greedy colors",
            "WP colors",
        ],
        rows,
        format,
        quiet,
    );
}

fn bench_tsp(format: Format, quiet: bool) {
    let mut rows = Vec::new();

    // Brute force is factorial; cut it off at 10 cities.
    for n in 5..=11u64 {
        let g = generate::complete_graph(n);

        let brute = if n <= 10 {
            let mut timer = Timer::new();
            timer.start();
            std::hint::black_box(graphika_core::algorithms::brute_force(&g, v(0)));
            timer.stop();
            format!("{:.3}", timer.elapsed_ms())
        } else {
            "N/A".to_string()
        };

        let nn_ms = time_avg(1, || nearest_neighbor(&g, v(0)));
        let initial = nearest_neighbor(&g, v(0));
        let two_opt_ms = time_avg(1, || two_opt(&g, initial.clone()));
        let hybrid_ms = time_avg(1, || hybrid_solver(&g, v(0)));

        rows.push(vec![
            format!("{n}"),
            brute,
            format!("{nn_ms:.3}"),
            format!("{two_opt_ms:.3}"),
            format!("{hybrid_ms:.3}"),
        ]);
    }

    print_rows(
        "Traveling Salesman (complete graphs)",
        &["Cities", "Brute (ms)", "NN (ms)", "2-opt (ms)", "NN+2-opt (ms)"],
        rows,
        format,
        quiet,
    );
}

/// Run the bench command.
pub fn run(family: Option<BenchFamily>, seed: u64, format: OutputFormat, quiet: bool) -> Result<()> {
    let fmt: Format = format.into();

    info!(seed, "benchmark run starting");

    match family {
        Some(BenchFamily::ShortestPath) => bench_shortest_path(seed, fmt, quiet),
        Some(BenchFamily::Mst) => bench_mst(seed, fmt, quiet),
        Some(BenchFamily::Connectivity) => bench_connectivity(seed, fmt, quiet),
        Some(BenchFamily::Coloring) => bench_coloring(seed, fmt, quiet),
        Some(BenchFamily::Tsp) => bench_tsp(fmt, quiet),
        None => {
            bench_shortest_path(seed, fmt, quiet);
            bench_mst(seed, fmt, quiet);
            bench_connectivity(seed, fmt, quiet);
            bench_coloring(seed, fmt, quiet);
            bench_tsp(fmt, quiet);
        }
    }

    Ok(())
}
