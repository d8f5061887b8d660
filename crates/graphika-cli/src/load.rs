//! Edge-list loader.
//!
//! Accepts whitespace-separated `from to weight` lines; blank lines and
//! lines starting with `#` are skipped. Vertices are created on first
//! mention.

use std::fs;
use std::path::Path;

use graphika_common::types::VertexId;
use graphika_common::utils::error::{Error, Result};
use graphika_core::UndirectedGraph;
use tracing::info;

pub fn load_edge_list(path: &Path) -> Result<UndirectedGraph<f64>> {
    let contents = fs::read_to_string(path)?;
    let mut g = UndirectedGraph::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(Error::EdgeListParse {
                line,
                message: format!("expected `from to weight`, got {} fields", fields.len()),
            });
        }

        let from: u64 = fields[0].parse().map_err(|_| Error::EdgeListParse {
            line,
            message: format!("invalid vertex id `{}`", fields[0]),
        })?;
        let to: u64 = fields[1].parse().map_err(|_| Error::EdgeListParse {
            line,
            message: format!("invalid vertex id `{}`", fields[1]),
        })?;
        let weight: f64 = fields[2].parse().map_err(|_| Error::EdgeListParse {
            line,
            message: format!("invalid weight `{}`", fields[2]),
        })?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::EdgeListParse {
                line,
                message: format!("weight must be finite and non-negative, got {weight}"),
            });
        }
        if from == to {
            return Err(Error::EdgeListParse {
                line,
                message: format!("self-loop on vertex {from}"),
            });
        }

        g.add_vertex(VertexId::new(from));
        g.add_vertex(VertexId::new(to));
        g.add_edge(VertexId::new(from), VertexId::new(to), weight);
    }

    info!(
        vertices = g.vertex_count(),
        edges = g.edge_count(),
        "edge list loaded"
    );
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("graphika-edges-{}-{}.txt", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_edge_list() {
        let path = write_temp("valid", "# sample\n0 1 2.5\n1 2 3.0\n\n2 3 1.0\n");
        let g = load_edge_list(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_weight(VertexId::new(0), VertexId::new(1)), 2.5);
    }

    #[test]
    fn test_load_rejects_malformed_line() {
        let path = write_temp("malformed", "0 1 2.5\n1 2\n");
        let err = load_edge_list(&path).unwrap_err();
        fs::remove_file(&path).ok();

        match err {
            Error::EdgeListParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_rejects_self_loop() {
        let path = write_temp("self-loop", "3 3 1.0\n");
        let err = load_edge_list(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, Error::EdgeListParse { line: 1, .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_edge_list(Path::new("/nonexistent/edges.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
