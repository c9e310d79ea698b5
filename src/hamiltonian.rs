use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use itertools::Itertools;

use crate::lattice::Shape;

/// One directed emission of a pairwise interaction.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Edge {
    pub coupling: i32,
    pub i: usize,
    pub j: usize,
}

impl Edge {
    pub fn new(coupling: i32, i: usize, j: usize) -> Self {
        Self { coupling, i, j }
    }
}

/// Assembled interaction set for one lattice. `rows` and `cols` are the
/// emitted grid dimensions (doubled relative to the spec when toric);
/// `edges` keeps the site-major emission order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Hamiltonian {
    pub shape: Shape,
    pub rows: usize,
    pub cols: usize,
    pub edges: Vec<Edge>,
}

impl Hamiltonian {
    /// Text form consumed by the simulator: a `<shape>,<rows>,<cols>`
    /// header line, then one `<coupling>,<i>,<j>` line per edge.
    pub fn to_csv(&self) -> String {
        let header = format!("{},{},{}", self.shape.tag(), self.rows, self.cols);
        std::iter::once(header)
            .chain(
                self.edges
                    .iter()
                    .map(|e| format!("{},{},{}", e.coupling, e.i, e.j)),
            )
            .join("\n")
            + "\n"
    }

    pub fn from_csv(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let header = lines.next().ok_or_else(|| anyhow!("empty hamiltonian"))?;
        let (shape, rows, cols) = parse_header(header)?;

        let mut edges = Vec::new();
        for line in lines.filter(|l| !l.is_empty()) {
            edges.push(parse_edge(line)?);
        }

        Ok(Self {
            shape,
            rows,
            cols,
            edges,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_csv())
            .with_context(|| format!("writing hamiltonian to {}", path.display()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading hamiltonian from {}", path.display()))?;
        Self::from_csv(&text)
    }
}

fn parse_header(line: &str) -> Result<(Shape, usize, usize)> {
    let parts: Vec<_> = line.split(',').collect();
    if parts.len() != 3 {
        bail!("malformed header line: {line:?}");
    }

    let shape = parts[0]
        .chars()
        .exactly_one()
        .ok()
        .and_then(Shape::from_tag)
        .ok_or_else(|| anyhow!("unknown shape tag {:?}", parts[0]))?;
    let rows = parts[1]
        .parse()
        .with_context(|| format!("bad row count {:?}", parts[1]))?;
    let cols = parts[2]
        .parse()
        .with_context(|| format!("bad column count {:?}", parts[2]))?;

    Ok((shape, rows, cols))
}

fn parse_edge(line: &str) -> Result<Edge> {
    let parts: Vec<_> = line.split(',').collect();
    if parts.len() != 3 {
        bail!("malformed edge line: {line:?}");
    }

    Ok(Edge {
        coupling: parts[0]
            .parse()
            .with_context(|| format!("bad coupling in {line:?}"))?,
        i: parts[1]
            .parse()
            .with_context(|| format!("bad site index in {line:?}"))?,
        j: parts[2]
            .parse()
            .with_context(|| format!("bad site index in {line:?}"))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hamiltonian {
        Hamiltonian {
            shape: Shape::Rectangle,
            rows: 2,
            cols: 3,
            edges: vec![Edge::new(1, 0, 1), Edge::new(-1, 1, 2)],
        }
    }

    #[test]
    fn csv_layout() {
        assert_eq!(sample().to_csv(), "r,2,3\n1,0,1\n-1,1,2\n");
    }

    #[test]
    fn csv_round_trip() {
        let h = sample();
        let text = h.to_csv();
        let parsed = Hamiltonian::from_csv(&text).unwrap();
        assert_eq!(parsed, h);
        assert_eq!(parsed.to_csv(), text);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Hamiltonian::from_csv("").is_err());
        assert!(Hamiltonian::from_csv("x,2,2\n").is_err());
        assert!(Hamiltonian::from_csv("rect,2,2\n").is_err());
        assert!(Hamiltonian::from_csv("r,2\n").is_err());
        assert!(Hamiltonian::from_csv("r,2,2\n1,0\n").is_err());
        assert!(Hamiltonian::from_csv("r,2,2\nx,0,1\n").is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hamiltonian.csv");

        let h = sample();
        h.save(&path).unwrap();
        assert_eq!(Hamiltonian::load(&path).unwrap(), h);
    }
}
