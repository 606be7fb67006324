//! Fruchterman-Reingold spring layout.
//!
//! Nodes start uniformly in the unit square, repel each other with `k²/d` and
//! are pulled together along edges with `w·d²/k`; each step moves a node by at
//! most the current temperature, which cools linearly to zero. The result is
//! centred on the origin and scaled into `[-1, 1]`.

use petgraph::visit::EdgeRef;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::graph::CountryGraph;

pub type Positions = Vec<(f64, f64)>;

const MIN_DIST: f64 = 0.01;
const START_TEMPERATURE: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct SpringLayout {
    pub iterations: usize,
    /// optimal node distance; `1/sqrt(n)` when unset
    pub k: Option<f64>,
    pub seed: Option<u64>,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            iterations: 50,
            k: None,
            seed: None,
        }
    }
}

impl SpringLayout {
    pub fn positions(&self, graph: &CountryGraph) -> Positions {
        let n = graph.len();
        if n == 0 {
            return Vec::new();
        }
        if n == 1 {
            return vec![(0.0, 0.0)];
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut pos: Positions = (0..n).map(|_| (rng.gen::<f64>(), rng.gen::<f64>())).collect();

        let k = self.k.unwrap_or_else(|| (1.0 / n as f64).sqrt());
        let cooling = START_TEMPERATURE / (self.iterations as f64 + 1.0);
        let mut t = START_TEMPERATURE;

        for _ in 0..self.iterations {
            let mut disp = vec![(0.0f64, 0.0f64); n];

            for i in 0..n {
                for j in (i + 1)..n {
                    let (dx, dy) = (pos[i].0 - pos[j].0, pos[i].1 - pos[j].1);
                    let d = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
                    let f = k * k / (d * d);
                    disp[i].0 += dx * f;
                    disp[i].1 += dy * f;
                    disp[j].0 -= dx * f;
                    disp[j].1 -= dy * f;
                }
            }

            for edge in graph.inner.edge_references() {
                let (a, b, w) = (edge.source().index(), edge.target().index(), *edge.weight());
                if a == b {
                    continue;
                }
                let (dx, dy) = (pos[a].0 - pos[b].0, pos[a].1 - pos[b].1);
                let d = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
                let f = w as f64 * d / k;
                disp[a].0 -= dx * f;
                disp[a].1 -= dy * f;
                disp[b].0 += dx * f;
                disp[b].1 += dy * f;
            }

            for (p, (dx, dy)) in pos.iter_mut().zip(disp) {
                let len = (dx * dx + dy * dy).sqrt().max(MIN_DIST);
                let step = len.min(t) / len;
                p.0 += dx * step;
                p.1 += dy * step;
            }
            t -= cooling;
        }
        debug!(nodes = n, iterations = self.iterations, "spring layout done");
        rescale(pos)
    }
}

fn rescale(mut pos: Positions) -> Positions {
    let n = pos.len() as f64;
    let (cx, cy) = pos
        .iter()
        .fold((0.0, 0.0), |acc, p| (acc.0 + p.0 / n, acc.1 + p.1 / n));
    let mut lim: f64 = 0.0;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        lim = lim.max(p.0.abs()).max(p.1.abs());
    }
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= lim;
            p.1 /= lim;
        }
    }
    pos
}
