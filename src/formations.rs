//! Named peg boards
//!
//! A formation is just a list of peg centers with a display name. The
//! built-in set covers the stock levels; arbitrary boards can be loaded from
//! JSON produced by an editor or by hand.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::sim::Peg;

/// A named peg layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    pub name: String,
    pub pegs: Vec<DVec2>,
}

impl Formation {
    pub fn new(name: impl Into<String>, pegs: Vec<DVec2>) -> Self {
        Self {
            name: name.into(),
            pegs,
        }
    }

    /// Parse a formation from its JSON representation
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON (pretty, for hand editing)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Build the peg set for this board
    pub fn pegs(&self) -> Vec<Peg> {
        self.pegs.iter().map(|&pos| Peg::new(pos)).collect()
    }
}

/// The stock boards, in level order
pub fn builtin_formations() -> Vec<Formation> {
    vec![
        classic_grid(),
        diamond_pattern(),
        circular_pattern(),
        zigzag_pattern(),
        sparse_triangles(),
    ]
}

fn classic_grid() -> Formation {
    let pegs = (0..8)
        .flat_map(|i| {
            (0..5).map(move |j| DVec2::new(100.0 + i as f64 * 85.0, 150.0 + j as f64 * 85.0))
        })
        .collect();
    Formation::new("Classic Grid", pegs)
}

fn diamond_pattern() -> Formation {
    // Rows of 1, 2, 3, 4, 3, 2, 1 pegs centered on x = 400
    let rows: &[(f64, &[f64])] = &[
        (100.0, &[400.0]),
        (150.0, &[350.0, 450.0]),
        (200.0, &[300.0, 400.0, 500.0]),
        (250.0, &[250.0, 350.0, 450.0, 550.0]),
        (300.0, &[300.0, 400.0, 500.0]),
        (350.0, &[350.0, 450.0]),
        (400.0, &[400.0]),
    ];
    let pegs = rows
        .iter()
        .flat_map(|&(y, xs)| xs.iter().map(move |&x| DVec2::new(x, y)))
        .collect();
    Formation::new("Diamond Pattern", pegs)
}

fn circular_pattern() -> Formation {
    use std::f64::consts::PI;

    let center = DVec2::new(400.0, 300.0);
    let outer = (0..12).map(|i| center + 200.0 * DVec2::from_angle(i as f64 * PI / 6.0));
    let inner = (0..6).map(|i| center + 100.0 * DVec2::from_angle(i as f64 * PI / 3.0));
    let pegs = outer.chain(inner).chain(std::iter::once(center)).collect();
    Formation::new("Circular Pattern", pegs)
}

fn zigzag_pattern() -> Formation {
    let pegs = (0..8)
        .flat_map(|i| {
            let x = 100.0 + i as f64 * 85.0;
            let stagger = (i % 2) as f64 * 85.0;
            [100.0, 270.0, 440.0]
                .into_iter()
                .map(move |band| DVec2::new(x, band + stagger))
        })
        .collect();
    Formation::new("Zigzag Pattern", pegs)
}

fn sparse_triangles() -> Formation {
    let pegs = vec![
        DVec2::new(400.0, 100.0),
        DVec2::new(350.0, 175.0),
        DVec2::new(450.0, 175.0),
        DVec2::new(300.0, 250.0),
        DVec2::new(400.0, 250.0),
        DVec2::new(500.0, 250.0),
        DVec2::new(200.0, 400.0),
        DVec2::new(300.0, 400.0),
        DVec2::new(400.0, 400.0),
        DVec2::new(500.0, 400.0),
        DVec2::new(600.0, 400.0),
    ];
    Formation::new("Sparse Triangles", pegs)
}
