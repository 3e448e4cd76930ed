//! Cursor trail simulation
//!
//! A field of spring-linked chains chasing the pointer. Every frame the head
//! of each chain is pulled toward the pointer and each following node toward
//! its predecessor, so the chains bend into smooth tapering curves.
//!
//! All nodes live in one fixed arena of `trails * size` entries; chain `i`
//! owns the slice `[i * size, (i + 1) * size)`. Nothing is allocated per frame.

use rand::Rng;

/// Simulation constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailConfig {
    /// Base velocity retention per frame
    pub friction: f64,
    /// Number of chains
    pub trails: usize,
    /// Nodes per chain
    pub size: usize,
    /// Fraction of the predecessor's velocity passed down the chain
    pub dampening: f64,
    /// Spring decay per node along a chain
    pub tension: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            friction: 0.5,
            trails: 80,
            size: 50,
            dampening: 0.025,
            tension: 0.99,
        }
    }
}

/// 2D point, used for the pointer position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrailNode {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl TrailNode {
    fn at(p: Point) -> Self {
        Self {
            x: p.x,
            y: p.y,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Per-chain coefficients, jittered so chains drift apart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainParams {
    pub spring: f64,
    pub friction: f64,
}

/// Sine oscillator driving the stroke hue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub phase: f64,
    pub offset: f64,
    pub frequency: f64,
    pub amplitude: f64,
    value: f64,
}

impl Oscillator {
    pub fn new(phase: f64, offset: f64, frequency: f64, amplitude: f64) -> Self {
        Self {
            phase,
            offset,
            frequency,
            amplitude,
            value: 0.0,
        }
    }

    /// Hue oscillator with a random starting phase
    pub fn hue(rng: &mut impl Rng) -> Self {
        Self::new(rng.gen_range(0.0..std::f64::consts::TAU), 285.0, 0.0015, 85.0)
    }

    pub fn update(&mut self) -> f64 {
        self.phase += self.frequency;
        self.value = self.offset + self.phase.sin() * self.amplitude;
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// One quadratic curve segment: control point then end point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSegment {
    pub cx: f64,
    pub cy: f64,
    pub x: f64,
    pub y: f64,
}

/// All chains of the trail
#[derive(Debug, Clone)]
pub struct TrailField {
    config: TrailConfig,
    chains: Vec<ChainParams>,
    nodes: Vec<TrailNode>,
}

impl TrailField {
    /// Build every chain collapsed onto `origin`.
    pub fn new(config: TrailConfig, origin: Point, rng: &mut impl Rng) -> Self {
        let chains = (0..config.trails)
            .map(|i| {
                let base = 0.45 + (i as f64 / config.trails as f64) * 0.025;
                ChainParams {
                    spring: base + rng.gen_range(-0.05..0.05),
                    friction: config.friction + rng.gen_range(-0.005..0.005),
                }
            })
            .collect();

        Self {
            config,
            chains,
            nodes: vec![TrailNode::at(origin); config.trails * config.size],
        }
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn chain_params(&self, index: usize) -> Option<&ChainParams> {
        self.chains.get(index)
    }

    pub fn chain(&self, index: usize) -> &[TrailNode] {
        let size = self.config.size;
        self.nodes
            .get(index * size..(index + 1) * size)
            .unwrap_or(&[])
    }

    pub fn chains(&self) -> impl Iterator<Item = &[TrailNode]> {
        self.nodes.chunks_exact(self.config.size.max(1))
    }

    /// Advance every chain one frame toward `target`.
    pub fn update(&mut self, target: Point) {
        if self.config.size == 0 {
            return;
        }
        let dampening = self.config.dampening;
        let tension = self.config.tension;

        for (params, nodes) in self
            .chains
            .iter()
            .zip(self.nodes.chunks_exact_mut(self.config.size))
        {
            step_chain(nodes, *params, target, dampening, tension);
        }
    }

    /// Curve segments for chain `index`, starting after its head node.
    pub fn curve(&self, index: usize) -> impl Iterator<Item = CurveSegment> + '_ {
        curve_segments(self.chain(index))
    }
}

fn step_chain(
    nodes: &mut [TrailNode],
    params: ChainParams,
    target: Point,
    dampening: f64,
    tension: f64,
) {
    let mut spring = params.spring;

    if let Some(head) = nodes.first_mut() {
        head.vx += (target.x - head.x) * spring;
        head.vy += (target.y - head.y) * spring;
    }

    for i in 0..nodes.len() {
        if i > 0 {
            let prev = nodes[i - 1];
            let node = &mut nodes[i];
            node.vx += (prev.x - node.x) * spring;
            node.vy += (prev.y - node.y) * spring;
            node.vx += prev.vx * dampening;
            node.vy += prev.vy * dampening;
        }

        let node = &mut nodes[i];
        node.vx *= params.friction;
        node.vy *= params.friction;
        node.x += node.vx;
        node.y += node.vy;
        spring *= tension;
    }
}

/// Smoothed path through a chain: quadratic curves through node midpoints,
/// finishing exactly on the last node.
pub fn curve_segments(nodes: &[TrailNode]) -> impl Iterator<Item = CurveSegment> + '_ {
    let n = nodes.len();
    let middle = (1..n.saturating_sub(2)).map(move |i| {
        let node = nodes[i];
        let next = nodes[i + 1];
        CurveSegment {
            cx: node.x,
            cy: node.y,
            x: 0.5 * (node.x + next.x),
            y: 0.5 * (node.y + next.y),
        }
    });
    let last = (n >= 2).then(|| {
        let second_last = nodes[n - 2];
        let last = nodes[n - 1];
        CurveSegment {
            cx: second_last.x,
            cy: second_last.y,
            x: last.x,
            y: last.y,
        }
    });
    middle.chain(last)
}

/// Stroke colour for a hue value
pub fn stroke_style(hue: f64) -> String {
    format!("hsla({},100%,50%,0.025)", hue.round() as i64)
}
