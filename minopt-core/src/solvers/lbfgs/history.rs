use std::collections::VecDeque;

use crate::error::NonFinite;
use crate::numerics::vector::{add_scaled, dot, negate_in_place, norm2, scale_in_place};

/// One step's displacement `s`, gradient change `y`, and `rho = 1 / (s.y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CurvaturePair {
    pub s: Vec<f64>,
    pub y: Vec<f64>,
    pub rho: f64,
}

impl CurvaturePair {
    /// Build a pair, or `Ok(None)` when `s.y` is too close to zero to give a
    /// usable `rho`.
    ///
    /// Fails only when `s.y` itself overflows.
    pub fn new(s: Vec<f64>, y: Vec<f64>, curvature_tol: f64) -> Result<Option<Self>, NonFinite> {
        let sy = dot(&s, &y);
        if !sy.is_finite() {
            return Err(NonFinite::Curvature);
        }
        let rho = 1.0 / sy;
        if sy.abs() <= curvature_tol * norm2(&s) * norm2(&y) || !rho.is_finite() {
            return Ok(None);
        }
        Ok(Some(Self { s, y, rho }))
    }
}

/// Bounded newest-first store of curvature pairs.
#[derive(Clone, Debug)]
pub struct CurvatureHistory {
    pairs: VecDeque<CurvaturePair>,
    capacity: usize,
}

impl CurvatureHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            pairs: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Insert at the front, dropping the oldest pair beyond capacity.
    pub fn push(&mut self, pair: CurvaturePair) {
        self.pairs.push_front(pair);
        while self.pairs.len() > self.capacity {
            self.pairs.pop_back();
        }
    }

    pub fn newest(&self) -> Option<&CurvaturePair> {
        self.pairs.front()
    }

    pub fn oldest(&self) -> Option<&CurvaturePair> {
        self.pairs.back()
    }

    /// Pairs from newest to oldest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CurvaturePair> + ExactSizeIterator {
        self.pairs.iter()
    }

    /// Two-loop recursion: `out = -H * grad`, with H the inverse-Hessian
    /// approximation scaled by `gamma = (s.y)/(y.y)` of the newest pair.
    ///
    /// Returns the `gamma` used (`1.0` when empty, so an empty history yields
    /// `-grad` unchanged).
    pub fn search_direction(&self, grad: &[f64], out: &mut Vec<f64>) -> f64 {
        out.clear();
        out.extend_from_slice(grad);

        // newest -> oldest
        let mut a = Vec::with_capacity(self.pairs.len());
        for p in &self.pairs {
            let ai = p.rho * dot(&p.s, out);
            add_scaled(out, -ai, &p.y);
            a.push(ai);
        }

        let gamma = match self.newest() {
            Some(p) => dot(&p.s, &p.y) / dot(&p.y, &p.y),
            None => 1.0,
        };
        scale_in_place(out, gamma);

        // oldest -> newest
        for (p, ai) in self.pairs.iter().zip(&a).rev() {
            let beta = p.rho * dot(&p.y, out);
            add_scaled(out, ai - beta, &p.s);
        }

        negate_in_place(out);
        gamma
    }
}
