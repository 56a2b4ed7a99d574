//! State vector for the native engine (feature: `quantum`).
//!
//! Little-endian: bit `q` of a basis index is qubit `q`. Gates are applied by
//! striding over amplitude pairs, so memory stays at `2^n` amplitudes.
use nalgebra::{DVector, Matrix2};
use num_complex::Complex64 as C64;
use rand::Rng;

use crate::core::titan::circuit::Gate;
use crate::core::titan::gates;

#[derive(Clone, Debug)]
pub struct QState {
    pub data: DVector<C64>,
    num_qubits: usize,
}

impl QState {
    /// `|0…0⟩` over `num_qubits` qubits.
    pub fn zero(num_qubits: usize) -> Self {
        let mut data = DVector::from_element(1usize << num_qubits, C64::new(0.0, 0.0));
        data[0] = C64::new(1.0, 0.0);
        Self { data, num_qubits }
    }

    pub fn norm(&self) -> f64 {
        (0..self.data.len()).map(|i| self.probability(i)).sum::<f64>().sqrt()
    }

    pub fn apply_1q(&mut self, u: &Matrix2<C64>, target: usize) {
        let mask = 1usize << target;
        for i in 0..self.data.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (a, b) = (self.data[i], self.data[j]);
                self.data[i] = u[(0, 0)] * a + u[(0, 1)] * b;
                self.data[j] = u[(1, 0)] * a + u[(1, 1)] * b;
            }
        }
    }

    pub fn apply_cx(&mut self, control: usize, target: usize) {
        let (cm, tm) = (1usize << control, 1usize << target);
        for i in 0..self.data.len() {
            if i & cm != 0 && i & tm == 0 {
                self.data.swap_rows(i, i | tm);
            }
        }
    }

    pub fn apply(&mut self, gate: &Gate) {
        match *gate {
            Gate::H(q) => self.apply_1q(&gates::h(), q),
            Gate::S(q) => self.apply_1q(&gates::s(), q),
            Gate::T(q) => self.apply_1q(&gates::t(), q),
            Gate::Cx { control, target } => self.apply_cx(control, target),
        }
    }

    pub fn probability(&self, basis: usize) -> f64 {
        self.data[basis].norm_sqr()
    }

    /// Draw one basis index with Born-rule probabilities.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let total = self.norm().powi(2);
        let mut r = rng.gen::<f64>() * total;
        let mut last = 0;
        for i in 0..self.data.len() {
            let p = self.probability(i);
            if p <= 0.0 {
                continue;
            }
            last = i;
            if r < p {
                return i;
            }
            r -= p;
        }
        // rounding left r just above the final bucket
        last
    }

    /// Basis index as a bit string, qubit 0 first.
    pub fn bits_of(&self, basis: usize) -> String {
        (0..self.num_qubits)
            .map(|q| if (basis >> q) & 1 == 1 { '1' } else { '0' })
            .collect()
    }
}
