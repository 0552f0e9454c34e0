use complex_rs::complex::Complex;

/// Distance under which a converged point is taken to be a known root.
pub const ROOT_EQUALITY_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub index: usize,
    pub registry_mutated: bool,
}

/// Roots in order of discovery, the position of a root is its identity for
/// the whole render.
#[derive(Debug, Clone)]
pub struct RootRegistry {
    roots: Vec<Complex>,
    tolerance: f64,
    maximal_index: usize,
}

impl RootRegistry {
    pub fn new() -> Self {
        Self::with_tolerance(ROOT_EQUALITY_TOLERANCE)
    }

    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            roots: Vec::new(),
            tolerance,
            maximal_index: 0,
        }
    }

    /// Finds the root `point` converged to, registering it when unknown.
    ///
    /// When several roots are within tolerance the last one scanned wins.
    /// A newly registered root is reported as the registry length *after*
    /// the push, one past its real position. Palette slots are assigned from
    /// that number, so it is kept as is.
    pub fn classify(&mut self, point: Complex) -> Classification {
        let known = self
            .roots
            .iter()
            .enumerate()
            .filter(|&(_, &root)| (point - root).abs() <= self.tolerance)
            .map(|(i, _)| i)
            .last();

        if let Some(index) = known {
            return Classification {
                index,
                registry_mutated: false,
            };
        }

        self.roots.push(point);
        let index = self.roots.len();
        self.maximal_index = self.maximal_index.max(index + 1);
        Classification {
            index,
            registry_mutated: true,
        }
    }

    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Largest reported index plus one, zero before anything was registered.
    pub fn maximal_index(&self) -> usize {
        self.maximal_index
    }

    pub fn into_roots(self) -> Vec<Complex> {
        self.roots
    }
}

impl Default for RootRegistry {
    fn default() -> Self {
        Self::new()
    }
}
