/// Source of uniform samples in `[0, 1)`.
///
/// The browser build feeds this from `Math.random`; tests use seeded or
/// scripted sources so particle layouts are reproducible.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct Sequence {
    values: Vec<f64>,
    pos: usize,
}

#[cfg(test)]
impl Sequence {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Sequence { values, pos: 0 }
    }
}

#[cfg(test)]
impl RandomSource for Sequence {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_cycles() {
        let mut s = Sequence::new(vec![0.1, 0.9]);
        assert_eq!(s.next_f64(), 0.1);
        assert_eq!(s.next_f64(), 0.9);
        assert_eq!(s.next_f64(), 0.1);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut s = Sequence::new(Vec::new());
        assert_eq!(s.next_f64(), 0.0);
    }

    #[test]
    fn closures_are_sources() {
        let mut n = 0.0;
        let mut src = move || {
            n += 0.25;
            n
        };
        assert_eq!(src.next_f64(), 0.25);
        assert_eq!(src.next_f64(), 0.5);
    }
}
