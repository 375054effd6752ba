// Copyright @yucwang 2026

use super::constants::Float;

/// Piecewise linear view over a sorted, irregularly spaced `(key, value)`
/// table. Keys outside the table saturate to the first / last value.
#[derive(Debug, Copy, Clone)]
pub struct LookupTable<'a> {
    entries: &'a [(Float, Float)],
}

impl<'a> LookupTable<'a> {
    pub const fn new(entries: &'a [(Float, Float)]) -> Self {
        Self { entries }
    }

    pub fn lerp(&self, x: Float) -> Float {
        let (first, last) = match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if x >= last.0 {
            return last.1;
        }
        if x <= first.0 {
            return first.1;
        }

        // First entry whose key is not below x. Never 0 here since x > first.0.
        let idx = self.entries.partition_point(|&(key, _)| key < x);
        let (x0, y0) = self.entries[idx - 1];
        let (x1, y1) = self.entries[idx];
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(Float, Float)] = &[(0.0, 1.0), (1.0, 3.0), (4.0, 0.0)];

    #[test]
    fn test_lut_interpolates() {
        let lut = LookupTable::new(TABLE);
        assert_eq!(lut.lerp(0.5), 2.0);
        assert_eq!(lut.lerp(1.0), 3.0);
        assert!((lut.lerp(2.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_lut_saturates() {
        let lut = LookupTable::new(TABLE);
        assert_eq!(lut.lerp(-10.0), 1.0);
        assert_eq!(lut.lerp(0.0), 1.0);
        assert_eq!(lut.lerp(4.0), 0.0);
        assert_eq!(lut.lerp(1e9), 0.0);
    }

    #[test]
    fn test_lut_degenerate_tables() {
        assert_eq!(LookupTable::new(&[]).lerp(3.0), 0.0);
        let single = LookupTable::new(&[(2.0, 7.0)]);
        assert_eq!(single.lerp(0.0), 7.0);
        assert_eq!(single.lerp(5.0), 7.0);
    }
}
