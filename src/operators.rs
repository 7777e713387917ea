use std::ops::{Add, AddAssign, Neg};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}

/// Results of the bitwise operators applied to a pair of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitReport {
    pub not_a: u8,
    pub and: u8,
    pub or: u8,
    pub xor: u8,
    /// `a << 2`, bits moved past the high end are dropped.
    pub a_shl_2: u8,
    pub b_shr_2: u8,
}

impl BitReport {
    pub fn new(a: u8, b: u8) -> Self {
        Self {
            not_a: !a,
            and: a & b,
            or: a | b,
            xor: a ^ b,
            a_shl_2: a << 2,
            b_shr_2: b >> 2,
        }
    }
}

pub fn wrapping_increment(value: u8) -> u8 {
    value.wrapping_add(1)
}

pub fn wrapping_decrement(value: u8) -> u8 {
    value.wrapping_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_operators() {
        let v1 = Vector2D::new(2.0, 3.0);
        let v2 = Vector2D::new(4.0, 9.0);
        assert_eq!(v1 + v2, Vector2D::new(6.0, 12.0));
        assert_eq!(-v1, Vector2D::new(-2.0, -3.0));
        assert_ne!(v1, v2);

        let mut acc = v1;
        acc += v2;
        acc += v2;
        assert_eq!(acc, Vector2D::new(10.0, 21.0));
    }

    #[test]
    fn test_bit_report() {
        let report = BitReport::new(0b1111_1100, 0b0011_1111);
        assert_eq!(report.not_a, 0b0000_0011);
        assert_eq!(report.and, 0b0011_1100);
        assert_eq!(report.or, 0b1111_1111);
        assert_eq!(report.xor, 0b1100_0011);
        assert_eq!(report.a_shl_2, 0b1111_0000);
        assert_eq!(report.b_shr_2, 0b0000_1111);
        assert_eq!(BitReport::new(0b0000_1111, 0).not_a, 0b1111_0000);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(wrapping_increment(u8::MAX), 0);
        assert_eq!(wrapping_decrement(u8::MIN), u8::MAX);
        assert_eq!(wrapping_increment(41), 42);
    }
}
