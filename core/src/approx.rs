macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr) => {
        assert_approx_eq!($lhs, $rhs, epsilon = $crate::frequencies::EPSILON)
    };
    ($lhs:expr, $rhs:expr, epsilon = $epsilon:expr) => {
        match (&($lhs), &($rhs)) {
            (lhs, rhs) => assert!(
                $crate::approx::ApproxEq::approx_eq(lhs, rhs, $epsilon),
                r#"assertion failed: `({} ≈ {})`
  left: `{:?}`,
 right: `{:?}`"#,
                stringify!($lhs),
                stringify!($rhs),
                lhs,
                rhs,
            ),
        }
    };
}

/// Approximate equality of floating point data.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

impl<T> ApproxEq for [T]
where
    T: ApproxEq,
{
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(x, y)| x.approx_eq(y, epsilon))
    }
}

impl<T, const N: usize> ApproxEq for [T; N]
where
    T: ApproxEq,
{
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self[..].approx_eq(&other[..], epsilon)
    }
}

impl<T> ApproxEq for Vec<T>
where
    T: ApproxEq,
{
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self[..].approx_eq(&other[..], epsilon)
    }
}

impl<T> ApproxEq for &T
where
    T: ApproxEq + ?Sized,
{
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        T::approx_eq(*self, *other, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_slices() {
        assert!([0.1 + 0.2, 1.0].approx_eq(&[0.3, 1.0], 1e-15));
        assert!(![0.3, 1.0][..].approx_eq(&[0.3][..], 1.0));
        assert!(!vec![0.3].approx_eq(&vec![0.31], 1e-3));
    }

    #[test]
    fn test_assert_default_epsilon() {
        assert_approx_eq!(1.0, 1.0 + 1e-11);
        assert!(!1.0f64.approx_eq(&(1.0 + 1e-9), crate::frequencies::EPSILON));
    }
}
