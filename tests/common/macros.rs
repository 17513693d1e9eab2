/// Asserts two floats are within `1e-9` of each other.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        let (l, r): (f64, f64) = ($left, $right);
        assert!((l - r).abs() < 1e-9, "{} is not close to {}", l, r);
    };
}
