//! Fibonacci and factorial
//!
//! Both functions fold non-positive input into their base case instead of
//! signaling an error: `fibonacci` returns 0 for any n <= 0 and `factorial`
//! returns 1 for any n <= 1. Results are computed with an iterative loop,
//! which produces the same values as the textbook recurrences.

/// Largest n for which `fibonacci(n)` fits in a u64
pub const MAX_FIB: i64 = 93;

/// Largest n for which `factorial(n)` fits in a u64
pub const MAX_FACT: i64 = 20;

/// Calculate the nth Fibonacci number
///
/// Satisfies `fibonacci(n) == fibonacci(n-1) + fibonacci(n-2)` for n >= 2.
/// For n above [`MAX_FIB`] the result exceeds u64 range.
pub fn fibonacci(n: i64) -> u64 {
    if n <= 0 {
        return 0;
    }
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 1..n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    curr
}

/// Calculate the factorial of n
///
/// For n above [`MAX_FACT`] the result exceeds u64 range.
pub fn factorial(n: i64) -> u64 {
    if n <= 1 {
        return 1;
    }
    (2..=n as u64).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn test_fibonacci_known_values() {
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(5), 5);
        assert_eq!(fibonacci(9), 34);
        assert_eq!(fibonacci(MAX_FIB), 12_200_160_415_121_876_738);
    }

    #[test]
    fn test_fibonacci_negative_is_zero() {
        assert_eq!(fibonacci(-1), 0);
        assert_eq!(fibonacci(-100), 0);
    }

    #[test]
    fn test_fibonacci_recurrence() {
        for n in 2..=30 {
            assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
        }
    }

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
    }

    #[test]
    fn test_factorial_known_values() {
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(MAX_FACT), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_negative_is_one() {
        assert_eq!(factorial(-1), 1);
        assert_eq!(factorial(-100), 1);
    }

    #[test]
    fn test_factorial_recurrence() {
        for n in 2..=MAX_FACT {
            assert_eq!(factorial(n), n as u64 * factorial(n - 1));
        }
    }
}
