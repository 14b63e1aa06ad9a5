//! Domain-specific assertion macros for campus-guide harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! filter invariant was violated.

/// Assert that `$result` keeps categories, and properties within each
/// category, in the same relative order as `$source`.
#[macro_export]
macro_rules! assert_order_preserved {
    ($source:expr, $result:expr) => {{
        let source: &[housing_core::Category] = &$source;
        let result: &[housing_core::Category] = &$result;
        let mut next = 0usize;
        for category in result {
            let found = source[next..].iter().position(|c| {
                c.name == category.name && common::is_subsequence(&category.data, &c.data)
            });
            match found {
                Some(step) => next += step + 1,
                None => panic!(
                    "assert_order_preserved! failed: {:?} {:?} is not an in-order subset of any later source category",
                    category.name.en,
                    common::keys(std::slice::from_ref(category)),
                ),
            }
        }
    }};
}

/// Assert that a filter result holds exactly the given property keys, in order.
///
/// ```rust
/// assert_keys!(result, ["wifi", "gym"]);
/// ```
#[macro_export]
macro_rules! assert_keys {
    ($result:expr, [$($key:expr),* $(,)?]) => {{
        let actual: Vec<String> = common::keys(&$result);
        let expected: Vec<String> = vec![$($key.to_string()),*];
        pretty_assertions::assert_eq!(actual, expected, "filter result keys differ");
    }};
}
