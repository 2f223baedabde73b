//! Predicates whose argument count is checked at runtime.

use crate::errors::{Error, Result};
use std::fmt;

type Body<V> = Box<dyn Fn(&[V]) -> bool + Send + Sync>;

/// A predicate over a slice of arguments with a fixed, runtime-known arity.
///
/// Useful when predicates of different arities have to live in one
/// collection, e.g. rules loaded from configuration.
pub struct GenericPredicate<V> {
    arity: usize,
    body: Body<V>,
}

impl<V: 'static> GenericPredicate<V> {
    pub fn nullary(f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::variadic(0, move |_| f())
    }

    pub fn unary(f: impl Fn(&V) -> bool + Send + Sync + 'static) -> Self {
        Self::variadic(1, move |args| match args {
            [a] => f(a),
            _ => false,
        })
    }

    pub fn binary(f: impl Fn(&V, &V) -> bool + Send + Sync + 'static) -> Self {
        Self::variadic(2, move |args| match args {
            [a, b] => f(a, b),
            _ => false,
        })
    }

    pub fn ternary(f: impl Fn(&V, &V, &V) -> bool + Send + Sync + 'static) -> Self {
        Self::variadic(3, move |args| match args {
            [a, b, c] => f(a, b, c),
            _ => false,
        })
    }

    pub fn quaternary(f: impl Fn(&V, &V, &V, &V) -> bool + Send + Sync + 'static) -> Self {
        Self::variadic(4, move |args| match args {
            [a, b, c, d] => f(a, b, c, d),
            _ => false,
        })
    }

    /// A predicate of any arity; `f` always receives exactly `arity` arguments
    pub fn variadic(arity: usize, f: impl Fn(&[V]) -> bool + Send + Sync + 'static) -> Self {
        Self {
            arity,
            body: Box::new(f),
        }
    }
}

impl<V> GenericPredicate<V> {
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Test with exactly [`arity`](Self::arity) arguments
    pub fn test(&self, args: &[V]) -> Result<bool> {
        if args.len() != self.arity {
            return Err(Error::arity(self.arity, args.len()));
        }
        Ok((self.body)(args))
    }

    /// Test with any number of arguments.
    ///
    /// Missing arguments are filled with `V::default()`, extra ones ignored.
    pub fn test_padded(&self, args: &[V]) -> bool
    where
        V: Clone + Default,
    {
        if args.len() >= self.arity {
            return (self.body)(&args[..self.arity]);
        }
        let mut padded = args.to_vec();
        padded.resize(self.arity, V::default());
        (self.body)(&padded)
    }
}

impl<V> fmt::Debug for GenericPredicate<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericPredicate")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_by_arity() {
        let rules: Vec<GenericPredicate<i64>> = vec![
            GenericPredicate::nullary(|| true),
            GenericPredicate::unary(|a| *a > 0),
            GenericPredicate::binary(|a, b| a < b),
            GenericPredicate::ternary(|a, b, c| a + b == *c),
            GenericPredicate::quaternary(|a, b, c, d| a * b == c * d),
        ];

        assert!(rules[0].test(&[]).unwrap());
        assert!(rules[1].test(&[5]).unwrap());
        assert!(!rules[2].test(&[5, 3]).unwrap());
        assert!(rules[3].test(&[1, 2, 3]).unwrap());
        assert!(rules[4].test(&[2, 6, 3, 4]).unwrap());

        for (arity, rule) in rules.iter().enumerate() {
            assert_eq!(rule.arity(), arity);
        }
    }

    #[test]
    fn test_wrong_arity_is_an_error() {
        let unary = GenericPredicate::unary(|a: &i32| *a > 0);

        match unary.test(&[1, 2, 3]) {
            Err(Error::Arity { expected, actual }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 3);
            }
            other => panic!("expected arity error, got {other:?}"),
        }
        assert!(unary.test(&[]).is_err());
    }

    #[test]
    fn test_padded_fills_missing_with_default() {
        let both_empty = GenericPredicate::binary(|a: &String, b: &String| a.is_empty() && b.is_empty());

        assert!(both_empty.test_padded(&[]));
        assert!(!both_empty.test_padded(&["x".to_string()]));
        assert!(both_empty.test_padded(&[String::new(), String::new(), "ignored".to_string()]));
    }

    #[test]
    fn test_variadic_sees_every_argument() {
        let ascending = GenericPredicate::variadic(5, |args: &[u8]| args.windows(2).all(|w| w[0] < w[1]));

        assert!(ascending.test(&[1, 2, 3, 4, 5]).unwrap());
        assert!(!ascending.test(&[1, 2, 9, 4, 5]).unwrap());
        assert_eq!(format!("{ascending:?}"), "GenericPredicate { arity: 5, .. }");
    }
}
