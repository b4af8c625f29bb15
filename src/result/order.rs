//! Score orderings used to rank results across shards.
//!
//! Both comparators treat equal scores as [`Ordering::Equal`] and apply no
//! tie-break. Sorting with them only keeps the original relative order of
//! tied results when the sort is stable (`slice::sort_by` is;
//! `sort_unstable_by` is not). NaN scores compare equal to everything.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Anything that carries a relevance score.
pub trait Scored {
    fn score(&self) -> f32;
}

impl<T: Scored + ?Sized> Scored for &T {
    fn score(&self) -> f32 {
        (**self).score()
    }
}

/// `a` precedes `b` iff `a.score() > b.score()`.
pub fn descending_order<T: Scored + ?Sized>(a: &T, b: &T) -> Ordering {
    b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal)
}

/// `a` precedes `b` iff `a.score() < b.score()`.
pub fn ascending_order<T: Scored + ?Sized>(a: &T, b: &T) -> Ordering {
    a.score().partial_cmp(&b.score()).unwrap_or(Ordering::Equal)
}

/// Direction of a score ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreOrder {
    /// Highest score first.
    #[default]
    Descending,
    /// Lowest score first.
    Ascending,
}

impl ScoreOrder {
    /// Compare two scored values in this direction.
    pub fn compare<T: Scored + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        match self {
            ScoreOrder::Descending => descending_order(a, b),
            ScoreOrder::Ascending => ascending_order(a, b),
        }
    }

    /// Stable-sort `items` in this direction.
    pub fn sort<T: Scored>(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// The opposite direction.
    pub fn reverse(&self) -> ScoreOrder {
        match self {
            ScoreOrder::Descending => ScoreOrder::Ascending,
            ScoreOrder::Ascending => ScoreOrder::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Hit(f32, &'static str);

    impl Scored for Hit {
        fn score(&self) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_orders_are_mirror_images() {
        let pairs = [(0.1, 0.9), (2.0, -1.0), (0.0, f32::MIN_POSITIVE)];
        for (x, y) in pairs {
            let a = Hit(x, "a");
            let b = Hit(y, "b");
            assert_ne!(descending_order(&a, &b), Ordering::Equal);
            assert_eq!(descending_order(&a, &b), ascending_order(&b, &a));
            assert_eq!(descending_order(&a, &b), ascending_order(&a, &b).reverse());
        }
    }

    #[test]
    fn test_equal_scores_compare_equal() {
        let a = Hit(0.5, "a");
        let b = Hit(0.5, "b");
        assert_eq!(descending_order(&a, &b), Ordering::Equal);
        assert_eq!(ascending_order(&a, &b), Ordering::Equal);

        let nan = Hit(f32::NAN, "nan");
        assert_eq!(descending_order(&a, &nan), Ordering::Equal);
    }

    #[test]
    fn test_stable_sort_keeps_tied_order() {
        let mut hits = vec![
            Hit(0.2, "first-low"),
            Hit(0.8, "first-high"),
            Hit(0.2, "second-low"),
            Hit(0.8, "second-high"),
        ];

        ScoreOrder::Descending.sort(&mut hits);
        let names: Vec<_> = hits.iter().map(|h| h.1).collect();
        assert_eq!(names, vec!["first-high", "second-high", "first-low", "second-low"]);

        ScoreOrder::Ascending.sort(&mut hits);
        let names: Vec<_> = hits.iter().map(|h| h.1).collect();
        assert_eq!(names, vec!["first-low", "second-low", "first-high", "second-high"]);
    }

    #[test]
    fn test_reverse() {
        assert_eq!(ScoreOrder::Descending.reverse(), ScoreOrder::Ascending);
        assert_eq!(ScoreOrder::default(), ScoreOrder::Descending);
    }
}
