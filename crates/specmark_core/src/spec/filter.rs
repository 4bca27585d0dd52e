//! Collection filtering through one specification.
//!
//! # Invariants
//! - Output keeps the relative order of the input.
//! - Input items and the predicate are only read, never mutated.
//! - The first evaluation error aborts eager filtering and is returned.

use super::{SpecResult, Specification};
use log::debug;

/// Returns the items satisfying `spec`, in input order.
///
/// # Errors
/// - Returns the first `SpecError` raised while evaluating an item.
pub fn filter<'a, T, S>(items: &'a [T], spec: &S) -> SpecResult<Vec<&'a T>>
where
    S: Specification<T> + ?Sized,
{
    let mut matched = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match spec.is_satisfied(item) {
            Ok(true) => matched.push(item),
            Ok(false) => {}
            Err(err) => {
                debug!(
                    "event=spec_filter module=spec status=error total={} index={} error={}",
                    items.len(),
                    index,
                    err
                );
                return Err(err);
            }
        }
    }

    debug!(
        "event=spec_filter module=spec status=ok total={} matched={}",
        items.len(),
        matched.len()
    );
    Ok(matched)
}

/// Counts the items satisfying `spec`.
pub fn count_matching<T, S>(items: &[T], spec: &S) -> SpecResult<usize>
where
    S: Specification<T> + ?Sized,
{
    filter_iter(items.iter(), spec).try_fold(0, |count, item| item.map(|_| count + 1))
}

/// Lazily yields matching items from any iterator of references.
///
/// Non-matching items are skipped; evaluation errors are yielded in place so
/// callers decide whether to stop or continue.
pub fn filter_iter<'a, 's, T, S, I>(items: I, spec: &'s S) -> FilterIter<'s, I, S>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    FilterIter { items, spec }
}

/// Iterator returned by `filter_iter`.
pub struct FilterIter<'s, I, S: ?Sized> {
    items: I,
    spec: &'s S,
}

impl<'a, 's, T, I, S> Iterator for FilterIter<'s, I, S>
where
    T: 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = SpecResult<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.items.by_ref() {
            match self.spec.is_satisfied(item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => continue,
                Err(err) => return Some(Err(err)),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::{count_matching, filter, filter_iter};
    use crate::spec::{from_fn, SpecError, SpecResult, Specification};

    struct RejectsSeven;

    impl Specification<u32> for RejectsSeven {
        fn is_satisfied(&self, item: &u32) -> SpecResult<bool> {
            if *item == 7 {
                return Err(SpecError::MissingField("seven".to_string()));
            }
            Ok(item % 2 == 1)
        }
    }

    #[test]
    fn filter_keeps_input_order() {
        let items = [5_u32, 2, 9, 4, 1];
        let odd = from_fn(|n: &u32| n % 2 == 1);
        let matched = filter(&items, &odd).unwrap();
        assert_eq!(matched, vec![&5, &9, &1]);
    }

    #[test]
    fn filter_on_empty_input_is_empty() {
        let items: [u32; 0] = [];
        let any = from_fn(|_: &u32| true);
        assert!(filter(&items, &any).unwrap().is_empty());
        assert_eq!(count_matching(&items, &any).unwrap(), 0);
    }

    #[test]
    fn filter_returns_first_error() {
        let items = [1_u32, 7, 3];
        let err = filter(&items, &RejectsSeven).unwrap_err();
        assert_eq!(err, SpecError::MissingField("seven".to_string()));
        assert!(count_matching(&items, &RejectsSeven).is_err());
    }

    #[test]
    fn filter_iter_yields_errors_in_place() {
        let items = [1_u32, 2, 7, 3];
        let results: Vec<_> = filter_iter(items.iter(), &RejectsSeven).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(&1));
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok(&3));
    }

    #[test]
    fn filter_accepts_trait_objects() {
        let items = [10_u32, 11, 12];
        let spec: Box<dyn Specification<u32>> = Box::new(from_fn(|n: &u32| *n > 10));
        assert_eq!(filter(&items, spec.as_ref()).unwrap(), vec![&11, &12]);
        assert_eq!(count_matching(&items, &spec).unwrap(), 2);
    }
}
