//! The four array exercises.
//!
//! Each function works on a plain slice or `Vec`. `is_array` is the only
//! one that needs the dynamic `serde_json::Value` model, since it has to
//! accept values of any shape.

use serde_json::Value;

/// Returns `true` when `input` is a sequence container.
///
/// Strings, numbers, booleans, `null` and objects are not sequences.
pub fn is_array(input: &Value) -> bool {
    input.is_array()
}

/// Shallow copy: a new container holding a clone of every element, in order.
///
/// Elements keep their own `Clone` semantics, so
/// [`Shared`](crate::domain::model::Shared) elements end up pointing at the
/// same allocation in both containers.
pub fn clone_array<T: Clone>(array: &[T]) -> Vec<T> {
    array.iter().cloned().collect()
}

/// Keeps the first occurrence of every distinct element.
///
/// Element types are only required to be `PartialEq` (`Value` is not
/// `Hash`), so membership is a linear scan of the output so far.
pub fn no_repeated<T: PartialEq + Clone>(array: &[T]) -> Vec<T> {
    no_repeated_by(array, T::eq)
}

/// [`no_repeated`] with a caller-supplied equality.
pub fn no_repeated_by<T, F>(array: &[T], same: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut unique: Vec<T> = Vec::with_capacity(array.len());

    for element in array {
        if !unique.iter().any(|kept| same(kept, element)) {
            unique.push(element.clone());
        }
    }
    unique
}

/// Element equality for dynamic values.
///
/// Primitives compare by value, with numbers compared as `f64` so `1` and
/// `1.0` are the same number. Arrays and objects compare by identity: every
/// parsed literal is its own container, so two of them are never the same.
pub fn same_element(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => false,
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Reverses by popping from the tail of `array` and pushing onto the result.
///
/// `array` is drained: it is empty when this returns.
pub fn reverse<T>(array: &mut Vec<T>) -> Vec<T> {
    let mut reversed = Vec::with_capacity(array.len());

    while let Some(element) = array.pop() {
        reversed.push(element);
    }
    reversed
}

/// Like [`reverse`], but works on a copy and leaves `array` untouched.
pub fn reverse_copy<T: Clone>(array: &[T]) -> Vec<T> {
    let mut working = clone_array(array);
    reverse(&mut working)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Shared;
    use serde_json::json;

    #[test]
    fn test_is_array() {
        assert!(!is_array(&json!("Hello")));
        assert!(!is_array(&json!(123)));
        assert!(!is_array(&json!({"length": 1})));
        assert!(!is_array(&Value::Null));
        assert!(is_array(&json!(["Hello"])));
        assert!(is_array(&json!([])));
        assert!(is_array(&json!([1, 2, 3])));
        assert!(is_array(&json!([[1], [2, [3]]])));
    }

    #[test]
    fn test_clone_array_is_independent() {
        let original = vec![json!(1), json!(2), json!([1, 2, 3])];
        let mut copy = clone_array(&original);

        assert_eq!(copy, original);
        copy.push(json!(4));
        assert_eq!(original.len(), 3);
        assert_eq!(copy.len(), 4);
    }

    #[test]
    fn test_clone_array_shares_compound_elements() {
        let nested = Shared::new(vec![1, 2, 3]);
        let original = vec![nested.clone(), Shared::new(vec![4])];
        let copy = clone_array(&original);

        assert!(copy[0].ptr_eq(&nested));
        assert!(copy[1].ptr_eq(&original[1]));
        assert_ne!(copy.as_ptr(), original.as_ptr());
    }

    #[test]
    fn test_clone_array_empty() {
        let empty: Vec<Value> = Vec::new();
        assert!(clone_array(&empty).is_empty());
    }

    #[test]
    fn test_no_repeated() {
        assert_eq!(
            no_repeated(&["a", "b", "b", "c", "c", "c"]),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            no_repeated(&["a", "a", "b", "b", "c", "c", "c"]),
            vec!["a", "b", "c"]
        );
        assert!(no_repeated::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_no_repeated_keeps_first_occurrence_order() {
        assert_eq!(no_repeated(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }

    #[test]
    fn test_no_repeated_by_value_for_json() {
        let input = vec![json!(1), json!("1"), json!([1, 2]), json!([1, 2]), json!(1)];
        assert_eq!(no_repeated(&input), vec![json!(1), json!("1"), json!([1, 2])]);
    }

    #[test]
    fn test_no_repeated_by_identity_for_shared() {
        let first = Shared::new(vec![1]);
        let look_alike = Shared::new(vec![1]);
        let input = vec![first.clone(), look_alike.clone(), first.clone()];

        let unique = no_repeated(&input);
        assert_eq!(unique.len(), 2);
        assert!(unique[0].ptr_eq(&first));
        assert!(unique[1].ptr_eq(&look_alike));
    }

    #[test]
    fn test_same_element_treats_containers_as_distinct() {
        let input = vec![json!([2]), json!([2]), json!({"a": 1}), json!({"a": 1})];
        assert_eq!(no_repeated_by(&input, same_element), input);
    }

    #[test]
    fn test_same_element_compares_numbers_as_f64() {
        let input = vec![json!(1), json!(1.0), json!("1"), json!(-3), json!(-3.0)];
        assert_eq!(
            no_repeated_by(&input, same_element),
            vec![json!(1), json!("1"), json!(-3)]
        );
        assert!(same_element(&json!(null), &json!(null)));
        assert!(!same_element(&json!(true), &json!(1)));
    }

    #[test]
    fn test_reverse_drains_input() {
        let mut input = vec!["a", "b", "c"];
        assert_eq!(reverse(&mut input), vec!["c", "b", "a"]);
        assert!(input.is_empty());

        let mut numbers = vec![1, 2, 4, 5, 6];
        assert_eq!(reverse(&mut numbers), vec![6, 5, 4, 2, 1]);
    }

    #[test]
    fn test_reverse_matches_builtin() {
        let original = vec![json!("a"), json!(2), json!([3]), json!(null)];
        let mut expected = original.clone();
        expected.reverse();

        let mut input = original.clone();
        assert_eq!(reverse(&mut input), expected);
    }

    #[test]
    fn test_reverse_copy_leaves_input() {
        let input = vec![1, 2, 3];
        assert_eq!(reverse_copy(&input), vec![3, 2, 1]);
        assert_eq!(input, vec![1, 2, 3]);
    }
}
