//! Slide ordering rules.
//!
//! `slide_order` values within one project always form the contiguous
//! sequence `1..=N`. The storage layer only guarantees uniqueness, so every
//! insert, delete and move goes through these helpers.

use crate::error::CoreError;

/// Check that `orders` is a permutation of `1..=orders.len()`.
pub fn validate_contiguous(orders: &[i32]) -> Result<(), CoreError> {
    let mut sorted = orders.to_vec();
    sorted.sort_unstable();
    for (expected, actual) in (1..).zip(sorted.iter()) {
        if *actual != expected {
            return Err(CoreError::Validation(format!(
                "slide_order must be contiguous from 1, expected {expected} but found {actual}"
            )));
        }
    }
    Ok(())
}

/// The order value a slide appended to a project with `count` slides receives.
pub fn next_slide_order(count: usize) -> i32 {
    count as i32 + 1
}

/// Validate a 1-based slide order against the number of slides in a project.
pub fn validate_slide_order(order: i32, count: usize) -> Result<(), CoreError> {
    if order < 1 || order as usize > count {
        return Err(CoreError::Validation(format!(
            "slide_order {order} is out of range (1..={count})"
        )));
    }
    Ok(())
}

/// Validate a 0-based slide index against the number of slides.
pub fn validate_index(index: usize, count: usize) -> Result<(), CoreError> {
    if index >= count {
        return Err(CoreError::Validation(format!(
            "slide index {index} is out of range (0..{count})"
        )));
    }
    Ok(())
}

/// Move the element at `from` to position `to`, shifting the ones between.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<(), CoreError> {
    validate_index(from, items.len())?;
    validate_index(to, items.len())?;
    let item = items.remove(from);
    items.insert(to, item);
    Ok(())
}

/// Compute the new order value for every slide after moving the slide at
/// order `from` to order `to`. Returns `(old_order, new_order)` pairs for the
/// slides whose order changes.
pub fn reorder_plan(from: i32, to: i32, count: usize) -> Result<Vec<(i32, i32)>, CoreError> {
    validate_slide_order(from, count)?;
    validate_slide_order(to, count)?;

    let mut orders: Vec<i32> = (1..=count as i32).collect();
    move_item(&mut orders, (from - 1) as usize, (to - 1) as usize)?;

    Ok(orders
        .into_iter()
        .zip(1..)
        .filter(|(old, new)| old != new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn contiguous_orders_pass_in_any_order() {
        assert!(validate_contiguous(&[2, 1, 3]).is_ok());
        assert!(validate_contiguous(&[]).is_ok());
    }

    #[test]
    fn gaps_and_duplicates_fail() {
        assert_matches!(validate_contiguous(&[1, 3]), Err(CoreError::Validation(_)));
        assert_matches!(validate_contiguous(&[1, 1]), Err(CoreError::Validation(_)));
        assert_matches!(validate_contiguous(&[0, 1]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn next_order_appends() {
        assert_eq!(next_slide_order(0), 1);
        assert_eq!(next_slide_order(3), 4);
    }

    #[test]
    fn move_item_shifts_neighbours() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        move_item(&mut items, 0, 2).unwrap();
        assert_eq!(items, vec!['b', 'c', 'a', 'd']);
        move_item(&mut items, 3, 0).unwrap();
        assert_eq!(items, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn move_item_out_of_range_fails() {
        let mut items = vec![1, 2];
        assert_matches!(move_item(&mut items, 2, 0), Err(CoreError::Validation(_)));
        assert_eq!(items, vec![1, 2]);
    }

    #[test]
    fn reorder_plan_forward_move() {
        // Slide 1 moves to position 3: 2 -> 1, 3 -> 2, 1 -> 3.
        let plan = reorder_plan(1, 3, 4).unwrap();
        assert_eq!(plan, vec![(2, 1), (3, 2), (1, 3)]);
    }

    #[test]
    fn reorder_plan_noop_is_empty() {
        assert!(reorder_plan(2, 2, 3).unwrap().is_empty());
    }

    #[test]
    fn reorder_plan_rejects_out_of_range() {
        assert_matches!(reorder_plan(0, 1, 3), Err(CoreError::Validation(_)));
        assert_matches!(reorder_plan(1, 4, 3), Err(CoreError::Validation(_)));
    }
}
