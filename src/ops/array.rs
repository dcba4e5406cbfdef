//! Index-based operations over an integer array.
//!
//! Insert and delete simulate a fixed-size array: each builds a new sequence
//! rather than growing the old one in place, so the input is never modified.
//! Update is the lone in-place mutation. The two groups deliberately report
//! failure differently: insert/delete raise [`OpsError::IndexOutOfRange`],
//! while update answers with a plain boolean.

use crate::error::{OpsError, Result};

/// Returns a new array of length `arr.len() + 1` with `element` at `index`
/// and every element at or after `index` shifted one slot right. Elements
/// before `index` keep their positions.
///
/// An `index` equal to `arr.len()` appends.
///
/// # Errors
///
/// Fails with [`OpsError::IndexOutOfRange`] if `index > arr.len()`. The
/// input is validated before anything is allocated, so a failed call leaves
/// no partial result behind.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Every element of the input is copied into the new
/// array, regardless of the insertion index.
///
/// # Examples
///
/// ```
/// use dsa_ops::ops::array;
///
/// let arr = [10, 20, 30, 40, 50];
///
/// assert_eq!(array::insert_at(&arr, 2, 35).unwrap(), [10, 20, 35, 30, 40, 50]);
/// assert_eq!(array::insert_at(&arr, 5, 60).unwrap(), [10, 20, 30, 40, 50, 60]);
///
/// assert!(array::insert_at(&arr, 6, 60).is_err());
/// ```
pub fn insert_at(arr: &[i32], index: usize, element: i32) -> Result<Vec<i32>> {
    if index > arr.len() {
        return Err(OpsError::IndexOutOfRange {
            index,
            len: arr.len(),
        });
    }

    let mut out = Vec::with_capacity(arr.len() + 1);
    out.extend_from_slice(&arr[..index]);
    out.push(element);
    out.extend_from_slice(&arr[index..]);

    Ok(out)
}

/// Returns a new array of length `arr.len() - 1` with the element at `index`
/// removed and every subsequent element shifted one slot left.
///
/// # Errors
///
/// Fails with [`OpsError::IndexOutOfRange`] if `index >= arr.len()`. Note
/// that an empty array rejects every index.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Every surviving element of the input is copied into
/// the new array.
///
/// # Examples
///
/// ```
/// use dsa_ops::ops::array;
///
/// let arr = [10, 20, 35, 30, 40, 50];
///
/// assert_eq!(array::delete_at(&arr, 3).unwrap(), [10, 20, 35, 40, 50]);
/// assert_eq!(array::delete_at(&arr, 0).unwrap(), [20, 35, 30, 40, 50]);
///
/// assert!(array::delete_at(&arr, 6).is_err());
/// assert!(array::delete_at(&[], 0).is_err());
/// ```
pub fn delete_at(arr: &[i32], index: usize) -> Result<Vec<i32>> {
    if index >= arr.len() {
        return Err(OpsError::IndexOutOfRange {
            index,
            len: arr.len(),
        });
    }

    let mut out = Vec::with_capacity(arr.len() - 1);
    out.extend_from_slice(&arr[..index]);
    out.extend_from_slice(&arr[index + 1..]);

    Ok(out)
}

/// Returns the index of the first element equal to `target`, or [`None`] if
/// the value is absent. A miss is not an error.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. The array is scanned from index 0 until a match is
/// found or the whole array has been checked.
///
/// # Examples
///
/// ```
/// use dsa_ops::ops::array;
///
/// let arr = [10, 20, 35, 40, 50];
///
/// assert_eq!(array::search(&arr, 35), Some(2));
/// assert_eq!(array::search(&arr, 99), None);
/// ```
pub fn search(arr: &[i32], target: i32) -> Option<usize> {
    for (i, &elem) in arr.iter().enumerate() {
        if elem == target {
            return Some(i);
        }
    }

    None
}

/// Overwrites the element at `index` with `new_value`, in place. Returns
/// `true` on success and `false` if `index` is out of range.
///
/// Unlike [`insert_at`] and [`delete_at`], an invalid index here is not an
/// error: the caller gets `false` and the array is untouched.
///
/// # Time Complexity
///
/// Takes *O*(1) time. Only the addressed slot is written.
///
/// # Examples
///
/// ```
/// use dsa_ops::ops::array;
///
/// let mut arr = [10, 20, 35, 40, 50];
///
/// assert!(array::update(&mut arr, 2, 45));
/// assert_eq!(arr, [10, 20, 45, 40, 50]);
///
/// assert!(!array::update(&mut arr, 5, 99));
/// assert_eq!(arr, [10, 20, 45, 40, 50]);
/// ```
pub fn update(arr: &mut [i32], index: usize, new_value: i32) -> bool {
    match arr.get_mut(index) {
        Some(slot) => {
            *slot = new_value;
            true
        }
        None => false,
    }
}
