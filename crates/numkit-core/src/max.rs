//! Linear-scan maximum finder.

/// Return the greatest element of `values`, or `None` if it is empty.
///
/// The running maximum starts at the first element and is replaced only by a
/// strictly greater one, so among equal maxima the earliest wins. Elements that
/// do not compare with the running maximum (a floating-point `NaN`) never
/// replace it.
///
/// # Example
/// ```
/// use numkit_core::find_max;
///
/// assert_eq!(find_max(&[3, 7, 2, 9, 1, 5]), Some(9));
/// assert_eq!(find_max::<i32>(&[]), None);
/// ```
pub fn find_max<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    let (&first, rest) = values.split_first()?;
    let mut max = first;
    for &value in rest {
        if value > max {
            max = value;
        }
    }
    Some(max)
}
