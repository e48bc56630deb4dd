//! Stacking order of the files of a series.
//!
//! Files are ordered by their image type first,
//! so that original volumes come before derived (resampled) volumes,
//! which come before label images.
//! Files with the same image type are ordered by their extents.
use crate::descriptor::FileDescriptor;
use std::cmp::Ordering;

/// The index of the first image type term which takes part in the ordering.
/// The terms before it describe pixel characteristics.
const FIRST_ORDERED_TERM: usize = 2;

/// Compare two descriptors for stacking order.
///
/// The image types are split into terms at backslashes,
/// and the terms from the third onwards are compared
/// up to the shorter term count.
/// At the first term which differs,
/// the order is descending if it is not the last term compared,
/// and ascending if it is.
/// If all those terms are equal but the image types are not,
/// the whole image types are compared.
/// Descriptors with equal image types are compared by
/// width and then height, ascending.
///
/// This ordering is antisymmetric,
/// but it is not necessarily transitive across
/// more than three distinct image types.
pub fn compare_descriptors(a: &FileDescriptor, b: &FileDescriptor) -> Ordering {
    let ta: Vec<&str> = a.image_type().split('\\').collect();
    let tb: Vec<&str> = b.image_type().split('\\').collect();
    let n = ta.len().min(tb.len());

    for i in FIRST_ORDERED_TERM..n {
        if ta[i] != tb[i] {
            return if i < n - 1 {
                tb[i].cmp(ta[i])
            } else {
                ta[i].cmp(tb[i])
            };
        }
    }

    a.image_type()
        .cmp(b.image_type())
        .then_with(|| a.size_x().cmp(&b.size_x()))
        .then_with(|| a.size_y().cmp(&b.size_y()))
}

/// Sort the descriptors of a series into stacking order.
///
/// The sort is stable:
/// descriptors which compare equal keep their relative order.
pub fn sort_series(descriptors: &mut [FileDescriptor]) {
    // insertion sort, which stays well defined
    // if the comparison is not transitive
    for i in 1..descriptors.len() {
        let mut j = i;
        while j > 0 && compare_descriptors(&descriptors[j - 1], &descriptors[j]) == Ordering::Greater
        {
            descriptors.swap(j - 1, j);
            j -= 1;
        }
    }
}
