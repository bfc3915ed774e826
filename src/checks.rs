use crate::error::{Error, Result};
use std::{fmt::Debug, ops::RangeBounds};

pub fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        return Err(Error::InvalidParameters(format!(
            "number must be in the range {range:?}, but is {num:?}"
        )));
    }
    Ok(())
}

pub fn check_len<T>(vec: &[T], exp_len: usize) -> Result<()> {
    let len = vec.len();
    if len != exp_len {
        return Err(Error::InvalidParameters(format!(
            "vector length must be {exp_len}, but is {len}"
        )));
    }
    Ok(())
}

/// Check a vector of proportions: expected length, non-negative elements
/// and a sum of exactly 1.0.
pub fn check_prop_vec(vec: &[f64], exp_len: usize) -> Result<()> {
    check_len(vec, exp_len)?;
    if vec.iter().any(|ele| ele.is_nan() || *ele < 0.0) {
        return Err(Error::InvalidParameters(
            "vector must have only non-negative elements".to_string(),
        ));
    }
    let sum: f64 = vec.iter().sum();
    if sum != 1.0 {
        return Err(Error::InvalidParameters(format!(
            "vector must sum to exactly 1.0, but sums to {sum}"
        )));
    }
    Ok(())
}
