#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Applies `op` to every element, potentially in parallel.
#[cfg(feature = "rayon")]
#[inline]
pub(crate) fn map_elements<T, U, OP>(input: &[T], op: OP) -> Vec<U>
where
    T: Sync,
    U: Send,
    OP: Fn(&T) -> U + Sync + Send,
{
    input.par_iter().map(op).collect()
}

/// Applies `op` to every element.
#[cfg(not(feature = "rayon"))]
#[inline]
pub(crate) fn map_elements<T, U, OP>(input: &[T], op: OP) -> Vec<U>
where
    T: Sync,
    U: Send,
    OP: Fn(&T) -> U + Sync + Send,
{
    input.iter().map(op).collect()
}
