//! Counting matrices up to row and column permutation.

use polya_integers::Rational;
use tracing::debug;

use crate::CycleIndexCache;

/// Number of `width × height` matrices with entries from an alphabet of
/// `symbols` letters, where two matrices are identified when one is obtained
/// from the other by permuting rows and columns.
///
/// Computed as `(Z(S_width) ⊗ Z(S_height))` with every variable set to
/// `symbols`. The result is always an integer.
pub fn count_matrices(
    cache: &mut CycleIndexCache,
    width: usize,
    height: usize,
    symbols: impl Into<Rational>,
) -> Rational {
    let columns = cache.symmetric(width).clone();
    let rows = cache.symmetric(height);
    let product = columns.direct_product(rows);
    let count = product.eval_all(symbols);
    debug!(width, height, terms = product.len(), %count, "counted matrices");
    count
}
