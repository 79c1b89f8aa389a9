//! Exact null-space solver for the conservation matrix.
//!
//! ## Method
//! Gauss-Jordan elimination over rationals brings the matrix to reduced row
//! echelon form. A balanceable equation leaves at least one column without a
//! pivot. Every free column gets coefficient 1, the pivot columns follow by
//! back-substitution, and the rational vector is scaled to the smallest
//! integer vector with a common sign.
use crate::Balancer::errors::BalanceError;
use crate::Balancer::fraction::{Frac, gcd, lcm};
use log::debug;

/// Solves A*x = 0 for the smallest integer x, one entry per matrix column.
/// A matrix with no rows gives an empty vector, a matrix of full column
/// rank has only the trivial solution and is reported as unbalanceable.
pub fn solve(matrix: &[Vec<i64>]) -> Result<Vec<i64>, BalanceError> {
    if matrix.is_empty() {
        return Ok(Vec::new());
    }
    let rows = matrix.len();
    let cols = matrix[0].len();
    let mut a: Vec<Vec<Frac>> = matrix
        .iter()
        .map(|row| row.iter().map(|&x| Frac::from_int(x)).collect())
        .collect();

    let mut pivot_cols: Vec<usize> = Vec::new();
    let mut r = 0;
    for c in 0..cols {
        if r >= rows {
            break;
        }
        // a column with no usable pivot at or below r stays free
        let mut pivot = None;
        for k in r..rows {
            if !a[k][c].is_zero() {
                pivot = Some(k);
                break;
            }
        }
        let pivot = match pivot {
            Some(p) => p,
            None => continue,
        };
        a.swap(r, pivot);
        let lead = a[r][c];
        for j in c..cols {
            a[r][j] = a[r][j].checked_div(lead)?;
        }
        for k in 0..rows {
            if k != r && !a[k][c].is_zero() {
                let factor = a[k][c];
                for j in c..cols {
                    a[k][j] = a[k][j] - factor * a[r][j];
                }
            }
        }
        pivot_cols.push(c);
        r += 1;
    }

    let free_cols: Vec<usize> = (0..cols).filter(|c| !pivot_cols.contains(c)).collect();
    if free_cols.is_empty() {
        return Err(BalanceError::NoSolution);
    }

    // one unit in every free column, pivots by back-substitution in reverse
    // pivot order
    let mut sol = vec![Frac::from_int(0); cols];
    for &c in free_cols.iter() {
        sol[c] = Frac::from_int(1);
    }
    for (row, &c) in pivot_cols.iter().enumerate().rev() {
        let mut acc = Frac::from_int(0);
        for j in (c + 1)..cols {
            acc = acc + a[row][j] * sol[j];
        }
        sol[c] = -acc;
    }

    // clear the denominators, then divide out the collective GCD
    let mut common_den = 1i64;
    for f in sol.iter() {
        common_den = lcm(common_den, f.den());
    }
    let mut ints: Vec<i64> = sol
        .iter()
        .map(|f| f.num() * (common_den / f.den()))
        .collect();
    let mut g = 0i64;
    for &x in ints.iter() {
        g = gcd(g, x);
    }
    if g == 0 {
        g = 1;
    }
    for x in ints.iter_mut() {
        *x /= g;
    }
    if ints.iter().any(|&x| x < 0) {
        for x in ints.iter_mut() {
            *x = -*x;
        }
    }
    if ints.iter().all(|&x| x == 0) {
        let mut trivial = vec![0i64; cols];
        if let Some(last) = trivial.last_mut() {
            *last = 1;
        }
        return Ok(trivial);
    }
    debug!("solver produced coefficients {:?}", ints);
    Ok(ints)
}
