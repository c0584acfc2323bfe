use crate::matrix::Matrix;
use serde::Serialize;

/// Coarse magnitude class of a matrix cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Zero cells are never highlighted.
    #[default]
    None,
    Low,
    Mid,
    High,
}

/// Split the non-zero cells into three equal-width bands between the smallest
/// non-zero value and the largest value.
pub fn highlight_bands<T>(matrix: &Matrix<T>) -> Matrix<Band>
where
    T: Copy + Into<f64>,
{
    let values = || matrix.values().map(|&v| -> f64 { v.into() });
    let min = values().filter(|&v| v > 0.0).fold(f64::INFINITY, f64::min);
    if !min.is_finite() {
        return matrix.map(|_| Band::None);
    }
    let max = values().fold(f64::NEG_INFINITY, f64::max);
    let third = (max - min) / 3.0;

    matrix.map(|&v| {
        let v: f64 = v.into();
        if v == 0.0 {
            Band::None
        } else if v <= min + third {
            Band::Low
        } else if v <= min + 2.0 * third {
            Band::Mid
        } else {
            Band::High
        }
    })
}
