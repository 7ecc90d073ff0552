//! Spatial coordinate grids over an aperture or sensor plane
//!
//! Grids follow image indexing: rows run along y, columns along x. Both
//! returned matrices share the same shape so they can be combined
//! element-wise.

use nalgebra::{convert, DMatrix, RealField};

use crate::error::Result;
use crate::params::{AxisPair, GridParameters, PixelNumber, Precision};
use crate::units::Axis;

/// Physical sample positions (meters) of a grid
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid<T: RealField> {
    pub x: DMatrix<T>,
    pub y: DMatrix<T>,
}

impl<T: RealField + Copy> CoordinateGrid<T> {
    /// (rows, columns), i.e. (y samples, x samples)
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// x coordinate of every column
    pub fn x_axis(&self) -> Vec<T> {
        self.x.row(0).iter().copied().collect()
    }

    /// y coordinate of every row
    pub fn y_axis(&self) -> Vec<T> {
        self.y.column(0).iter().copied().collect()
    }
}

/// Build the coordinate grid for the given sampling
///
/// In radially symmetric mode the grid is a single row of `r` samples
/// starting at the origin: `x = 0, dx, .., (r - 1) dx` and `y = 0`.
/// Otherwise the grid is `y` rows by `x` columns and each axis is centred
/// on zero by removing `(n - 1) / 2` samples, so even counts straddle the
/// origin and odd counts have a sample on it.
///
/// Values are computed in `T`, so the precision of the result is the
/// precision of the arithmetic.
pub fn coordinate_grid<T: RealField + Copy>(
    pixel_number: &PixelNumber,
    pixel_size: &AxisPair<f64>,
    radial_symmetry: bool,
) -> Result<CoordinateGrid<T>> {
    let (nx, ny, offset) = if radial_symmetry {
        let nr = pixel_number.count(Axis::R)?;
        (nr, 1, AxisPair::splat(convert::<f64, T>(0.0)))
    } else {
        let nx = pixel_number.count(Axis::X)?;
        let ny = pixel_number.count(Axis::Y)?;
        (nx, ny, AxisPair::new(centre_offset::<T>(nx), centre_offset::<T>(ny)))
    };

    let dx: T = convert(pixel_size.x);
    let dy: T = convert(pixel_size.y);

    let x = DMatrix::from_fn(ny, nx, |_, col| (sample::<T>(col) - offset.x) * dx);
    let y = DMatrix::from_fn(ny, nx, |row, _| (sample::<T>(row) - offset.y) * dy);

    tracing::debug!(
        rows = ny,
        cols = nx,
        radial_symmetry,
        "built coordinate grid"
    );

    Ok(CoordinateGrid { x, y })
}

fn sample<T: RealField>(index: usize) -> T {
    convert(index as f64)
}

fn centre_offset<T: RealField>(n: usize) -> T {
    convert((n - 1) as f64 / 2.0)
}

/// A coordinate grid whose precision was chosen at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AnyGrid {
    F32(CoordinateGrid<f32>),
    F64(CoordinateGrid<f64>),
}

impl AnyGrid {
    pub fn precision(&self) -> Precision {
        match self {
            AnyGrid::F32(_) => Precision::F32,
            AnyGrid::F64(_) => Precision::F64,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        match self {
            AnyGrid::F32(g) => g.shape(),
            AnyGrid::F64(g) => g.shape(),
        }
    }

    /// x axis widened to f64
    pub fn x_axis(&self) -> Vec<f64> {
        match self {
            AnyGrid::F32(g) => g.x_axis().into_iter().map(f64::from).collect(),
            AnyGrid::F64(g) => g.x_axis(),
        }
    }

    /// y axis widened to f64
    pub fn y_axis(&self) -> Vec<f64> {
        match self {
            AnyGrid::F32(g) => g.y_axis().into_iter().map(f64::from).collect(),
            AnyGrid::F64(g) => g.y_axis(),
        }
    }

    /// Both full matrices as row-major nested vectors, widened to f64
    pub fn to_rows(&self) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        match self {
            AnyGrid::F32(g) => (rows(&g.x.map(f64::from)), rows(&g.y.map(f64::from))),
            AnyGrid::F64(g) => (rows(&g.x), rows(&g.y)),
        }
    }
}

fn rows(m: &DMatrix<f64>) -> Vec<Vec<f64>> {
    m.row_iter().map(|r| r.iter().copied().collect()).collect()
}

/// Build a grid at the precision named in the parameters
pub fn coordinate_grid_with(params: &GridParameters) -> Result<AnyGrid> {
    let GridParameters {
        pixel_number,
        pixel_size_m,
        radial_symmetry,
        precision,
    } = params;

    Ok(match precision {
        Precision::F32 => AnyGrid::F32(coordinate_grid(pixel_number, pixel_size_m, *radial_symmetry)?),
        Precision::F64 => AnyGrid::F64(coordinate_grid(pixel_number, pixel_size_m, *radial_symmetry)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cartesian_even_grid() {
        let grid: CoordinateGrid<f64> = coordinate_grid(
            &PixelNumber::cartesian(4, 4),
            &AxisPair::splat(1.0),
            false,
        )
        .unwrap();

        assert_eq!(grid.shape(), (4, 4));
        assert_eq!(grid.x_axis(), vec![-1.5, -0.5, 0.5, 1.5]);
        assert_eq!(grid.y_axis(), vec![-1.5, -0.5, 0.5, 1.5]);

        // x is constant down a column, y along a row
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(grid.x[(r, c)], grid.x[(0, c)]);
                assert_eq!(grid.y[(r, c)], grid.y[(r, 0)]);
            }
        }
    }

    #[test]
    fn test_radial_grid() {
        let grid: CoordinateGrid<f64> =
            coordinate_grid(&PixelNumber::radial(5), &AxisPair::splat(2.0), true).unwrap();

        assert_eq!(grid.shape(), (1, 5));
        assert_eq!(grid.x_axis(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(grid.y_axis(), vec![0.0]);
        assert!(grid.y.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_radial_ignores_cartesian_counts() {
        let pixel_number = PixelNumber {
            x: Some(10),
            y: Some(10),
            r: Some(3),
        };
        let grid: CoordinateGrid<f64> =
            coordinate_grid(&pixel_number, &AxisPair::new(0.5, 7.0), true).unwrap();
        assert_eq!(grid.shape(), (1, 3));
        assert_eq!(grid.x_axis(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_rectangular_layout() {
        let grid: CoordinateGrid<f64> = coordinate_grid(
            &PixelNumber::cartesian(3, 2),
            &AxisPair::new(1.0, 10.0),
            false,
        )
        .unwrap();

        // rows = y, columns = x
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.y.shape(), (2, 3));
        assert_eq!(grid.x_axis(), vec![-1.0, 0.0, 1.0]);
        assert_eq!(grid.y_axis(), vec![-5.0, 5.0]);
    }

    #[test]
    fn test_centring_symmetry() {
        for n in 1..12 {
            let grid: CoordinateGrid<f64> =
                coordinate_grid(&PixelNumber::cartesian(n, 1), &AxisPair::splat(1.0), false)
                    .unwrap();
            let axis = grid.x_axis();

            for i in 0..n {
                assert!((axis[i] + axis[n - 1 - i]).abs() < 1e-12, "n = {}", n);
            }

            let zeros = axis.iter().filter(|&&v| v == 0.0).count();
            if n % 2 == 0 {
                assert_eq!(zeros, 0, "even n = {} must straddle zero", n);
            } else {
                assert_eq!(zeros, 1, "odd n = {} must sample zero once", n);
            }
        }
    }

    #[test]
    fn test_pixel_size_scaling() {
        let pixel_number = PixelNumber::cartesian(5, 6);
        let base: CoordinateGrid<f64> =
            coordinate_grid(&pixel_number, &AxisPair::new(3e-7, 4e-7), false).unwrap();
        let doubled: CoordinateGrid<f64> =
            coordinate_grid(&pixel_number, &AxisPair::new(6e-7, 4e-7), false).unwrap();

        for (a, b) in base.x.iter().zip(doubled.x.iter()) {
            assert!((b - 2.0 * a).abs() < 1e-18);
            assert_eq!(a.signum(), b.signum());
        }
        assert_eq!(base.y, doubled.y);

        let xs = doubled.x_axis();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_single_precision() {
        let grid: CoordinateGrid<f32> = coordinate_grid(
            &PixelNumber::cartesian(4, 2),
            &AxisPair::splat(0.25),
            false,
        )
        .unwrap();
        assert_eq!(grid.x_axis(), vec![-0.375f32, -0.125, 0.125, 0.375]);
        assert_eq!(grid.y_axis(), vec![-0.125f32, 0.125]);
    }

    #[test]
    fn test_missing_counts() {
        let result: Result<CoordinateGrid<f64>> =
            coordinate_grid(&PixelNumber::cartesian(4, 4), &AxisPair::splat(1.0), true);
        assert!(matches!(result, Err(Error::MissingPixelCount(Axis::R))));

        let result: Result<CoordinateGrid<f64>> =
            coordinate_grid(&PixelNumber::radial(4), &AxisPair::splat(1.0), false);
        assert!(matches!(result, Err(Error::MissingPixelCount(Axis::X))));
    }

    #[test]
    fn test_zero_count() {
        let result: Result<CoordinateGrid<f64>> =
            coordinate_grid(&PixelNumber::cartesian(4, 0), &AxisPair::splat(1.0), false);
        assert!(matches!(result, Err(Error::EmptyAxis(Axis::Y))));
    }

    #[test]
    fn test_runtime_precision() {
        let params = GridParameters {
            pixel_number: PixelNumber::cartesian(2, 3),
            pixel_size_m: AxisPair::splat(1.0),
            radial_symmetry: false,
            precision: Precision::F32,
        };

        let grid = coordinate_grid_with(&params).unwrap();
        assert_eq!(grid.precision(), Precision::F32);
        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid.x_axis(), vec![-0.5, 0.5]);
        assert_eq!(grid.y_axis(), vec![-1.0, 0.0, 1.0]);

        let (x_rows, y_rows) = grid.to_rows();
        assert_eq!(x_rows, vec![vec![-0.5, 0.5]; 3]);
        assert_eq!(y_rows, vec![vec![-1.0, -1.0], vec![0.0, 0.0], vec![1.0, 1.0]]);
    }
}
