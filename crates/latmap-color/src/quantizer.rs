//! Magnitude to color quantization
//!
//! The range `[min, max]` is cut into one equal-width bin per foreground
//! color. Zero always maps to the background color so that "no events" never
//! looks like "a few events".

use crate::scheme::ColorPalette;
use latmap_core::{Error, Result};
use latmap_density::DensityMatrix;
use num_traits::ToPrimitive;
use tracing::debug;

/// Maps values in a fixed range onto a palette
#[derive(Debug, Clone)]
pub struct ColorRampQuantizer<'a> {
    palette: &'a ColorPalette,
    min: f64,
    max: f64,
    bin_size: f64,
}

impl<'a> ColorRampQuantizer<'a> {
    /// Quantizer for values in `[min, max]`
    pub fn new(palette: &'a ColorPalette, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("color range"));
        }
        if min > max {
            return Err(Error::invalid_range(min, max));
        }
        if palette.is_empty() {
            return Err(Error::InvalidPalette(
                "at least one foreground color is required".to_string(),
            ));
        }
        let bin_size = (max - min) / palette.len() as f64;
        debug!(
            "color ramp over [{}, {}]: {} bins of {}",
            min,
            max,
            palette.len(),
            bin_size
        );
        Ok(Self {
            palette,
            min,
            max,
            bin_size,
        })
    }

    /// Quantizer whose range is the min and max of `values`
    pub fn from_values<V: ToPrimitive>(palette: &'a ColorPalette, values: &[V]) -> Result<Self> {
        let floats = to_f64_vec(values)?;
        let (min, max) = latmap_core::utils::min_max(&floats)?;
        Self::new(palette, min, max)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Width of one color bin
    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    /// Foreground bin of `value`, or `None` for zero
    ///
    /// # Errors
    ///
    /// [`Error::Computation`] if `value` is NaN or lies outside the range.
    pub fn bin_index(&self, value: f64) -> Result<Option<usize>> {
        if value == 0.0 {
            return Ok(None);
        }
        let classes = self.palette.len();
        let last = classes - 1;
        if value == self.max || self.bin_size == 0.0 {
            return if value == self.max {
                Ok(Some(last))
            } else {
                Err(self.out_of_range(value))
            };
        }

        let index = ((value - self.min) / self.bin_size)
            .floor()
            .to_usize()
            .ok_or_else(|| self.out_of_range(value))?;
        match index {
            i if i < classes => Ok(Some(i)),
            // Division rounding can push a value just below max into bin K
            i if i == classes && value <= self.max => Ok(Some(last)),
            _ => Err(self.out_of_range(value)),
        }
    }

    /// Color for one value
    pub fn color(&self, value: f64) -> Result<&'a str> {
        Ok(match self.bin_index(value)? {
            Some(i) => self.palette.foreground()[i].as_str(),
            None => self.palette.background(),
        })
    }

    /// Colors for a slice of values
    pub fn colors<V: ToPrimitive>(&self, values: &[V]) -> Result<Vec<&'a str>> {
        values
            .iter()
            .map(|v| to_f64(v).and_then(|x| self.color(x)))
            .collect()
    }

    fn out_of_range(&self, value: f64) -> Error {
        Error::Computation(format!(
            "color bin for {value} is outside [{}, {}]",
            self.min, self.max
        ))
    }
}

/// Color each value, with the range taken from the values themselves
///
/// ```rust
/// use latmap_color::{quantize, ColorRampScheme};
///
/// let palette = ColorRampScheme::Grey.palette();
/// let colors = quantize(&[0u64, 1, 5, 10], &palette).unwrap();
/// assert_eq!(colors, vec!["#ffffff", "#f0f0f0", "#737373", "#000000"]);
/// ```
pub fn quantize<'a, V: ToPrimitive>(values: &[V], palette: &'a ColorPalette) -> Result<Vec<&'a str>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    ColorRampQuantizer::from_values(palette, values)?.colors(values)
}

/// Color each value over a precomputed `[min, max]`
pub fn quantize_with_range<'a, V: ToPrimitive>(
    values: &[V],
    palette: &'a ColorPalette,
    min: f64,
    max: f64,
) -> Result<Vec<&'a str>> {
    ColorRampQuantizer::new(palette, min, max)?.colors(values)
}

/// Color every cell of a density matrix, row-major
///
/// The range is the smallest and largest cell in the matrix.
pub fn quantize_matrix<'a, R, C, V: ToPrimitive>(
    matrix: &DensityMatrix<R, C, V>,
    palette: &'a ColorPalette,
) -> Result<Vec<Vec<&'a str>>> {
    if matrix.cells().is_empty() {
        return Ok(Vec::new());
    }
    let quantizer = ColorRampQuantizer::from_values(palette, matrix.cells())?;
    matrix.rows().map(|row| quantizer.colors(row)).collect()
}

fn to_f64<V: ToPrimitive>(value: &V) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| Error::Computation("value is not representable as f64".to_string()))
}

fn to_f64_vec<V: ToPrimitive>(values: &[V]) -> Result<Vec<f64>> {
    values.iter().map(to_f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{ColorRampScheme, WHITE};

    fn palette() -> ColorPalette {
        ColorPalette::new(["#c0", "#c1", "#c2", "#c3"], WHITE).unwrap()
    }

    #[test]
    fn test_bins() {
        let palette = palette();
        // bin size (8 - 0) / 4 = 2
        let q = ColorRampQuantizer::new(&palette, 0.0, 8.0).unwrap();
        assert_eq!(q.bin_size(), 2.0);
        assert_eq!(q.bin_index(0.0).unwrap(), None);
        assert_eq!(q.bin_index(1.0).unwrap(), Some(0));
        assert_eq!(q.bin_index(2.0).unwrap(), Some(1));
        assert_eq!(q.bin_index(5.9).unwrap(), Some(2));
        assert_eq!(q.bin_index(8.0).unwrap(), Some(3));
        assert_eq!(q.color(7.0).unwrap(), "#c3");
        assert_eq!(q.color(0.0).unwrap(), WHITE);
    }

    #[test]
    fn test_zero_inside_range_uses_background() {
        let palette = palette();
        let q = ColorRampQuantizer::new(&palette, -4.0, 4.0).unwrap();
        assert_eq!(q.color(0.0).unwrap(), WHITE);
        assert_eq!(q.color(-4.0).unwrap(), "#c0");
        assert_eq!(q.color(0.5).unwrap(), "#c2");
    }

    #[test]
    fn test_degenerate_range() {
        let palette = palette();
        let colors = quantize(&[3u32, 3, 0], &palette).unwrap();
        // min is 0 here, so the range is not degenerate
        assert_eq!(colors, vec!["#c3", "#c3", WHITE]);

        let colors = quantize(&[3u32, 3], &palette).unwrap();
        assert_eq!(colors, vec!["#c3", "#c3"]);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let palette = palette();
        let q = ColorRampQuantizer::new(&palette, 1.0, 9.0).unwrap();
        assert!(matches!(q.bin_index(0.5), Err(Error::Computation(_))));
        assert!(matches!(q.bin_index(9.5), Err(Error::Computation(_))));
        assert!(q.bin_index(f64::NAN).is_err());
        assert!(quantize_with_range(&[4.0, 12.0], &palette, 1.0, 9.0).is_err());
    }

    #[test]
    fn test_invalid_range() {
        let palette = palette();
        assert!(matches!(
            ColorRampQuantizer::new(&palette, 5.0, 1.0),
            Err(Error::InvalidRange { .. })
        ));
        assert!(ColorRampQuantizer::new(&palette, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_values() {
        let palette = palette();
        assert!(quantize::<u64>(&[], &palette).unwrap().is_empty());
    }

    #[test]
    fn test_matrix() {
        let palette = ColorRampScheme::Grey.palette();
        let mut m = DensityMatrix::new([10], [100], 0u64);
        m.accumulate(&5, &50, |c| c + 8);
        m.accumulate(&15, &150, |c| c + 1);
        // range [0, 8] over 8 colors, so 1 falls in the second bin
        let colors = quantize_matrix(&m, &palette).unwrap();
        assert_eq!(
            colors,
            vec![vec!["#000000", WHITE], vec![WHITE, "#d9d9d9"]]
        );
    }
}
