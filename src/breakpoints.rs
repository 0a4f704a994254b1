use crate::error::AppError;

/// A comma separated list of widths as given on the command line, e.g. `320,480,640`
#[derive(Debug, PartialEq, Clone)]
pub struct Widths(pub Vec<i32>);

impl std::str::FromStr for Widths {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut widths: Vec<i32> = Vec::new();
        for s in s.split(',').map(str::trim) {
            let width = s.parse::<i32>().map_err(|source| AppError::InvalidWidth {
                value: s.to_owned(),
                source,
            })?;
            widths.push(width)
        }
        Ok(Self(widths))
    }
}

/// The pixel widths an image variant is generated for, in ascending order.
///
/// Widths are never validated: zero, negative and duplicate widths pass through as given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakpointSet {
    pub(crate) widths: Vec<i32>,
    pub(crate) sizes: bool,
}

impl BreakpointSet {
    /// A set from explicit widths, sorted ascending. Duplicates are kept.
    pub fn from_widths(widths: impl Into<Vec<i32>>) -> Self {
        let mut widths = widths.into();
        widths.sort_unstable();
        Self {
            widths,
            sizes: false,
        }
    }

    /// `max_images` widths evenly spaced from `min_width` towards `max_width`.
    ///
    /// The step is `(max_width - min_width) / (max_images - 1)` rounded half up, or the full
    /// distance when only one image is requested. The first width is always `min_width`;
    /// the last one only lands on `max_width` when the distance divides evenly.
    pub fn from_range(min_width: i32, max_width: i32, max_images: usize) -> Self {
        let divisor = if max_images > 1 {
            max_images - 1
        } else {
            max_images
        };
        // 32-bit arithmetic throughout: the distance wraps and goes through `f32`, the rounded
        // step saturates to `i64` and is then truncated to `i32`.
        let distance = f64::from(max_width.wrapping_sub(min_width) as f32).ceil();
        let step = (distance / divisor as f64 + 0.5).floor() as i64 as i32;

        let widths: Vec<i32> = std::iter::successors(Some(min_width), |w| Some(w.wrapping_add(step)))
            .take(max_images)
            .collect();
        debug!(
            "Breakpoints from {} to {} over {} images (step {}): {:?}",
            min_width, max_width, max_images, step, &widths
        );

        Self {
            widths,
            sizes: false,
        }
    }

    /// Whether a `sizes` attribute should accompany the `srcset`.
    pub fn with_sizes(self, sizes: bool) -> Self {
        Self { sizes, ..self }
    }

    pub fn widths(&self) -> &[i32] {
        &self.widths
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl From<Widths> for BreakpointSet {
    fn from(widths: Widths) -> Self {
        Self::from_widths(widths.0)
    }
}
