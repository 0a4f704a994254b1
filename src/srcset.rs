use itertools::Itertools;

use crate::breakpoints::BreakpointSet;
use crate::transformation::Transformation;
use crate::url::UrlBuilder;

/// The directive each breakpoint's width is appended to
pub const SCALE_DIRECTIVE: &str = "c_scale";

/// The generated `srcset` attribute value together with the URL of the widest image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrcsetResult {
    pub srcset: String,
    /// A sensible fallback `src`
    pub largest_url: String,
}

impl BreakpointSet {
    /// Render one URL per breakpoint, each scaled to that width on top of any transformation
    /// `url` already carries. `url` itself is never modified.
    ///
    /// Returns `None` when there are no breakpoints, in which case the `srcset` attribute
    /// should be left out altogether.
    pub fn generate_srcset<U: UrlBuilder>(&self, source: &str, url: &U) -> Option<SrcsetResult> {
        if self.is_empty() {
            debug!("No breakpoints for {}, skipping srcset", source);
            return None;
        }

        let base_transformation = url
            .transformation_text()
            .map(|t| [t, "/"].join(""))
            .unwrap_or_default();

        let urls: Vec<(i32, String)> = self
            .widths()
            .iter()
            .map(|&width| {
                let transformation = Transformation::raw(format!(
                    "{}{},w_{}",
                    base_transformation, SCALE_DIRECTIVE, width
                ));
                let rendered = url.clone().with_transformation(transformation).render(source);
                debug!("Breakpoint {}w for {}: {}", width, source, &rendered);
                (width, rendered)
            })
            .collect();

        let srcset = urls
            .iter()
            .map(|(width, rendered)| format!("{} {}w", rendered, width))
            .join(", ");
        // Widths are ascending so the last one is the largest
        let (_, largest_url) = urls.into_iter().last()?;

        Some(SrcsetResult {
            srcset,
            largest_url,
        })
    }

    /// A `sizes` value with one `(max-width: <w>px) <w>px` hint per breakpoint.
    /// Empty when there are no breakpoints.
    pub fn generate_sizes(&self) -> String {
        self.widths()
            .iter()
            .map(|width| format!("(max-width: {0}px) {0}px", width))
            .join(", ")
    }

    pub fn has_sizes(&self) -> bool {
        self.sizes
    }
}
