use structopt::StructOpt;

use crate::breakpoints::{BreakpointSet, Widths};
use crate::error::AppError;

/// An extra tag attribute given as `name=value`
#[derive(Debug, PartialEq, Clone)]
pub struct Attribute(pub String, pub String);

impl std::str::FromStr for Attribute {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok(Self(name.trim().to_owned(), value.to_owned()))
            }
            _ => Err(AppError::InvalidAttribute(s.to_owned())),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "responsive-srcset",
    about = "A tool to generate srcset and sizes attributes for responsive CDN images"
)]
pub struct Options {
    /// The public id of the image on the CDN
    pub source: String,

    /// The CDN account the image belongs to
    #[structopt(short = "c", long = "cloud-name")]
    pub cloud_name: String,

    /// A raw transformation applied before each breakpoint's scaling, e.g. `c_fill,ar_1_1,g_auto`
    #[structopt(short = "t", long = "transformation")]
    pub transformation: Option<String>,

    /// Generate http rather than https URLs
    #[structopt(long = "insecure")]
    pub insecure: bool,

    /// Explicit breakpoint widths, e.g. `320,640,1280`. Takes precedence over a width range
    #[structopt(short = "b", long = "breakpoints")]
    pub breakpoints: Option<Widths>,

    /// The width of the smallest image in pixels
    #[structopt(long = "min-width", allow_hyphen_values = true)]
    pub min_width: Option<i32>,

    /// The width of the largest image in pixels
    #[structopt(long = "max-width", allow_hyphen_values = true)]
    pub max_width: Option<i32>,

    /// The total count of generated images
    #[structopt(long = "max-images")]
    pub max_images: Option<usize>,

    /// Also generate a sizes attribute
    #[structopt(long = "sizes")]
    pub sizes: bool,

    /// Extra attributes to add to the tag, given as `name=value`
    #[structopt(short = "a", long = "attribute", number_of_values = 1)]
    pub attributes: Vec<Attribute>,
}

impl Options {
    /// The breakpoints requested, if any
    pub fn breakpoint_set(&self) -> Result<Option<BreakpointSet>, AppError> {
        let set = match (&self.breakpoints, self.min_width, self.max_width, self.max_images) {
            (Some(widths), _, _, _) => BreakpointSet::from(widths.clone()),
            (None, Some(min_width), Some(max_width), Some(max_images)) => {
                BreakpointSet::from_range(min_width, max_width, max_images)
            }
            (None, None, None, None) => return Ok(None),
            _ => return Err(AppError::IncompleteRange),
        };
        Ok(Some(set.with_sizes(self.sizes)))
    }
}
