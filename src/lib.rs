#![warn(clippy::all)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

pub mod breakpoints;
pub mod command_line;
pub mod error;
pub mod image_attributes;
pub mod srcset;
pub mod tag_options;
pub mod transformation;
pub mod url;

pub use crate::breakpoints::BreakpointSet;
pub use crate::error::AppError;
pub use crate::image_attributes::ImageAttributes;
pub use crate::srcset::SrcsetResult;
pub use crate::tag_options::TagOptions;
pub use crate::transformation::Transformation;
pub use crate::url::{Url, UrlBuilder};

use crate::command_line::Options;

use anyhow::{Context, Result};

/// Builds the image attributes described by the command line options and serializes them as JSON
pub fn render_attributes(options: &Options) -> Result<String> {
    let mut url = Url::new(&options.cloud_name).with_secure(!options.insecure);
    if let Some(transformation) = &options.transformation {
        url = url.with_transformation(Transformation::from(transformation.as_str()));
    }

    let mut tag_options = TagOptions::new().with_attributes(
        options
            .attributes
            .iter()
            .map(|a| (a.0.clone(), a.1.clone())),
    );
    if let Some(breakpoints) = options
        .breakpoint_set()
        .context("Failed to compute breakpoints")?
    {
        debug!("Breakpoints for {}: {:?}", &options.source, breakpoints.widths());
        tag_options = tag_options.with_breakpoints(breakpoints);
    }

    let attributes = ImageAttributes::new(&options.source, &url, &tag_options);
    if attributes.srcset.is_none() {
        info!("No breakpoints for {}, srcset omitted", &options.source);
    }

    let json = serde_json::to_string_pretty(&attributes)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to serialize attributes for {}", &options.source))?;
    Ok(json)
}
