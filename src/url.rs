use crate::transformation::Transformation;

pub const DEFAULT_HOST: &str = "res.cloudinary.com";

/// Builds delivery URLs for a source image.
///
/// `Clone` must produce an independent copy: transformations applied to a clone are never
/// visible on the original or on sibling clones.
pub trait UrlBuilder: Clone {
    /// The transformation already applied to this builder, if any.
    fn transformation_text(&self) -> Option<&str>;

    /// Replace the transformation.
    fn with_transformation(self, transformation: Transformation) -> Self;

    /// The final absolute URL for `source`.
    fn render(&self, source: &str) -> String;
}

/// URLs of the form `<scheme>://<host>/<cloud_name>/<resource_type>/<delivery_type>/<transformation>/<source>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub cloud_name: String,
    pub host: String,
    pub secure: bool,
    pub resource_type: String,
    pub delivery_type: String,
    pub transformation: Option<Transformation>,
}

impl Url {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            host: DEFAULT_HOST.to_owned(),
            secure: true,
            resource_type: "image".to_owned(),
            delivery_type: "upload".to_owned(),
            transformation: None,
        }
    }

    pub fn with_host(self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..self
        }
    }

    pub fn with_secure(self, secure: bool) -> Self {
        Self { secure, ..self }
    }

    pub fn with_resource_type(self, resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            ..self
        }
    }

    pub fn with_delivery_type(self, delivery_type: impl Into<String>) -> Self {
        Self {
            delivery_type: delivery_type.into(),
            ..self
        }
    }
}

impl UrlBuilder for Url {
    fn transformation_text(&self) -> Option<&str> {
        self.transformation
            .as_ref()
            .map(Transformation::generate)
            .filter(|t| !t.is_empty())
    }

    fn with_transformation(self, transformation: Transformation) -> Self {
        Self {
            transformation: Some(transformation),
            ..self
        }
    }

    fn render(&self, source: &str) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        let transformation = self.transformation_text().unwrap_or_default();

        // Empty segments (no transformation, stray separators) are dropped from the prefix.
        // The source is opaque and only loses its leading `/`.
        let prefix = itertools::join(
            [
                self.cloud_name.as_str(),
                self.resource_type.as_str(),
                self.delivery_type.as_str(),
                transformation,
            ]
            .into_iter()
            .flat_map(|segment| segment.split('/'))
            .filter(|segment| !segment.is_empty()),
            "/",
        );

        format!(
            "{}://{}/{}/{}",
            scheme,
            self.host.trim_end_matches('/'),
            prefix,
            source.trim_start_matches('/')
        )
    }
}
