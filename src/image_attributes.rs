use std::collections::BTreeMap;

use crate::tag_options::TagOptions;
use crate::url::UrlBuilder;

/// The attributes of a responsive `img` tag
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ImageAttributes {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub srcset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ImageAttributes {
    /// Merge the caller's attributes with the generated ones. Generated attributes take
    /// precedence over caller attributes with the same name.
    pub fn new<U: UrlBuilder>(source: &str, url: &U, options: &TagOptions) -> Self {
        let srcset = options
            .breakpoints()
            .and_then(|breakpoints| breakpoints.generate_srcset(source, url).map(|r| (breakpoints, r)));

        let (src, srcset, sizes) = match srcset {
            Some((breakpoints, result)) => {
                let sizes = breakpoints
                    .has_sizes()
                    .then(|| breakpoints.generate_sizes());
                (result.largest_url, Some(result.srcset), sizes)
            }
            None => (url.render(source), None, None),
        };

        let extra = options
            .attributes()
            .iter()
            .filter(|(name, _)| !matches!(name.as_str(), "src" | "srcset" | "sizes"))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Self {
            src,
            srcset,
            sizes,
            extra,
        }
    }

    /// All attributes by name
    pub fn into_map(self) -> BTreeMap<String, String> {
        let mut map = self.extra;
        map.insert("src".to_owned(), self.src);
        if let Some(srcset) = self.srcset {
            map.insert("srcset".to_owned(), srcset);
        }
        if let Some(sizes) = self.sizes {
            map.insert("sizes".to_owned(), sizes);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::BreakpointSet;
    use crate::transformation::Transformation;
    use crate::url::Url;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_without_breakpoints() {
        init();
        let url = Url::new("demo").with_transformation(Transformation::raw("e_sepia"));
        let result = ImageAttributes::new("photo", &url, &TagOptions::new().with_attribute("alt", "A photo"));
        assert_eq!(
            result,
            ImageAttributes {
                src: "https://res.cloudinary.com/demo/image/upload/e_sepia/photo".to_owned(),
                srcset: None,
                sizes: None,
                extra: BTreeMap::from([("alt".to_owned(), "A photo".to_owned())]),
            }
        );
    }

    #[test]
    fn test_empty_breakpoints_omit_srcset() {
        init();
        let options = TagOptions::new().with_breakpoints(BreakpointSet::default().with_sizes(true));
        let result = ImageAttributes::new("photo", &Url::new("demo"), &options);
        assert_eq!(result.src, "https://res.cloudinary.com/demo/image/upload/photo");
        assert_eq!(result.srcset, None);
        assert_eq!(result.sizes, None);
    }

    #[test]
    fn test_with_breakpoints_and_sizes() {
        init();
        let options = TagOptions::new()
            .with_breakpoints(BreakpointSet::from_widths([200, 400]).with_sizes(true));
        let result = ImageAttributes::new("photo", &Url::new("demo"), &options);
        assert_eq!(
            result.src,
            "https://res.cloudinary.com/demo/image/upload/c_scale,w_400/photo"
        );
        assert_eq!(
            result.srcset.as_deref(),
            Some(
                "https://res.cloudinary.com/demo/image/upload/c_scale,w_200/photo 200w, \
                 https://res.cloudinary.com/demo/image/upload/c_scale,w_400/photo 400w"
            )
        );
        assert_eq!(
            result.sizes.as_deref(),
            Some("(max-width: 200px) 200px, (max-width: 400px) 400px")
        );
    }

    #[test]
    fn test_sizes_only_when_requested() {
        init();
        let options = TagOptions::new().with_breakpoints(BreakpointSet::from_widths([200, 400]));
        let result = ImageAttributes::new("photo", &Url::new("demo"), &options);
        assert!(result.srcset.is_some());
        assert_eq!(result.sizes, None);
    }

    #[test]
    fn test_generated_attributes_win() {
        init();
        let options = TagOptions::new()
            .with_attributes([("src", "elsewhere.png"), ("srcset", "x"), ("class", "hero")])
            .with_breakpoints(BreakpointSet::from_widths([200]));
        let map = ImageAttributes::new("photo", &Url::new("demo"), &options).into_map();
        assert_eq!(
            map.get("src").map(String::as_str),
            Some("https://res.cloudinary.com/demo/image/upload/c_scale,w_200/photo")
        );
        assert!(map["srcset"].ends_with(" 200w"));
        assert_eq!(map.get("class").map(String::as_str), Some("hero"));
        assert!(!map.contains_key("sizes"));
    }

    #[test]
    fn test_serializes_flat() {
        init();
        let options = TagOptions::new()
            .with_attribute("alt", "A photo")
            .with_breakpoints(BreakpointSet::from_widths([200]).with_sizes(true));
        let result = ImageAttributes::new("photo", &Url::new("demo"), &options);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "src": "https://res.cloudinary.com/demo/image/upload/c_scale,w_200/photo",
                "srcset": "https://res.cloudinary.com/demo/image/upload/c_scale,w_200/photo 200w",
                "sizes": "(max-width: 200px) 200px",
                "alt": "A photo",
            })
        );
    }
}
