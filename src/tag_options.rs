use std::collections::BTreeMap;

use crate::breakpoints::BreakpointSet;

/// What to put on an image tag besides its `src`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    attributes: BTreeMap<String, String>,
    breakpoints: Option<BreakpointSet>,
}

impl TagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extra attributes
    pub fn with_attributes<K, V>(self, attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..self
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_breakpoints(self, breakpoints: BreakpointSet) -> Self {
        Self {
            breakpoints: Some(breakpoints),
            ..self
        }
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn breakpoints(&self) -> Option<&BreakpointSet> {
        self.breakpoints.as_ref()
    }
}
