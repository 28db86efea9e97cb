//! URL strategies for route-style and action-style links.
//!
//! Both strategies take the 1-based page number shown to users.

use crate::error::RenderError;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use url::{Position, Url};

const PAGE_PLACEHOLDER: &str = "page";

/// Placeholder-based route such as `/blog/page/{page}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    template: String,
    values: BTreeMap<String, String>,
}

impl RouteTemplate {
    /// Parse a template; it must contain a `{page}` placeholder.
    pub fn parse(template: impl Into<String>) -> Result<Self, RenderError> {
        let template = template.into();
        let pattern = placeholder_pattern()?;

        if pattern.replace_all(&template, "").contains('{') {
            return Err(RenderError::InvalidTemplate {
                template,
                message: "unclosed placeholder".to_string(),
            });
        }

        let has_page = pattern
            .captures_iter(&template)
            .any(|caps| &caps[1] == PAGE_PLACEHOLDER);
        if !has_page {
            return Err(RenderError::InvalidTemplate {
                template,
                message: "missing {page} placeholder".to_string(),
            });
        }

        Ok(Self {
            template,
            values: BTreeMap::new(),
        })
    }

    /// Add a value for a non-page placeholder.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Add several placeholder values.
    pub fn with_values<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values
            .extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Build the path for `page_number`.
    pub fn resolve(&self, page_number: usize) -> Result<String, RenderError> {
        let pattern = placeholder_pattern()?;

        let missing = pattern
            .captures_iter(&self.template)
            .map(|caps| caps[1].to_string())
            .find(|name| name != PAGE_PLACEHOLDER && !self.values.contains_key(name));
        if let Some(name) = missing {
            return Err(RenderError::UnresolvedPlaceholder {
                template: self.template.clone(),
                name,
            });
        }

        let path = pattern.replace_all(&self.template, |caps: &Captures| match &caps[1] {
            PAGE_PLACEHOLDER => page_number.to_string(),
            name => self.values.get(name).cloned().unwrap_or_default(),
        });
        Ok(path.into_owned())
    }
}

/// Matches `{name}` and captures the name.
fn placeholder_pattern() -> Result<Regex, RenderError> {
    Regex::new(r"\{([^{}]*)\}").map_err(|e| RenderError::InvalidTemplate {
        template: String::new(),
        message: e.to_string(),
    })
}

/// Query-string based link built on the current request URL.
///
/// Root-relative bases such as `/catalog?sort=name` produce root-relative
/// links. Other relative forms (`catalog?x=1`, `?x=1`, `//host/path`) are
/// rejected since they depend on the page the link appears on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionUrl {
    base: Url,
    relative: bool,
    query_param: String,
    render_empty_parameters: bool,
    boolean_parameter_names: Vec<String>,
}

impl ActionUrl {
    /// Default name of the page query parameter.
    pub const DEFAULT_QUERY_PARAM: &'static str = "page";

    /// Placeholder host for relative bases; never appears in output.
    const RELATIVE_ROOT: &'static str = "http://localhost/";

    pub fn parse(base: &str) -> Result<Self, RenderError> {
        let (base, relative) = match Url::parse(base) {
            Ok(url) => (url, false),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                if !base.starts_with('/') || base.starts_with("//") {
                    return Err(url::ParseError::RelativeUrlWithoutBase.into());
                }
                let root = Url::parse(Self::RELATIVE_ROOT)?;
                (root.join(base)?, true)
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            base,
            relative,
            query_param: Self::DEFAULT_QUERY_PARAM.to_string(),
            render_empty_parameters: false,
            boolean_parameter_names: Vec::new(),
        })
    }

    pub fn with_query_param(mut self, name: impl Into<String>) -> Self {
        self.query_param = name.into();
        self
    }

    /// Keep parameters whose value is empty.
    pub fn with_render_empty_parameters(mut self, render: bool) -> Self {
        self.render_empty_parameters = render;
        self
    }

    /// Checkbox parameters whose `true,false` value collapses to `true`.
    pub fn with_boolean_parameter_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.boolean_parameter_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn query_param(&self) -> &str {
        &self.query_param
    }

    /// Build the URL for `page_number`.
    pub fn resolve(&self, page_number: usize) -> String {
        let pairs: Vec<(String, String)> = self
            .base
            .query_pairs()
            .filter(|(name, _)| name != self.query_param.as_str())
            .filter(|(_, value)| self.render_empty_parameters || !value.is_empty())
            .map(|(name, value)| {
                let value = if value == "true,false"
                    && self.boolean_parameter_names.iter().any(|b| b == &name)
                {
                    "true".to_string()
                } else {
                    value.into_owned()
                };
                (name.into_owned(), value)
            })
            .collect();

        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs)
            .append_pair(&self.query_param, &page_number.to_string());

        if self.relative {
            url[Position::BeforePath..].to_string()
        } else {
            url.to_string()
        }
    }
}
