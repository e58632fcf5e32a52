//! Ordered URL-pattern to layer registry

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::ExternalContentBehavior;
use crate::types::{Layer, Parameters};

use super::address::strip_query;

/// Builds a fresh layer for every navigation to a route
pub type LayerFactory = Arc<dyn Fn() -> Layer + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Literal(String),
    Placeholder(String),
}

struct RouteEntry {
    pattern: String,
    segments: Vec<PatternSegment>,
    factory: LayerFactory,
}

impl RouteEntry {
    /// Placeholder values when `path` matches this entry structurally
    fn capture(&self, path: &[&str]) -> Option<Parameters> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut captured = Parameters::new();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                PatternSegment::Literal(literal) if literal == value => {}
                PatternSegment::Literal(_) => return None,
                PatternSegment::Placeholder(_) if value.is_empty() => return None,
                PatternSegment::Placeholder(name) => {
                    captured.insert(name.clone(), decode_path(value));
                }
            }
        }
        Some(captured)
    }
}

/// What a matched address navigates to
#[derive(Clone)]
pub enum RouteTarget {
    Layer(LayerFactory),
    /// Pass-through browsable URL synthesized for unmatched external addresses
    External(String),
}

impl fmt::Debug for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layer(_) => f.write_str("Layer(..)"),
            Self::External(url) => f.debug_tuple("External").field(url).finish(),
        }
    }
}

/// Result of matching an address
#[derive(Debug, Clone)]
pub struct RouteMatch {
    pub pattern: String,
    /// Placeholder values plus any query string parameters
    pub parameters: Parameters,
    pub target: RouteTarget,
}

impl RouteMatch {
    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self.target, RouteTarget::External(_))
    }

    /// Construct the layer this match navigates to
    #[must_use]
    pub fn create_layer(&self) -> Layer {
        match &self.target {
            RouteTarget::Layer(factory) => factory(),
            RouteTarget::External(_) => Layer::new(
                ExternalContentBehavior::LAYER_NAME,
                Arc::new(ExternalContentBehavior),
            ),
        }
    }
}

/// Route registry with first-match-wins semantics.
///
/// Entries are evaluated strictly in registration order, so a pattern with a
/// literal segment has to be registered before a parameterized pattern that
/// covers the same position, otherwise it is shadowed.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    ///
    /// Patterns are `/`-separated literal segments and whole-segment `{name}`
    /// placeholders.
    pub fn register<F>(&mut self, pattern: &str, factory: F) -> CoreResult<()>
    where
        F: Fn() -> Layer + Send + Sync + 'static,
    {
        let segments = parse_pattern(pattern)?;
        log::debug!("Registered route #{}: {pattern}", self.entries.len());
        self.entries.push(RouteEntry {
            pattern: pattern.to_string(),
            segments,
            factory: Arc::new(factory),
        });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered patterns in evaluation order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.pattern.as_str())
    }

    /// First registered route whose pattern matches `url` structurally.
    pub fn match_url(&self, url: &str) -> Option<RouteMatch> {
        let path: Vec<&str> = split_path(strip_query(url));

        self.entries.iter().find_map(|entry| {
            let captured = entry.capture(&path)?;
            let mut parameters = query_parameters(url);
            parameters.extend(captured);
            Some(RouteMatch {
                pattern: entry.pattern.clone(),
                parameters,
                target: RouteTarget::Layer(Arc::clone(&entry.factory)),
            })
        })
    }

    /// Like [`match_url`](Self::match_url), falling back to an external
    /// content route when `url` contains `:`.
    pub fn resolve(&self, url: &str) -> Option<RouteMatch> {
        if let Some(found) = self.match_url(url) {
            log::debug!("Address '{url}' matched route '{}'", found.pattern);
            return Some(found);
        }
        if url.contains(':') {
            log::debug!("Address '{url}' treated as external content");
            return Some(RouteMatch {
                pattern: url.to_string(),
                parameters: Parameters::new(),
                target: RouteTarget::External(url.to_string()),
            });
        }
        None
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.patterns()).finish()
    }
}

fn split_path(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

fn parse_pattern(pattern: &str) -> CoreResult<Vec<PatternSegment>> {
    let invalid = |reason: &str| CoreError::InvalidRoutePattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    let raw = split_path(pattern);
    if raw.is_empty() {
        return Err(invalid("pattern is empty"));
    }

    let mut names = HashSet::new();
    raw.into_iter()
        .map(|segment| {
            if let Some(name) = segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                if name.is_empty() || name.contains(['{', '}']) {
                    return Err(invalid("placeholder name is empty or malformed"));
                }
                if !names.insert(name) {
                    return Err(invalid("duplicate placeholder name"));
                }
                Ok(PatternSegment::Placeholder(name.to_string()))
            } else if segment.contains(['{', '}']) {
                Err(invalid("placeholders must span a whole segment"))
            } else if segment.is_empty() {
                Err(invalid("empty segment"))
            } else {
                Ok(PatternSegment::Literal(segment.to_string()))
            }
        })
        .collect()
}

/// Percent-decode a path segment; `+` is a literal character here
fn decode_path(value: &str) -> String {
    urlencoding::decode(value).map_or_else(|_| value.to_string(), |decoded| decoded.into_owned())
}

/// Percent-decode a query component, where `+` stands for a space
fn decode_query(value: &str) -> String {
    decode_path(&value.replace('+', " "))
}

/// Percent-decoded query string pairs of `url`
fn query_parameters(url: &str) -> Parameters {
    let Some((_, query)) = url.split_once('?') else {
        return Parameters::new();
    };
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_query(key), decode_query(value))
        })
        .collect()
}
