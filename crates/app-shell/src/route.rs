use std::collections::BTreeMap;

use crate::error::RouteError;
use crate::location::Location;

const STATIC_SEGMENT_SCORE: i32 = 10;
const DYNAMIC_SEGMENT_SCORE: i32 = 3;
const SPLAT_PENALTY: i32 = -2;
const INDEX_ROUTE_BONUS: i32 = 2;

/// Key under which a splat (`*`) capture is stored in [`Params`].
pub const SPLAT_PARAM: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Stored lowercased, static segments match case-insensitively.
    Static(String),
    Dynamic(String),
    Splat,
}

/// Parsed route path pattern, e.g. `/`, `/tokens/:id` or `/docs/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let parts: Vec<&str> = pattern.split('/').filter(|part| !part.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());
        for (index, part) in parts.iter().enumerate() {
            let segment = if *part == "*" {
                if index + 1 != parts.len() {
                    return Err(RouteError::SplatNotLast {
                        pattern: pattern.to_string(),
                    });
                }
                Segment::Splat
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::EmptyParamName {
                        pattern: pattern.to_string(),
                    });
                }
                let declared_twice = segments
                    .iter()
                    .any(|segment| matches!(segment, Segment::Dynamic(other) if other == name));
                if declared_twice {
                    return Err(RouteError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                Segment::Dynamic(name.to_string())
            } else {
                Segment::Static(part.to_lowercase())
            };
            segments.push(segment);
        }
        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Specificity used to pick between several matching patterns.
    pub fn score(&self) -> i32 {
        let mut score = self.segments.len() as i32;
        if self.segments.is_empty() {
            score += INDEX_ROUTE_BONUS;
        }
        for segment in &self.segments {
            score += match segment {
                Segment::Static(_) => STATIC_SEGMENT_SCORE,
                Segment::Dynamic(_) => DYNAMIC_SEGMENT_SCORE,
                Segment::Splat => SPLAT_PENALTY,
            };
        }
        score
    }

    pub fn matches(&self, location: &Location) -> Option<Params> {
        let path_segments: Vec<&str> = location.segments().collect();
        let mut params = Params::default();
        let mut position = 0;
        for segment in &self.segments {
            match segment {
                Segment::Splat => {
                    let rest = path_segments[position..].join("/");
                    params.0.insert(SPLAT_PARAM.to_string(), rest);
                    return Some(params);
                }
                Segment::Static(expected) => {
                    let actual = path_segments.get(position)?;
                    if actual.to_lowercase() != *expected {
                        return None;
                    }
                }
                Segment::Dynamic(name) => {
                    let actual = path_segments.get(position)?;
                    params.0.insert(name.clone(), (*actual).to_string());
                }
            }
            position += 1;
        }
        (position == path_segments.len()).then_some(params)
    }
}

/// Values captured by dynamic (`:name`) and splat (`*`) segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, R> {
    pub route: &'a R,
    pub pattern: &'a PathPattern,
    pub params: Params,
}

/// Ordered `(pattern, route)` pairs.
///
/// Lookup picks the most specific matching pattern (see [`PathPattern::score`]),
/// ties go to the entry declared first.
#[derive(Debug, Clone)]
pub struct RouteTable<R> {
    entries: Vec<(PathPattern, R)>,
}

impl<R> RouteTable<R> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_route(mut self, pattern: &str, route: R) -> Result<Self, RouteError> {
        self.entries.push((PathPattern::parse(pattern)?, route));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn patterns(&self) -> impl Iterator<Item = &PathPattern> {
        self.entries.iter().map(|(pattern, _)| pattern)
    }

    pub fn match_location(&self, location: &Location) -> Option<RouteMatch<'_, R>> {
        let mut best: Option<(i32, RouteMatch<'_, R>)> = None;
        for (pattern, route) in &self.entries {
            let Some(params) = pattern.matches(location) else {
                continue;
            };
            let score = pattern.score();
            if best.as_ref().is_some_and(|(best_score, _)| *best_score >= score) {
                continue;
            }
            best = Some((
                score,
                RouteMatch {
                    route,
                    pattern,
                    params,
                },
            ));
        }
        best.map(|(_, route_match)| route_match)
    }
}

impl<R> Default for RouteTable<R> {
    fn default() -> Self {
        Self::new()
    }
}
