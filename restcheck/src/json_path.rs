//! Dot/bracket path expressions over JSON values.
//!
//! `id`, `address.geo.lat`, `[0].title`, `$.company['catchPhrase']`. A name applied to
//! an array projects over the elements, so `userId` on a list of posts selects every
//! post's `userId`.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::fmt::Display;

lazy_static! {
    static ref SEGMENT: Regex =
        Regex::new(r#"^(?:(\.)?([A-Za-z_][A-Za-z0-9_-]*)|\[(\d+)\]|\['([^']*)'\]|\["([^"]*)"\])"#)
            .unwrap();
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PathError {
    pub position: usize,
    pub reason: &'static str,
}

impl Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at position {}", self.reason, self.position)
    }
}

impl std::error::Error for PathError {}

pub fn parse(path: &str) -> Result<Vec<Segment>, PathError> {
    let mut segments = Vec::new();
    let mut position = 0;

    let mut rest = path.trim();
    let rooted = rest.starts_with('$');
    if rooted {
        rest = &rest[1..];
        position = 1;
    } else if rest.is_empty() {
        return Err(PathError {
            position: 0,
            reason: "empty path",
        });
    }

    while !rest.is_empty() {
        let captures = SEGMENT.captures(rest).ok_or(PathError {
            position,
            reason: "unexpected character",
        })?;

        if let Some(name) = captures.get(2) {
            // only a leading name of an unrooted path goes without a dot
            let dotted = captures.get(1).is_some();
            let expects_dot = rooted || !segments.is_empty();
            if dotted != expects_dot {
                return Err(PathError {
                    position,
                    reason: if dotted {
                        "unexpected dot before name"
                    } else {
                        "missing dot before name"
                    },
                });
            }
            segments.push(Segment::Key(name.as_str().to_owned()));
        } else if let Some(index) = captures.get(3) {
            let index = index.as_str().parse::<usize>().map_err(|_| PathError {
                position,
                reason: "index out of range",
            })?;
            segments.push(Segment::Index(index));
        } else if let Some(name) = captures.get(4).or_else(|| captures.get(5)) {
            segments.push(Segment::Key(name.as_str().to_owned()));
        }

        let consumed = captures.get(0).map(|m| m.end()).unwrap_or(rest.len());
        position += consumed;
        rest = &rest[consumed..];
    }

    Ok(segments)
}

/// Evaluates `path` against `root`. `Ok(None)` means the path is well-formed but selects
/// nothing.
pub fn select(root: &Value, path: &str) -> Result<Option<Value>, PathError> {
    let segments = parse(path)?;
    Ok(apply(root, &segments))
}

fn apply(value: &Value, segments: &[Segment]) -> Option<Value> {
    let (segment, rest) = match segments.split_first() {
        Some(split) => split,
        None => return Some(value.clone()),
    };

    match (segment, value) {
        (Segment::Key(key), Value::Object(map)) => map.get(key).and_then(|v| apply(v, rest)),
        (Segment::Key(_), Value::Array(items)) => Some(Value::Array(
            items
                .iter()
                .map(|item| apply(item, segments).unwrap_or(Value::Null))
                .collect(),
        )),
        (Segment::Index(index), Value::Array(items)) => {
            items.get(*index).and_then(|v| apply(v, rest))
        }
        _ => None,
    }
}
