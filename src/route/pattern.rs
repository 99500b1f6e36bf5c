// SPDX-FileCopyrightText: 2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

/// One `/`-separated piece of a route pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Segment<'pattern> {
    Literal(&'pattern str),
    Param(&'pattern str),
}

impl<'pattern> Segment<'pattern> {
    fn parse(raw: &'pattern str) -> Self {
        raw.strip_prefix(':')
            .map_or(Self::Literal(raw), Self::Param)
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Literal(_) => 1,
            Self::Param(_) => 0,
        }
    }
}

pub(crate) fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

pub(crate) fn segments(pattern: &str) -> impl Iterator<Item = Segment<'_>> {
    split(pattern).map(Segment::parse)
}

/// Matches `path` against `pattern`, returning the bound parameters.
pub(crate) fn capture(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let mut params = Vec::new();
    let mut expected = segments(pattern);
    let mut actual = split(path);

    loop {
        match (expected.next(), actual.next()) {
            (None, None) => return Some(params),
            (Some(Segment::Literal(literal)), Some(segment)) if literal == segment => {}
            (Some(Segment::Param(name)), Some(segment)) => {
                params.push((name.to_owned(), segment.to_owned()));
            }
            (Some(_), _) | (None, Some(_)) => return None,
        }
    }
}

/// Orders patterns so that the more specific one compares greater.
///
/// Segments are compared left to right and a literal outranks a parameter.
/// Among equally ranked prefixes the longer pattern wins.
pub(crate) fn specificity(left: &str, right: &str) -> Ordering {
    segments(left)
        .map(Segment::rank)
        .cmp(segments(right).map(Segment::rank))
}

/// Substitutes `:name` segments from `params`, or `None` if one is missing.
pub(crate) fn fill(pattern: &str, params: &[(&str, &str)]) -> Option<String> {
    let filled = segments(pattern)
        .map(|segment| match segment {
            Segment::Literal(literal) => Some(literal),
            Segment::Param(name) => params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value),
        })
        .collect::<Option<Vec<_>>>()?;
    Some(format!("/{}", filled.join("/")))
}
