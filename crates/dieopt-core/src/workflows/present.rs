use crate::core::models::placement::{IterationLabel, ThreeRunSummary};
use crate::engine::error::DieOptError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Best,
    Iteration(IterationLabel),
    All,
}

impl Selection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Iteration(label) => label.as_str(),
            Self::All => "all",
        }
    }
}

impl FromStr for Selection {
    type Err = DieOptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(Self::Best),
            "iter1" => Ok(Self::Iteration(IterationLabel::Iter1)),
            "iter2" => Ok(Self::Iteration(IterationLabel::Iter2)),
            "iter3" => Ok(Self::Iteration(IterationLabel::Iter3)),
            "all" => Ok(Self::All),
            other => Err(DieOptError::InvalidSelector(other.to_string())),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Die centres in plain `(x, y)` mm pairs, shaped by the [`Selection`] that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    Points(Vec<(f64, f64)>),
    ByIteration(BTreeMap<IterationLabel, Vec<(f64, f64)>>),
}

impl Coordinates {
    /// Number of die centres across all groups.
    pub fn len(&self) -> usize {
        match self {
            Self::Points(points) => points.len(),
            Self::ByIteration(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens into `(label, points)` groups; single selections are labelled `label`.
    pub fn groups<'a>(&'a self, label: &'a str) -> Vec<(&'a str, &'a [(f64, f64)])> {
        match self {
            Self::Points(points) => vec![(label, points.as_slice())],
            Self::ByIteration(groups) => groups
                .iter()
                .map(|(iteration, points)| (iteration.as_str(), points.as_slice()))
                .collect(),
        }
    }
}

pub fn select(summary: &ThreeRunSummary, selection: Selection) -> Coordinates {
    match selection {
        Selection::Best => Coordinates::Points(summary.best().coordinates()),
        Selection::Iteration(label) => Coordinates::Points(summary.get(label).coordinates()),
        Selection::All => Coordinates::ByIteration(
            summary
                .per_iter()
                .map(|(label, result)| (label, result.coordinates()))
                .collect(),
        ),
    }
}
