//! Score screen time series.

use crate::{Error, Result};
use std::fmt;

/// A time series from the score screen, such as army value over time
///
/// `times` and `values` always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph<V = u32> {
    times: Vec<u32>,
    values: Vec<V>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            times: Vec::new(),
            values: Vec::new(),
        }
    }
}

impl<V> Graph<V> {
    /// Build a graph from parallel axes
    pub fn new(times: Vec<u32>, values: Vec<V>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(Error::GraphLengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        Ok(Self { times, values })
    }

    /// Build a graph from `(time, value)` pairs
    pub fn from_points(points: impl IntoIterator<Item = (u32, V)>) -> Self {
        points.into_iter().collect()
    }

    /// Append one point
    pub fn push(&mut self, time: u32, value: V) {
        self.times.push(time);
        self.values.push(value);
    }

    /// Times in seconds
    pub fn times(&self) -> &[u32] {
        &self.times
    }

    /// Values at each time
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the graph has no points
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The graph as `(time, value)` pairs
    ///
    /// Each call returns a fresh iterator.
    pub fn as_points(&self) -> impl Iterator<Item = (u32, &V)> {
        self.times.iter().copied().zip(self.values.iter())
    }
}

impl<V> FromIterator<(u32, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (u32, V)>>(iter: I) -> Self {
        let (times, values) = iter.into_iter().unzip();
        Self { times, values }
    }
}

impl<V> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with {} values", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_axes() {
        let graph = Graph::new(vec![0, 10, 20], vec![50, 75, 120]).unwrap();
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.times(), &[0, 10, 20]);
        assert_eq!(graph.to_string(), "Graph with 3 values");
    }

    #[test]
    fn test_length_mismatch() {
        let result = Graph::new(vec![0, 10], vec![1u32]);
        assert!(matches!(
            result,
            Err(Error::GraphLengthMismatch {
                times: 2,
                values: 1
            })
        ));
    }

    #[test]
    fn test_points_round_trip() {
        let graph = Graph::from_points(vec![(0, 5u32), (30, 8), (60, 13)]);
        assert_eq!(graph.values(), &[5, 8, 13]);

        let first: Vec<(u32, u32)> = graph.as_points().map(|(t, v)| (t, *v)).collect();
        let second: Vec<(u32, u32)> = graph.as_points().map(|(t, v)| (t, *v)).collect();
        assert_eq!(first, vec![(0, 5), (30, 8), (60, 13)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_push_keeps_axes_aligned() {
        let mut graph: Graph<f32> = Graph::default();
        assert!(graph.is_empty());

        graph.push(0, 1.5);
        graph.push(15, 2.5);
        assert_eq!(graph.times().len(), graph.values().len());
        assert_eq!(graph.as_points().count(), 2);
    }
}
