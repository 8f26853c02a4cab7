use crate::Position;
use crate::ancestry::{Interval, IntervalSet};

/// Split `[start, stop)` at `breakpoints` into the intervals inherited from
/// the first and the second parental chromosome.
///
/// The first chromosome is copied from `start` up to the first breakpoint,
/// and every breakpoint switches to the other chromosome. A breakpoint equal
/// to `start` therefore means the first chromosome contributes nothing
/// before it. The segment after the last breakpoint always ends at `stop`.
///
/// `breakpoints` must be sorted and free of duplicates. Positions at or
/// beyond `stop` are ignored, so a list terminated by `f64::MAX` partitions
/// exactly like the same list without the terminator. Without any crossover
/// the whole range goes to the first chromosome.
///
/// # Example
/// ```
/// use fwdarg::ancestry::Interval;
/// use fwdarg::recombination::partition_breakpoints;
///
/// let (first, second) = partition_breakpoints(&[0.3, 0.6], 0.0, 1.0);
/// assert_eq!(first, vec![Interval::new(0.0, 0.3), Interval::new(0.6, 1.0)]);
/// assert_eq!(second, vec![Interval::new(0.3, 0.6)]);
/// ```
pub fn partition_breakpoints(
    breakpoints: &[Position],
    start: Position,
    stop: Position,
) -> (IntervalSet, IntervalSet) {
    let crossovers = &breakpoints[..breakpoints.partition_point(|&p| p < stop)];
    let n = crossovers.len();

    let mut first = Vec::with_capacity(n / 2 + 1);
    let mut second = Vec::with_capacity(n.div_ceil(2));

    let Some(&leading) = crossovers.first() else {
        first.push(Interval::new(start, stop));
        return (first, second);
    };

    if leading != start {
        first.push(Interval::new(start, leading));
    }

    // Segment j starts at crossover j-1; odd segments come from the second parent.
    for j in 1..=n {
        let left = crossovers[j - 1];
        let right = if j < n { crossovers[j] } else { stop };
        let interval = Interval::new(left, right);
        if j % 2 == 0 {
            first.push(interval);
        } else {
            second.push(interval);
        }
    }

    (first, second)
}
