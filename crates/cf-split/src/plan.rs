//! Segment planning: partition a total duration into bounded parts.
//!
//! A [`SegmentPlan`] covers `[0, total_seconds)` exactly once, with no gaps
//! and no overlaps. Planning is a pure function of its inputs, so a re-run
//! over the same source always derives the same partition.

use serde::{Deserialize, Serialize};

use cf_core::{Error, Result};

/// One contiguous time-bounded slice of the source media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentDescriptor {
    /// 1-based position in the plan.
    pub index: u32,
    /// Offset of the segment's first second from the start of the source.
    pub start_seconds: u64,
    /// Segment length; at most the plan's maximum part length.
    pub length_seconds: u64,
    /// `start_seconds + length_seconds`.
    pub end_seconds: u64,
}

/// The ordered, deterministic list of segment descriptors covering the
/// whole source exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPlan {
    total_seconds: u64,
    max_part_seconds: u64,
    segments: Vec<SegmentDescriptor>,
}

impl SegmentPlan {
    /// Total source duration in whole seconds (floor-truncated).
    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    /// The maximum part length the plan was computed for.
    pub fn max_part_seconds(&self) -> u64 {
        self.max_part_seconds
    }

    /// The ordered segment descriptors.
    pub fn segments(&self) -> &[SegmentDescriptor] {
        &self.segments
    }

    /// Number of planned segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the plan contains no segments (zero-length source).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Compute the partition of `total_seconds` into parts of at most
/// `max_part_seconds`.
///
/// The sub-second remainder of the source is dropped, never rounded up: a
/// 119.9 s source with a 120 s limit yields a single 119 s segment.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] when `max_part_seconds` is zero or
/// `total_seconds` is negative or not finite.
pub fn plan(total_seconds: f64, max_part_seconds: u64) -> Result<SegmentPlan> {
    if max_part_seconds == 0 {
        return Err(Error::InvalidParameter(
            "max segment length must be a positive number of seconds".into(),
        ));
    }
    if !total_seconds.is_finite() || total_seconds < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "total duration must be a non-negative number of seconds, got {total_seconds}"
        )));
    }

    let total = total_seconds.floor() as u64;
    let num_parts = total.div_ceil(max_part_seconds);

    let mut segments = Vec::with_capacity(num_parts as usize);
    for i in 0..num_parts {
        let start = i * max_part_seconds;
        let length = max_part_seconds.min(total - start);
        segments.push(SegmentDescriptor {
            index: (i + 1) as u32,
            start_seconds: start,
            length_seconds: length,
            end_seconds: start + length,
        });
    }

    Ok(SegmentPlan {
        total_seconds: total,
        max_part_seconds,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_125s_into_three_parts() {
        let plan = plan(125.0, 60).unwrap();
        assert_eq!(plan.total_seconds(), 125);
        assert_eq!(plan.max_part_seconds(), 60);
        assert_eq!(plan.len(), 3);

        let segs = plan.segments();
        assert_eq!(
            segs[0],
            SegmentDescriptor {
                index: 1,
                start_seconds: 0,
                length_seconds: 60,
                end_seconds: 60
            }
        );
        assert_eq!(
            segs[1],
            SegmentDescriptor {
                index: 2,
                start_seconds: 60,
                length_seconds: 60,
                end_seconds: 120
            }
        );
        assert_eq!(
            segs[2],
            SegmentDescriptor {
                index: 3,
                start_seconds: 120,
                length_seconds: 5,
                end_seconds: 125
            }
        );
    }

    #[test]
    fn zero_total_yields_empty_plan() {
        let plan = plan(0.0, 60).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
        assert_eq!(plan.total_seconds(), 0);
    }

    #[test]
    fn zero_max_is_rejected() {
        let result = plan(100.0, 0);
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn negative_or_nan_total_is_rejected() {
        assert!(plan(-1.0, 60).is_err());
        assert!(plan(f64::NAN, 60).is_err());
        assert!(plan(f64::INFINITY, 60).is_err());
    }

    #[test]
    fn subsecond_remainder_is_dropped() {
        // 119.9s with a 120s limit is one 119s segment, never two.
        let plan = plan(119.9, 120).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.segments()[0].length_seconds, 119);
        assert_eq!(plan.total_seconds(), 119);
    }

    #[test]
    fn exact_multiple_has_no_stub_segment() {
        let plan = plan(240.0, 120).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.segments()[1].length_seconds, 120);
    }

    #[test]
    fn one_second_over_adds_a_part() {
        let plan = plan(121.0, 120).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.segments()[1].length_seconds, 1);
    }

    #[test]
    fn plan_is_deterministic() {
        let a = plan(3671.4, 600).unwrap();
        let b = plan(3671.4, 600).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn coverage_invariants_hold() {
        // Gap-free, overlap-free, contiguous indices, correct count, and the
        // lengths sum back to the floored total.
        for total in [0u64, 1, 59, 60, 61, 119, 120, 121, 125, 3600, 7201] {
            for max in [1u64, 7, 60, 120, 600] {
                let plan = plan(total as f64, max).unwrap();
                assert_eq!(plan.len() as u64, total.div_ceil(max));

                let mut expected_start = 0u64;
                for (i, seg) in plan.segments().iter().enumerate() {
                    assert_eq!(seg.index as usize, i + 1);
                    assert_eq!(seg.start_seconds, expected_start);
                    assert!(seg.length_seconds > 0);
                    assert!(seg.length_seconds <= max);
                    assert_eq!(seg.end_seconds, seg.start_seconds + seg.length_seconds);
                    expected_start = seg.end_seconds;
                }
                assert_eq!(expected_start, total);
                let sum: u64 = plan.segments().iter().map(|s| s.length_seconds).sum();
                assert_eq!(sum, total);
            }
        }
    }

    #[test]
    fn descriptor_serializes_with_stable_field_names() {
        let seg = SegmentDescriptor {
            index: 2,
            start_seconds: 60,
            length_seconds: 60,
            end_seconds: 120,
        };
        let value = serde_json::to_value(seg).unwrap();
        assert_eq!(value["index"], 2);
        assert_eq!(value["start_seconds"], 60);
        assert_eq!(value["length_seconds"], 60);
        assert_eq!(value["end_seconds"], 120);
    }
}
