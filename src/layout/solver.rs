//! Size solver: splits a container's extent among its children.
//!
//! Static children get exactly their requested inner extent on the main
//! axis. Whatever is left after gaps, static extents and every child's
//! decoration overhead is shared among weighted children in proportion to
//! their weights, rounding down. Every child spans the full cross axis minus
//! its own decoration.

use super::{Direction, Size};
use crate::style::FrameSize;
use tracing::trace;

/// How a child claims space along the main axis.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SizeMode {
    /// Relative share of the space left over after static children.
    /// Non-positive or non-finite weights get nothing.
    Weighted(f64),
    /// Fixed inner extent, never shrunk.
    Static(u16),
}

/// Solver input for one child.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sizing {
    /// Main-axis sizing rule.
    pub mode: SizeMode,
    /// Blank cells after this child; ignored for the last child.
    pub gap: u16,
    /// The child's current decoration overhead.
    pub frame: FrameSize,
}

impl Sizing {
    /// Create solver input.
    pub const fn new(mode: SizeMode, gap: u16, frame: FrameSize) -> Self {
        Self { mode, gap, frame }
    }
}

/// Only finite, positive weights take part in the split.
fn effective_weight(weight: f64) -> Option<f64> {
    (weight.is_finite() && weight > 0.0).then_some(weight)
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Compute the inner size of every child.
///
/// The result has one entry per input, in order. Sizes are clamped at zero
/// when decorations or static children overrun the available space.
pub fn solve(direction: Direction, total: Size, children: &[Sizing]) -> Vec<Size> {
    let Some((_, leading)) = children.split_last() else {
        return Vec::new();
    };

    let total_gap: u32 = leading.iter().map(|c| u32::from(c.gap)).sum();

    let mut static_consumed = 0u32;
    let mut weighted_overhead = 0u32;
    let mut total_weight = 0.0f64;
    for child in children {
        let frame = u32::from(child.frame.along(direction));
        match child.mode {
            SizeMode::Static(size) => static_consumed += u32::from(size) + frame,
            SizeMode::Weighted(weight) => {
                weighted_overhead += frame;
                total_weight += effective_weight(weight).unwrap_or(0.0);
            }
        }
    }

    let remaining = u32::from(total.along(direction))
        .saturating_sub(total_gap)
        .saturating_sub(static_consumed)
        .saturating_sub(weighted_overhead);

    let cross = total.across(direction);

    let sizes: Vec<Size> = children
        .iter()
        .map(|child| {
            let main = match child.mode {
                SizeMode::Static(size) => size,
                SizeMode::Weighted(weight) if total_weight > 0.0 && effective_weight(weight).is_some() => {
                    let share = f64::from(remaining) * weight / total_weight;
                    // Truncation toward zero; the leftover cells stay unassigned.
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let share = share.floor() as u32;
                    clamp_u16(share)
                }
                SizeMode::Weighted(_) => 0,
            };
            let cross = cross.saturating_sub(child.frame.across(direction));
            Size::from_axes(direction, main, cross)
        })
        .collect();

    trace!(?direction, ?total, remaining, ?sizes, "solved layout");
    sizes
}
