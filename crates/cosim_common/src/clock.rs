//! Fabric clock indices of the processing system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of one of the four PL fabric clocks (`FCLK_CLK0`..`FCLK_CLK3`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ClockIndex(u8);

impl ClockIndex {
    /// All clock indices in ascending order.
    pub const ALL: [ClockIndex; 4] = [ClockIndex(0), ClockIndex(1), ClockIndex(2), ClockIndex(3)];

    /// Creates a clock index, returning `None` if `index > 3`.
    pub fn new(index: u8) -> Option<Self> {
        (index < 4).then_some(Self(index))
    }

    /// Returns the numeric index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the clock output signal name, e.g. `FCLK_CLK2`.
    pub fn signal_name(self) -> String {
        format!("FCLK_CLK{}", self.0)
    }

    /// Returns the active-low reset signal name, e.g. `FCLK_RESET2_N`.
    pub fn reset_name(self) -> String {
        format!("FCLK_RESET{}_N", self.0)
    }
}

impl fmt::Display for ClockIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(ClockIndex::new(3).is_some());
        assert!(ClockIndex::new(4).is_none());
    }

    #[test]
    fn names() {
        let clk = ClockIndex::new(1).unwrap();
        assert_eq!(clk.signal_name(), "FCLK_CLK1");
        assert_eq!(clk.reset_name(), "FCLK_RESET1_N");
    }

    #[test]
    fn all_is_ascending() {
        let indices: Vec<u8> = ClockIndex::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
