//! Shared ground layout for every vertiport in the demo.
//!
//! Two pads and six gates hanging off a three-node taxi spine:
//!
//! ```text
//!   GATE1 GATE2   GATE3 GATE4   GATE5 GATE6
//!      \  /          \  /          \  /
//!       T1 --------- T2 --------- T3
//!       |                          |
//!  FATO_Takeoff              FATO_Landing
//! ```

use vs_core::Point;
use vs_ground::{GroundLayout, GroundResult};

pub fn two_pad_six_gate() -> GroundResult<GroundLayout> {
    GroundLayout::from_template(
        &[
            ("FATO_Takeoff", Point::new(4.0, 2.0)),
            ("FATO_Landing", Point::new(24.0, 2.0)),
            ("T1", Point::new(4.0, 8.0)),
            ("T2", Point::new(14.0, 8.0)),
            ("T3", Point::new(24.0, 8.0)),
            ("GATE1", Point::new(2.0, 14.0)),
            ("GATE2", Point::new(6.0, 14.0)),
            ("GATE3", Point::new(12.0, 14.0)),
            ("GATE4", Point::new(16.0, 14.0)),
            ("GATE5", Point::new(22.0, 14.0)),
            ("GATE6", Point::new(26.0, 14.0)),
        ],
        &[
            ("T1", &["FATO_Takeoff", "T2", "GATE1", "GATE2"]),
            ("T2", &["T3", "GATE3", "GATE4"]),
            ("T3", &["FATO_Landing", "GATE5", "GATE6"]),
        ],
        "FATO_Takeoff",
        "FATO_Landing",
        &["GATE1", "GATE2", "GATE3", "GATE4", "GATE5", "GATE6"],
    )
}
