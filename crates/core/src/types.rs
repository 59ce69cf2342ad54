/// Raw server health as reported by a rack: lower is less healthy.
/// Conventionally in `0.0..=1.0`, but the range is not enforced.
pub type HealthScore = f64;

/// Physical slot number of a server within its rack.
pub type UnitNumber = u32;
