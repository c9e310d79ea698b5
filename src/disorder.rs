use rand::Rng;

/// Signed coupling after the disorder draw. `disorder` is the percent
/// chance in [0, 100] that the sign flips; every call consumes exactly
/// one value from `rng`.
pub fn apply_disorder(coupling: i32, disorder: u8, rng: &mut impl Rng) -> i32 {
    if disorder <= rng.gen_range(0..100) {
        coupling
    } else {
        -coupling
    }
}
