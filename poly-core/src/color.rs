use crate::types::Rgb;

/// Base red level of the first iteration.
pub const RED_BASE: u32 = 10;
/// Blue channel shared by all iterations.
pub const BLUE: u8 = 55;

/// Fill color of iteration `index` out of `iterations`.
///
/// The per-step increment is `255 / iterations` with integer division
/// applied before multiplying by `index`. Channels saturate at 255, which
/// happens for some iteration counts above 50 (e.g. 51 or 85).
///
/// `iterations` must be non-zero.
pub fn iteration_color(index: u32, iterations: u32) -> Rgb {
    let step = 255 / iterations;
    let ramp = index.saturating_mul(step);

    Rgb::new(
        channel(ramp.saturating_add(RED_BASE)),
        channel(ramp),
        BLUE,
    )
}

fn channel(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
