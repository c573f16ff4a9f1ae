//! Sizing the RC low-pass filter that sits on the output pin.
//!
//! A BTc stream assumes the capacitor moves `1/soft` of the way toward the
//! rail each sample, so `1 - e^(-1 / (R * C * bitrate)) = 1 / soft`.

use crate::encoder::Softness;

/// 0.22 uF, a common value for the capacitor.
pub const DEFAULT_CAPACITANCE_FARADS: f32 = 0.22e-6;

/// Resistor value, in ohms, that gives `soft` at `bitrate_hz` with a
/// `capacitance_farads` capacitor.
///
/// `soft == 1` means a full charge per sample, which no finite resistor gives;
/// the result is `0.0` then.
pub fn resistor_ohms(bitrate_hz: u32, soft: Softness, capacitance_farads: f32) -> f32 {
    if soft.get() == 1 {
        return 0.0;
    }
    // ln(1 - 1/soft), kept accurate for large soft
    let per_sample = libm::log1pf(-1.0 / soft.get() as f32);
    -1.0 / (per_sample * bitrate_hz as f32 * capacitance_farads)
}

/// The softness an existing filter gives at `bitrate_hz`, rounded to the
/// nearest integer and kept at least 1.
pub fn softness_for(bitrate_hz: u32, resistance_ohms: f32, capacitance_farads: f32) -> Softness {
    let tau_samples = resistance_ohms * capacitance_farads * bitrate_hz as f32;
    let step = -libm::expm1f(-1.0 / tau_samples);
    let soft = libm::roundf(1.0 / step).clamp(1.0, u8::MAX as f32) as u8;
    Softness::new(soft.max(1)).unwrap_or_default()
}
