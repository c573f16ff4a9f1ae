use btc_sound::{
    rc::{resistor_ohms, softness_for, DEFAULT_CAPACITANCE_FARADS},
    Softness,
};

const BITRATE_HZ: u32 = 22_000;

const SOFTNESS: [Softness; 7] = [
    Softness::BTC4,
    Softness::BTC8,
    Softness::BTC16,
    Softness::BTC21,
    Softness::BTC32,
    Softness::BTC48,
    Softness::BTC64,
];

fn exact_ohms(bitrate_hz: u32, soft: u8, capacitance_farads: f64) -> f64 {
    -1.0 / ((1.0 - 1.0 / soft as f64).ln() * bitrate_hz as f64 * capacitance_farads)
}

#[test]
fn matches_reference_values() {
    // 22 kHz, soft 21, 0.22 uF
    let r = resistor_ohms(BITRATE_HZ, Softness::BTC21, DEFAULT_CAPACITANCE_FARADS);
    assert!((r - 4_234.7).abs() < 5.0, "got {r}");
}

#[test]
fn agrees_with_double_precision_for_all_presets() {
    for soft in SOFTNESS {
        let r = resistor_ohms(BITRATE_HZ, soft, DEFAULT_CAPACITANCE_FARADS) as f64;
        let exact = exact_ohms(BITRATE_HZ, soft.get(), DEFAULT_CAPACITANCE_FARADS as f64);
        let rel = ((r - exact) / exact).abs();
        assert!(rel < 1e-3, "soft {}: got {r}, want {exact}", soft.get());
    }
}

#[test]
fn presets_round_trip_through_the_filter() {
    for bitrate_hz in [8_000, 16_000, 22_000, 44_100] {
        for soft in SOFTNESS {
            let r = resistor_ohms(bitrate_hz, soft, DEFAULT_CAPACITANCE_FARADS);
            assert_eq!(
                softness_for(bitrate_hz, r, DEFAULT_CAPACITANCE_FARADS),
                soft,
                "at {bitrate_hz} Hz"
            );
        }
    }
}

#[test]
fn softer_needs_a_bigger_resistor() {
    let ohms: Vec<f32> = SOFTNESS
        .iter()
        .map(|&soft| resistor_ohms(BITRATE_HZ, soft, DEFAULT_CAPACITANCE_FARADS))
        .collect();
    assert!(ohms.windows(2).all(|w| w[0] < w[1]), "{ohms:?}");
}

#[test]
fn unit_softness_has_no_resistor() {
    let one = Softness::new(1).unwrap();
    assert_eq!(resistor_ohms(BITRATE_HZ, one, DEFAULT_CAPACITANCE_FARADS), 0.0);
    assert_eq!(softness_for(BITRATE_HZ, 0.0, DEFAULT_CAPACITANCE_FARADS), one);
}
