//! Plays a BTc 1.7 encoded A440 tone on two pins when the button on GP15 is
//! pressed.
//!
//! Wiring: GP16 and GP17 each through a resistor into the same capacitor to
//! ground (see the log for the resistor value), then to an amplifier.
#![no_std]
#![no_main]

use core::num::NonZeroU64;

use btc_sound::{
    decoder::Btc17Decoder,
    encoder::{encoded_len, Encoder, Softness},
    player::{play, AtEnd},
    rc, BitOrder,
};
use defmt::*;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{self, Input, Level, Output};
use embassy_time::Instant;
use micromath::F32Ext;
use panic_probe as _;
use static_cell::StaticCell;

const SAMPLE_HZ: u32 = 22_000;
const TONE_SAMPLES: usize = SAMPLE_HZ as usize / 2;
const TONE_BYTES: usize = encoded_len(TONE_SAMPLES);
const SOFT: Softness = Softness::BTC16;
const ORDER: BitOrder = BitOrder::MsbFirst;

static TONE: StaticCell<[u8; TONE_BYTES]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Start");
    let p = embassy_rp::init(Default::default());

    let mut start_button = Input::new(p.PIN_15, gpio::Pull::Down);
    let sample_rate = unwrap!(NonZeroU64::new(SAMPLE_HZ as u64));

    info!(
        "RC filter: {} ohm with a 0.22 uF capacitor",
        rc::resistor_ohms(SAMPLE_HZ, SOFT, rc::DEFAULT_CAPACITANCE_FARADS)
    );

    let tone = TONE.init([0; TONE_BYTES]);
    let tone_len = render_tone(tone);

    let mut decoder = Btc17Decoder::new(
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        ORDER,
    );

    loop {
        println!("WAIT FOR PRESS");
        start_button.wait_for_rising_edge().await;

        let ts = Instant::now();
        unwrap!(play(&mut decoder, &tone[..tone_len], sample_rate, AtEnd::Stop).await);
        println!("PLAYED in {}ms", (Instant::now() - ts).as_millis());
    }
}

/// Encodes half a second of A440 into `out`, returning the encoded length.
fn render_tone(out: &mut [u8]) -> usize {
    const A440_HZ: f32 = 440.0;

    let mut pcm = [0u8; TONE_SAMPLES];
    for (n, sample) in pcm.iter_mut().enumerate() {
        let radians = 2.0 * core::f32::consts::PI * A440_HZ * n as f32 / SAMPLE_HZ as f32;
        *sample = (((radians.sin() + 1.0) / 2.0) * 255.0) as u8;
    }

    let encoded = unwrap!(Encoder::btc17(SOFT, ORDER).encode(&pcm, out));
    info!("Encoded {} samples into {} bytes", TONE_SAMPLES, encoded.len());
    encoded.len()
}
