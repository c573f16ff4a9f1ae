#![allow(dead_code)]

use std::{cell::RefCell, convert::Infallible, rc::Rc};

use btc_sound::pin::{Direction, ErrorType, OutputPin, StatefulOutputPin, TriStatePin};
use embedded_hal_1::digital::{Error, ErrorKind};
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinEvent {
    Low,
    High,
    Output,
    Input,
}

/// What a pin went through, shared between the pin and the test.
#[derive(Debug, Default)]
pub struct PinLog {
    pub events: Vec<PinEvent>,
    pub high: bool,
    pub direction: Option<Direction>,
}

/// Pin that records every call into a shared [`PinLog`].
#[derive(Clone, Default)]
pub struct MockPin {
    log: Rc<RefCell<PinLog>>,
}

impl MockPin {
    pub fn new() -> (Self, Rc<RefCell<PinLog>>) {
        let pin = Self::default();
        let log = pin.log.clone();
        (pin, log)
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mut log = self.log.borrow_mut();
        log.high = false;
        log.events.push(PinEvent::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mut log = self.log.borrow_mut();
        log.high = true;
        log.events.push(PinEvent::High);
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.log.borrow().high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.log.borrow().high)
    }
}

impl TriStatePin for MockPin {
    fn set_direction(&mut self, direction: Direction) -> Result<(), Infallible> {
        let mut log = self.log.borrow_mut();
        log.direction = Some(direction);
        log.events.push(match direction {
            Direction::Output => PinEvent::Output,
            Direction::Input => PinEvent::Input,
        });
        Ok(())
    }
}

#[derive(Debug)]
pub struct PinFault;

impl Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Pin whose every operation fails.
pub struct BrokenPin;

impl ErrorType for BrokenPin {
    type Error = PinFault;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        Err(PinFault)
    }
}

impl TriStatePin for BrokenPin {
    fn set_direction(&mut self, _: Direction) -> Result<(), PinFault> {
        Err(PinFault)
    }
}

pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0xB7C0_0001)
}

pub fn random_bytes(rng: &mut SmallRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

/// Bit `n` of `data` in stream order.
pub fn bit_at(data: &[u8], n: usize, msb_first: bool) -> bool {
    let byte = data[n / 8];
    let shift = if msb_first { 7 - n % 8 } else { n % 8 };
    byte >> shift & 1 == 1
}

/// `len` samples of a full-swing sine with a period of `period` samples.
pub fn sine(len: usize, period: usize) -> Vec<u8> {
    (0..len)
        .map(|n| {
            let radians = 2.0 * std::f32::consts::PI * n as f32 / period as f32;
            (((radians.sin() + 1.0) / 2.0) * 255.0) as u8
        })
        .collect()
}
