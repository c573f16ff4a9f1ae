pub use embedded_hal_1::digital::{ErrorType, OutputPin, PinState, StatefulOutputPin};

/// Pin direction. `Input` leaves the pin floating (high impedance) so the
/// RC network settles on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Output,
    Input,
}

/// An output pin that can also be released to high impedance.
pub trait TriStatePin: OutputPin {
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;

    /// Switches to output and drives `state`.
    fn drive(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.set_direction(Direction::Output)?;
        self.set_state(state)
    }

    fn float(&mut self) -> Result<(), Self::Error> {
        self.set_direction(Direction::Input)
    }
}

#[cfg(feature = "rp2040")]
mod rp {
    use core::convert::Infallible;

    use embassy_rp::gpio::{Flex, Pin};

    use super::{Direction, TriStatePin};

    impl<'d, T: Pin> TriStatePin for Flex<'d, T> {
        fn set_direction(&mut self, direction: Direction) -> Result<(), Infallible> {
            match direction {
                Direction::Output => self.set_as_output(),
                Direction::Input => self.set_as_input(),
            }
            Ok(())
        }
    }
}
