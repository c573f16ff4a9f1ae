use snafu::prelude::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[snafu(visibility(pub))]
pub enum PlaybackError {
    #[snafu(display("failed to drive the primary pin"))]
    PrimaryPin,
    #[snafu(display("failed to drive or release the secondary pin"))]
    SecondaryPin,
}
