use snafu::prelude::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[snafu(visibility(pub))]
pub enum EncodeError {
    /// The output filled up before every input sample was encoded. The bytes
    /// that did fit have already been written.
    #[snafu(display("output holds {capacity} bytes but {needed} are needed"))]
    OutputTooSmall { needed: usize, capacity: usize },
}
