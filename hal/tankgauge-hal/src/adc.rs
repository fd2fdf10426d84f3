//! Analog sampling abstraction

/// Errors from a single ADC conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// The converter flagged the sample as invalid
    ConversionFailed,
}

/// One-shot ADC sample source
///
/// Yields the latest raw code for a single, already selected channel.
pub trait AdcReader {
    /// Read one raw sample (0..=max code of the converter)
    fn read(&mut self) -> Result<u16, AdcError>;
}

impl<A: AdcReader + ?Sized> AdcReader for &mut A {
    fn read(&mut self) -> Result<u16, AdcError> {
        (**self).read()
    }
}
