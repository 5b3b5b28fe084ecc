//! Core traits for digital signal measurers
//!
//! A measurer is built from a validated [`MeasurementRequest`], fed the
//! transitions of one channel, and then asked for its results.

use crate::{MeasurementRequest, Measurements, Metric, Result, Transition};

/// A single-pass measurement over a digital transition stream
pub trait DigitalMeasurer: Sized {
    /// Metrics this measurer is able to produce
    const SUPPORTED: &'static [Metric];

    /// Construct from an already validated request
    ///
    /// Implementations must reject metrics outside [`Self::SUPPORTED`].
    fn from_request(request: MeasurementRequest) -> Result<Self>;

    /// The metrics this measurer was asked for
    fn requested(&self) -> &MeasurementRequest;

    /// Consume transitions in time order
    ///
    /// May be called repeatedly; consecutive calls behave like one call
    /// over the concatenated input.
    fn process_data<I, E>(&mut self, data: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Transition>;

    /// Derive the requested metrics from the data seen so far
    fn measure(&self) -> Measurements;

    /// Construct from metric names, canonical or host spelling
    fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_request(MeasurementRequest::parse(names, Self::SUPPORTED)?)
    }
}
