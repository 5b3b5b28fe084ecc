//! One measurer per channel over a set of independent captures
//!
//! Channels never share state: each gets its own measurer built from the
//! same request. With the `parallel` feature the channels are spread over
//! the rayon thread pool; results come back in input order either way.

use crate::ClockStatsAccumulator;
use clock_core::{DigitalMeasurer, MeasurementRequest, Measurements, Result, Transition};
use tracing::{debug, instrument};

/// Measure a single channel with a fresh measurer
pub fn measure_channel<M, C, E>(request: &MeasurementRequest, channel: C) -> Result<Measurements>
where
    M: DigitalMeasurer,
    C: IntoIterator<Item = E>,
    E: Into<Transition>,
{
    let mut measurer = M::from_request(request.clone())?;
    measurer.process_data(channel);
    Ok(measurer.measure())
}

/// Measure every channel independently, returning results in channel order
#[instrument(skip_all, fields(channels = channels.len()))]
pub fn measure_channels<M, C, E>(
    request: &MeasurementRequest,
    channels: Vec<C>,
) -> Result<Vec<Measurements>>
where
    M: DigitalMeasurer,
    C: IntoIterator<Item = E> + Send,
    E: Into<Transition>,
{
    debug!("Measuring {} channels for {} metrics", channels.len(), request.len());

    #[cfg(feature = "parallel")]
    let results: Result<Vec<Measurements>> = {
        use rayon::prelude::*;
        channels
            .into_par_iter()
            .map(|channel| measure_channel::<M, _, _>(request, channel))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Result<Vec<Measurements>> = channels
        .into_iter()
        .map(|channel| measure_channel::<M, _, _>(request, channel))
        .collect();

    results
}

/// [`measure_channels`] with the clock statistics measurer
pub fn measure_clock_channels<C, E>(
    request: &MeasurementRequest,
    channels: Vec<C>,
) -> Result<Vec<Measurements>>
where
    C: IntoIterator<Item = E> + Send,
    E: Into<Transition>,
{
    measure_channels::<ClockStatsAccumulator, C, E>(request, channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock_core::{Metric, Tick};

    fn square(half_period: Tick, cycles: usize) -> Vec<(Tick, bool)> {
        (0..=2 * cycles)
            .map(|i| (i as Tick * half_period, i % 2 == 1))
            .collect()
    }

    #[test]
    fn test_channels_are_independent() {
        let request = MeasurementRequest::all(&Metric::ALL);
        let channels = vec![square(10, 4), square(25, 2), Vec::new()];

        let results = measure_clock_channels(&request, channels).unwrap();
        assert_eq!(results.len(), 3);

        let f0 = results[0].get(Metric::FrequencyAvg).unwrap().as_f64();
        let f1 = results[1].get(Metric::FrequencyAvg).unwrap().as_f64();
        assert!((f0 - 1.0 / 20.0).abs() < 1e-12);
        assert!((f1 - 1.0 / 50.0).abs() < 1e-12);

        // Empty capture only reports edge counts
        assert_eq!(results[2].len(), 2);
    }

    #[test]
    fn test_matches_single_measurer() {
        let request = MeasurementRequest::all(&Metric::ALL);
        let channel = square(7, 9);

        let mut clock = ClockStatsAccumulator::all();
        clock.ingest(channel.clone());

        let results = measure_clock_channels(&request, vec![channel]).unwrap();
        assert_eq!(results[0], clock.measure());
    }

    #[test]
    fn test_empty_channel_list() {
        let request = MeasurementRequest::all(&Metric::ALL);
        let results = measure_clock_channels::<Vec<(Tick, bool)>, _>(&request, Vec::new()).unwrap();
        assert!(results.is_empty());
    }
}
