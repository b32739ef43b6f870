use super::{aggregate, Accumulator, Aggregation};
use crate::{Error, Value};

#[derive(Clone)]
pub struct Avg;

impl Aggregation for Avg {
    #[allow(clippy::cast_precision_loss)]
    fn finish(accu: &Accumulator) -> Value {
        accu.value / accu.len as Value
    }
}

/// Calculates the arithmetic mean of the given numbers.
///
/// Values are summed in order in a single pass, then divided by their count.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `numbers` is empty.
///
/// # Examples
///
/// ```
/// assert_eq!(2.5, average::calculate_average(&[1, 2, 3, 4])?);
/// assert!(average::calculate_average::<f64>(&[]).is_err());
/// # Ok::<(), average::Error>(())
/// ```
pub fn calculate_average<T: Copy + Into<Value>>(numbers: &[T]) -> crate::Result<Value> {
    let avg = aggregate::<Avg, T>(numbers).ok_or(Error::EmptyInput)?;

    log::trace!("average of {} values: {avg:?}", numbers.len());

    Ok(avg)
}
