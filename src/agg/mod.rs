pub(crate) mod avg;

use crate::Value;

/// Defines an aggregation.
///
/// - `transform` defines what to do with each value (default: Add)
///
/// - `finish` can transform the result value (default: Identity)
pub trait Aggregation {
    fn transform(accu: Value, x: Value) -> Value {
        accu + x
    }

    fn finish(accu: &Accumulator) -> Value {
        accu.value
    }
}

/// Running state of an aggregation
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Accumulator {
    pub value: Value,
    pub len: usize,
}

impl Accumulator {
    pub fn push<A: Aggregation>(&mut self, x: Value) {
        self.len += 1;
        self.value = A::transform(self.value, x);
    }
}

/// Folds the values in order, returning `None` if there are none.
pub fn aggregate<A, T>(values: &[T]) -> Option<Value>
where
    A: Aggregation,
    T: Copy + Into<Value>,
{
    let mut accu = Accumulator::default();

    for &x in values {
        accu.push::<A>(x.into());
    }

    if accu.len == 0 {
        return None;
    }

    Some(A::finish(&accu))
}
