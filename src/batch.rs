//! Decode many independent documents at once.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::decode;
use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::value::Value;

/// Parse every input on its own; results line up with `inputs` by index.
///
/// With the `parallel` feature the work is spread over the rayon pool.
#[cfg(feature = "parallel")]
pub fn parse_batch<S>(inputs: &[S], options: &DecodeOptions) -> Vec<Result<Value, DecodeError>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(count = inputs.len(), "parsing batch in parallel");
    inputs
        .par_iter()
        .map(|input| decode::parse(input.as_ref(), options))
        .collect()
}

/// Parse every input on its own; results line up with `inputs` by index.
#[cfg(not(feature = "parallel"))]
pub fn parse_batch<S>(inputs: &[S], options: &DecodeOptions) -> Vec<Result<Value, DecodeError>>
where
    S: AsRef<str> + Sync,
{
    tracing::debug!(count = inputs.len(), "parsing batch");
    inputs
        .iter()
        .map(|input| decode::parse(input.as_ref(), options))
        .collect()
}
