use crate::config::Config;
use crate::error::Result;
use crate::input::InputSource;

/// A stateful computation bound to exactly one input unit.
///
/// The engine drives implementations through this capability set alone, so
/// new computations plug in without touching it.
pub trait Worker: Send + Sized + 'static {
    type Source: InputSource;
    type Output;

    /// Bind a fresh worker to `input`. Its result slot starts unset.
    fn bind(input: Self::Source) -> Self;

    /// Compute this worker's partial result from its own input alone.
    /// Deterministic in the input content, and idempotent.
    fn map(&mut self) -> Result<()>;

    /// Fold `other`'s partial result into this worker's slot. Both sides
    /// must have completed `map`; the engine's barrier sequences that.
    fn reduce(&mut self, other: &Self);

    /// The partial (or folded) result, unset until `map` has run.
    fn result(&self) -> Option<&Self::Output>;

    /// Consume the worker, yielding whatever its slot holds.
    fn into_result(self) -> Option<Self::Output>;
}

/// Enumerate the inputs `config` describes and bind one `W` per input,
/// preserving enumeration order. Fails only by propagating what the
/// enumerator raises.
pub fn create_workers<W: Worker>(config: &Config) -> Result<Vec<W>> {
    let inputs = W::Source::generate(config)?;
    Ok(inputs.into_iter().map(W::bind).collect())
}
