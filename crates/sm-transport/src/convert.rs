//! Absent-in, absent-out wrappers.
//!
//! The per-type conversions (`From<&Native> for Wire`, `TryFrom<Wire> for
//! Native`) only ever see a present value. These wrappers handle absence at
//! the boundary: `None` passes straight through and is never an error.

use sm_core::Urn;

use crate::error::{ConversionError, IdField};

/// Convert an optional native value to its wire form.
pub fn to_wire<'a, N, W>(native: Option<&'a N>) -> Option<W>
where
    W: From<&'a N>,
{
    native.map(W::from)
}

/// Validate and convert an optional wire value to its native form.
///
/// # Errors
///
/// Propagates the [`ConversionError`] of the underlying conversion.
pub fn from_wire<W, N>(wire: Option<W>) -> Result<Option<N>, ConversionError>
where
    N: TryFrom<W, Error = ConversionError>,
{
    wire.map(N::try_from).transpose()
}

/// Parse an identifier the message cannot do without.
pub(crate) fn required_id(raw: &str, field: IdField) -> Result<Urn, ConversionError> {
    Urn::parse(raw).map_err(ConversionError::field(field))
}

/// Parse an identifier the sender may leave unset. An empty wire string is
/// the zero [`Urn`]; anything else must be a valid URN.
pub(crate) fn optional_id(raw: &str, field: IdField) -> Result<Urn, ConversionError> {
    if raw.is_empty() {
        return Ok(Urn::default());
    }
    required_id(raw, field)
}
