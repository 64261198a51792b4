use tracing::trace;

use crate::common::{resolve_type_code, GeometryTypeInfo, WKB_25D_BIT};
use crate::error::WkbResult;
use crate::reader::{ByteReader, Endianness};

/// Read the byte order marker and type code that open every WKB geometry.
///
/// The marker becomes the reader's active byte order; callers that need to restore the previous
/// order must save it first. Z is set if either the legacy 2.5D bit or the ISO band says so, while
/// M only ever comes from the ISO band.
pub fn read_geometry_type(reader: &mut ByteReader<'_>) -> WkbResult<GeometryTypeInfo> {
    let byte_order = Endianness::from(reader.read_u8()?);
    reader.set_byte_order(byte_order);

    let raw_code = reader.read_u32()?;

    let mut code = raw_code;
    let mut legacy_z = false;
    if code > WKB_25D_BIT {
        legacy_z = true;
        code -= WKB_25D_BIT;
    }

    let (kind, iso_z, iso_m) = resolve_type_code(code)?;
    let info = GeometryTypeInfo {
        raw_code,
        kind,
        has_z: legacy_z || iso_z,
        has_m: iso_m,
    };
    trace!(
        ?byte_order,
        raw_code,
        kind = %info.kind,
        has_z = info.has_z,
        has_m = info.has_m,
        "read geometry header"
    );
    Ok(info)
}
