use crate::error::WkbResult;
use crate::geometry::{Dimension, Point};
use crate::reader::ByteReader;

/// Read the ordinates of one point: x, y, then z and m when the dimension has them.
///
/// See page 66 of <https://portal.ogc.org/files/?artifact_id=25355>.
pub(crate) fn read_point(reader: &mut ByteReader<'_>, dim: Dimension) -> WkbResult<Point> {
    let x = reader.read_f64()?;
    let y = reader.read_f64()?;
    let z = if dim.has_z() {
        Some(reader.read_f64()?)
    } else {
        None
    };
    let m = if dim.has_m() {
        Some(reader.read_f64()?)
    } else {
        None
    };
    Ok(Point::from_ordinates(x, y, z, m))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reader::Endianness;
    use crate::test::WkbBuilder;

    #[test]
    fn reads_only_declared_ordinates() {
        let buf = WkbBuilder::new(Endianness::LittleEndian)
            .coords(&[1., 2., 3., 4.])
            .build();
        let mut reader = ByteReader::with_byte_order(&buf, Endianness::LittleEndian);
        let point = read_point(&mut reader, Dimension::XYM).unwrap();
        assert_eq!(point, Point::new_m(1., 2., 3.));
        assert_eq!(reader.remaining(), 8);
    }

    #[test]
    fn empty_point_is_nan() {
        let buf = WkbBuilder::new(Endianness::BigEndian)
            .coords(&[f64::NAN, f64::NAN])
            .build();
        let point = read_point(&mut ByteReader::new(&buf), Dimension::XY).unwrap();
        assert!(point.is_empty());
    }
}
