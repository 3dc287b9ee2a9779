//! The index reader: header validation, string table, and the lookup façade.
//!
//! One query runs `validate -> grid slot -> (answer | quadtree descent) ->
//! (answer | polygon scan) -> (answer | fallback)`. Every path terminates;
//! there are no retries, no I/O, and no mutable state, so a single reader
//! shared across threads is the supported concurrency model.

use crate::bytes::{Cursor, IndexBytes};
use crate::error::{LookupError, LookupResult};
use crate::fallback;
use crate::formats::{
    Slot, SlotTag, GRID_BYTES, INDEX_MAGIC, STRING_TABLE_LEN_OFFSET, STRING_TABLE_OFFSET,
};
use crate::grid::{self, CellBounds};
use crate::polygon;

/// Read-only reader over an LLTZ index byte range.
///
/// `B` may be borrowed (`&[u8]`) or owned (`Vec<u8>`, a memory-map wrapper);
/// the grid, quadtree, and polygon regions are read in place. Only the
/// (small) string table is copied out at construction so identifier slices
/// can be returned without tying the reader to a borrowed lifetime.
pub struct IndexReader<B: AsRef<[u8]>> {
    bytes: B,
    timezones: Vec<Box<str>>,
    grid_offset: usize,
    base_offset: usize,
}

impl<B: AsRef<[u8]>> IndexReader<B> {
    /// Validate the header and string table and build a reader.
    ///
    /// Fails with `InvalidHeader` if the range does not start with the
    /// 8-byte magic, and with `Corrupt` if the declared string table or the
    /// grid block extends past the end of the range.
    pub fn open(bytes: B) -> LookupResult<Self> {
        let raw = bytes.as_ref();
        if raw.len() < INDEX_MAGIC.len() || raw[..INDEX_MAGIC.len()] != INDEX_MAGIC {
            return Err(LookupError::InvalidHeader);
        }
        let view = IndexBytes::new(raw);
        let table_len = view.u16_at(STRING_TABLE_LEN_OFFSET)? as usize;
        let table = view.slice(STRING_TABLE_OFFSET, table_len)?;
        let timezones = parse_string_table(table)?;

        let grid_offset = STRING_TABLE_OFFSET + table_len;
        let base_offset = grid_offset + GRID_BYTES;
        if raw.len() < base_offset {
            return Err(LookupError::corrupt("grid block truncated", raw.len()));
        }
        Ok(IndexReader {
            bytes,
            timezones,
            grid_offset,
            base_offset,
        })
    }

    /// Number of identifiers in the string table.
    pub fn timezone_count(&self) -> usize {
        self.timezones.len()
    }

    /// Identifier at string-table position `index`.
    pub fn timezone(&self, index: usize) -> Option<&str> {
        self.timezones.get(index).map(|s| &**s)
    }

    /// All timezone identifiers covering the point `(lat, lon)`, in on-disk
    /// order. The list is never empty: points with no polygon coverage
    /// resolve to nautical `Etc/GMT±N` identifiers.
    ///
    /// `lat` must be in `[-90, 90]` and `lon` in `[-180, 180]`, both finite;
    /// anything else fails with `OutOfRange` and leaves the reader usable.
    pub fn lookup(&self, lat: f64, lon: f64) -> LookupResult<Vec<&str>> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(LookupError::OutOfRange { lat, lon });
        }

        let view = IndexBytes::new(self.bytes.as_ref());
        let (lat_idx, lon_idx) = grid::cell_indices(lat, lon);
        let (xq, yq) = grid::quantize(lat, lon);

        let mut slot_offset = self.grid_offset + grid::cell_slot_offset(lat_idx, lon_idx);
        let mut bounds = CellBounds::for_cell(lat_idx, lon_idx);
        let mut slot = Slot::from_raw(view.u32_at(slot_offset)?);
        if slot.tag() == SlotTag::Branch {
            (slot, slot_offset) =
                grid::descend(&view, self.base_offset, slot, slot_offset, &mut bounds, xq, yq)?;
        }

        match slot.tag() {
            SlotTag::Single => Ok(vec![self.timezone_checked(slot.payload(), slot_offset)?]),
            SlotTag::Polygons => {
                let list_offset = self.base_offset + slot.payload() as usize;
                let matches = self.scan_polygon_list(&view, list_offset, &bounds, xq, yq)?;
                if matches.is_empty() {
                    Ok(fallback::resolve(lat, lon))
                } else {
                    Ok(matches)
                }
            }
            SlotTag::Empty => Ok(fallback::resolve(lat, lon)),
            // `descend` only returns terminal tags.
            SlotTag::Branch => unreachable!("descent returned a branch slot"),
        }
    }

    /// Walk one polygon list: for each timezone record, test polygons until
    /// one covers the point, then skip the record's remaining polygons by
    /// their size fields.
    fn scan_polygon_list(
        &self,
        view: &IndexBytes<'_>,
        list_offset: usize,
        bounds: &CellBounds,
        xq: i64,
        yq: i64,
    ) -> LookupResult<Vec<&str>> {
        let origin = (bounds.x_min, bounds.y_min);
        let mut cur = Cursor::new(*view, list_offset);
        let count = cur.take_u8()?;
        let mut out = Vec::new();
        for _ in 0..count {
            let record_offset = cur.offset();
            let tz_index = cur.take_u16()?;
            let polygons = cur.take_u8()?;
            let mut hit = false;
            for _ in 0..polygons {
                if hit {
                    polygon::skip_polygon(&mut cur)?;
                } else {
                    hit = polygon::polygon_contains(&mut cur, origin, (xq, yq))?;
                }
            }
            if hit {
                out.push(self.timezone_checked(tz_index as u32, record_offset)?);
            }
        }
        Ok(out)
    }

    fn timezone_checked(&self, index: u32, offset: usize) -> LookupResult<&str> {
        self.timezones
            .get(index as usize)
            .map(|s| &**s)
            .ok_or_else(|| LookupError::corrupt("timezone index out of table", offset))
    }
}

/// Split the NUL-separated string table into identifiers.
///
/// The builder joins identifiers with a single NUL and no terminator; a
/// trailing NUL (terminator convention) is also accepted.
fn parse_string_table(table: &[u8]) -> LookupResult<Vec<Box<str>>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    let mut segment_start = 0usize;
    for segment in table.split(|b| *b == 0) {
        let s = std::str::from_utf8(segment).map_err(|_| {
            LookupError::corrupt(
                "timezone id is not UTF-8",
                STRING_TABLE_OFFSET + segment_start,
            )
        })?;
        out.push(s.into());
        segment_start += segment.len() + 1;
    }
    if table.last() == Some(&0) {
        out.pop();
    }
    Ok(out)
}
