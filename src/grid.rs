//! Grid cell addressing, coordinate quantization, and quadtree descent.
//!
//! The index quantizes degrees into a non-negative integer space
//! (`COORD_SCALE` units per degree) and addresses a 1°x1° grid cell by
//! `(lat_idx, lon_idx)`. Cells that subdivide store a tag-3 slot whose child
//! block is descended with integer midpoints until a terminal tag is found.

use crate::bytes::IndexBytes;
use crate::error::{LookupError, LookupResult};
use crate::formats::{Slot, SlotTag, COORD_SCALE, GRID_COLS, GRID_ROWS, SLOT_BYTES};

/// Upper bound on tag-3 chain length before the descent is declared corrupt.
///
/// A real tree bottoms out long before this: each step halves a cell that
/// starts at `COORD_SCALE` units, so bounds degenerate after ~20 splits.
const MAX_DESCENT_STEPS: usize = 64;

/// Map degrees to scaled integer coordinates:
/// `x = round((lon + 180) * 10^6)`, `y = round((lat + 90) * 10^6)`.
pub fn quantize(lat: f64, lon: f64) -> (i64, i64) {
    let x = ((lon + 180.0) * COORD_SCALE as f64).round() as i64;
    let y = ((lat + 90.0) * COORD_SCALE as f64).round() as i64;
    (x, y)
}

/// Map degrees to `(lat_idx, lon_idx)` grid cell indices.
///
/// The floor is clamped so the domain edges stay addressable:
/// `lat = 90` maps to row 179 and `lon = 180` to column 359.
pub fn cell_indices(lat: f64, lon: f64) -> (usize, usize) {
    let lat_idx = ((lat + 90.0).floor() as i64).clamp(0, GRID_ROWS as i64 - 1) as usize;
    let lon_idx = ((lon + 180.0).floor() as i64).clamp(0, GRID_COLS as i64 - 1) as usize;
    (lat_idx, lon_idx)
}

/// Byte offset of a cell's slot within the grid block (row-major by latitude).
pub fn cell_slot_offset(lat_idx: usize, lon_idx: usize) -> usize {
    (lat_idx * GRID_COLS + lon_idx) * SLOT_BYTES
}

/// Current cell bounds in scaled integer coordinates.
///
/// `(x_min, y_min)` doubles as the cell origin that polygon-relative
/// coordinates are expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    /// West edge (inclusive).
    pub x_min: i64,
    /// East edge.
    pub x_max: i64,
    /// South edge (inclusive).
    pub y_min: i64,
    /// North edge.
    pub y_max: i64,
}

impl CellBounds {
    /// Bounds of the 1°x1° grid cell at `(lat_idx, lon_idx)`.
    pub fn for_cell(lat_idx: usize, lon_idx: usize) -> Self {
        let x_min = lon_idx as i64 * COORD_SCALE;
        let y_min = lat_idx as i64 * COORD_SCALE;
        CellBounds {
            x_min,
            x_max: x_min + COORD_SCALE,
            y_min,
            y_max: y_min + COORD_SCALE,
        }
    }
}

/// Follow tag-3 slots from `slot` until a terminal tag, tightening `bounds`
/// around the quantized point `(xq, yq)` at each step.
///
/// `slot_offset` is the byte offset `slot` was read from; the returned pair
/// carries the terminal slot together with the offset it was read from, so
/// errors about its payload can point at the actual child slot.
///
/// The `>= mid` comparisons deterministically pick the upper child when the
/// point lies exactly on a midpoint, matching the builder's partitioning
/// rule. An unbounded tag-3 chain reports `Corrupt`.
pub fn descend(
    bytes: &IndexBytes<'_>,
    base_offset: usize,
    mut slot: Slot,
    mut slot_offset: usize,
    bounds: &mut CellBounds,
    xq: i64,
    yq: i64,
) -> LookupResult<(Slot, usize)> {
    for _ in 0..MAX_DESCENT_STEPS {
        if slot.tag() != SlotTag::Branch {
            return Ok((slot, slot_offset));
        }
        let child_block = base_offset + slot.payload() as usize;
        let x_mid = (bounds.x_min + bounds.x_max) / 2;
        let y_mid = (bounds.y_min + bounds.y_max) / 2;
        let north = yq >= y_mid;
        let east = xq >= x_mid;
        let quadrant = usize::from(north) * 2 + usize::from(east);
        slot_offset = child_block + quadrant * SLOT_BYTES;
        slot = Slot::from_raw(bytes.u32_at(slot_offset)?);
        if north {
            bounds.y_min = y_mid;
        } else {
            bounds.y_max = y_mid;
        }
        if east {
            bounds.x_min = x_mid;
        } else {
            bounds.x_max = x_mid;
        }
    }
    Err(LookupError::corrupt(
        "quadtree descent did not terminate",
        slot_offset,
    ))
}
