//! LLTZ on-disk format constants and the tagged-slot encoding.
//!
//! ## Public invariants (must not change without a format bump)
//!
//! - **File layout** (all integers little-endian unsigned):
//!   `[INDEX_MAGIC:8][L:u16][string table:L][grid:180*360*4][packed region]`
//! - **String table**: NUL-separated UTF-8 identifiers, indexed by position.
//! - **Grid**: row-major `[lat_idx = 0..179][lon_idx = 0..359]` u32 slots.
//! - **Tagged slot**: bits 30-31 = tag, bits 0-29 = payload. Tag-2/tag-3
//!   payloads are byte offsets added to the base offset (`10 + L + 259200`).
//! - **Quadtree child block**: 16 bytes, four u32 slots in SW, SE, NW, NE
//!   order, i.e. index `(north ? 2 : 0) | (east ? 1 : 0)`.

/// Magic bytes at the start of every LLTZ index.
pub const INDEX_MAGIC: [u8; 8] = *b"LLTZ1\0\0\0";

/// Scale factor mapping degrees into non-negative integer coordinates:
/// `x = round((lon + 180) * COORD_SCALE)`, `y = round((lat + 90) * COORD_SCALE)`.
pub const COORD_SCALE: i64 = 1_000_000;

/// Grid rows (one per degree of latitude).
pub const GRID_ROWS: usize = 180;
/// Grid columns (one per degree of longitude).
pub const GRID_COLS: usize = 360;
/// Bytes occupied by one tagged slot.
pub const SLOT_BYTES: usize = 4;
/// Total size of the grid block.
pub const GRID_BYTES: usize = GRID_ROWS * GRID_COLS * SLOT_BYTES;

/// Size of a quadtree child block: four consecutive tagged slots.
pub const CHILD_BLOCK_BYTES: usize = 16;

/// Byte offset of the string-table length field (right after the magic).
pub const STRING_TABLE_LEN_OFFSET: usize = INDEX_MAGIC.len();
/// Byte offset of the string table itself.
pub const STRING_TABLE_OFFSET: usize = STRING_TABLE_LEN_OFFSET + 2;

/// Type tag carried in the top two bits of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTag {
    /// No coverage in this region; the fallback resolver applies.
    Empty,
    /// The whole region maps to one identifier; payload is a string-table index.
    Single,
    /// One or more polygons cover parts of this region; payload is a
    /// base-relative byte offset to a polygon list.
    Polygons,
    /// Subdivide; payload is a base-relative byte offset to a child block.
    Branch,
}

/// A 32-bit tagged slot: 2-bit tag, 30-bit payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(u32);

impl Slot {
    /// Payload width in bits; caps the packed region and the string table
    /// at 2^30 each. Writers must refuse inputs that would exceed either.
    pub const PAYLOAD_BITS: u32 = 30;

    const PAYLOAD_MASK: u32 = (1 << Self::PAYLOAD_BITS) - 1;

    /// Wrap a raw little-endian slot word.
    pub fn from_raw(raw: u32) -> Self {
        Slot(raw)
    }

    /// Encode a tag/payload pair. `payload` must fit in 30 bits.
    pub fn pack(tag: SlotTag, payload: u32) -> Self {
        assert!(payload <= Self::PAYLOAD_MASK, "slot payload exceeds 30 bits");
        let tag = match tag {
            SlotTag::Empty => 0u32,
            SlotTag::Single => 1,
            SlotTag::Polygons => 2,
            SlotTag::Branch => 3,
        };
        Slot((tag << Self::PAYLOAD_BITS) | payload)
    }

    /// The raw 32-bit word.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The type tag in bits 30-31.
    pub fn tag(self) -> SlotTag {
        match self.0 >> Self::PAYLOAD_BITS {
            0 => SlotTag::Empty,
            1 => SlotTag::Single,
            2 => SlotTag::Polygons,
            _ => SlotTag::Branch,
        }
    }

    /// The payload in bits 0-29.
    pub fn payload(self) -> u32 {
        self.0 & Self::PAYLOAD_MASK
    }
}
