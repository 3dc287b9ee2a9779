//! In-memory LLTZ index writer for tests and benches.
//!
//! Important: this file lives under `tests/support/` so it is **not** compiled
//! as a standalone integration test target.
//!
//! The writer fabricates small synthetic indices: a string table, a grid with
//! a handful of interesting cells, and a packed region holding quadtree child
//! blocks and polygon lists. It makes no attempt at geometric simplification;
//! callers spell out cell trees and rings exactly as they should land on disk.

use byteorder::{LittleEndian, WriteBytesExt};
use lltz::formats::{
    Slot, SlotTag, CHILD_BLOCK_BYTES, GRID_BYTES, GRID_COLS, INDEX_MAGIC, SLOT_BYTES,
};

/// One node of a cell's spatial tree.
pub enum Node {
    /// No coverage; lookups here use the fallback resolver.
    Empty,
    /// The whole node maps to one string-table index.
    Single(u16),
    /// A polygon list of per-timezone records.
    Polygons(Vec<TzRecord>),
    /// Subdivide into SW, SE, NW, NE children.
    Branch(Box<[Node; 4]>),
}

/// One timezone record in a polygon list.
pub struct TzRecord {
    /// String-table index.
    pub tz: u16,
    /// Polygons tried in order until one covers the point.
    pub polygons: Vec<Polygon>,
}

/// Rings in scaled units relative to the owning node's `(x_min, y_min)`;
/// the first ring is the outer boundary, the rest are holes.
pub struct Polygon {
    pub rings: Vec<Vec<(u16, u16)>>,
}

impl Polygon {
    /// A single-ring polygon.
    pub fn ring(points: Vec<(u16, u16)>) -> Self {
        Polygon {
            rings: vec![points],
        }
    }

    /// An axis-aligned rectangle.
    pub fn rect(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Polygon::ring(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)])
    }
}

/// Builds LLTZ index bytes from a string table and per-cell trees.
pub struct IndexWriter {
    timezones: Vec<String>,
    cells: Vec<((usize, usize), Node)>,
}

impl IndexWriter {
    /// Start a writer with the given string table, indexed by position.
    pub fn new(timezones: &[&str]) -> Self {
        IndexWriter {
            timezones: timezones.iter().map(|s| s.to_string()).collect(),
            cells: Vec::new(),
        }
    }

    /// Place a tree at grid cell `(lat_idx, lon_idx)`; unset cells stay empty.
    pub fn cell(mut self, lat_idx: usize, lon_idx: usize, node: Node) -> Self {
        self.cells.push(((lat_idx, lon_idx), node));
        self
    }

    /// Serialize to LLTZ bytes.
    pub fn finish(&self) -> Vec<u8> {
        let table = self.timezones.join("\0").into_bytes();
        assert!(table.len() <= u16::MAX as usize, "string table too large");

        let mut packed = Vec::new();
        let mut grid = vec![Slot::pack(SlotTag::Empty, 0); GRID_BYTES / SLOT_BYTES];
        for ((lat_idx, lon_idx), node) in &self.cells {
            grid[lat_idx * GRID_COLS + lon_idx] = encode_node(node, &mut packed);
        }

        let mut out = Vec::new();
        out.extend_from_slice(&INDEX_MAGIC);
        out.write_u16::<LittleEndian>(table.len() as u16).unwrap();
        out.extend_from_slice(&table);
        for slot in grid {
            out.write_u32::<LittleEndian>(slot.raw()).unwrap();
        }
        out.extend_from_slice(&packed);
        out
    }
}

/// Append `node`'s body to the packed region and return its slot. Tag-2 and
/// tag-3 payloads are offsets relative to the start of the packed region.
fn encode_node(node: &Node, packed: &mut Vec<u8>) -> Slot {
    match node {
        Node::Empty => Slot::pack(SlotTag::Empty, 0),
        Node::Single(tz) => Slot::pack(SlotTag::Single, u32::from(*tz)),
        Node::Polygons(records) => {
            let offset = packed.len() as u32;
            packed.push(records.len() as u8);
            for record in records {
                packed.write_u16::<LittleEndian>(record.tz).unwrap();
                packed.push(record.polygons.len() as u8);
                for polygon in &record.polygons {
                    write_polygon(packed, polygon);
                }
            }
            Slot::pack(SlotTag::Polygons, offset)
        }
        Node::Branch(children) => {
            let block = packed.len();
            packed.resize(block + CHILD_BLOCK_BYTES, 0);
            for (quadrant, child) in children.iter().enumerate() {
                let slot = encode_node(child, packed);
                let at = block + quadrant * SLOT_BYTES;
                packed[at..at + SLOT_BYTES].copy_from_slice(&slot.raw().to_le_bytes());
            }
            Slot::pack(SlotTag::Branch, block as u32)
        }
    }
}

fn write_polygon(packed: &mut Vec<u8>, polygon: &Polygon) {
    let xs = polygon.rings.iter().flatten().map(|p| p.0);
    let ys = polygon.rings.iter().flatten().map(|p| p.1);

    let mut body = Vec::new();
    body.push(polygon.rings.len() as u8);
    body.write_u16::<LittleEndian>(xs.clone().min().unwrap_or(0))
        .unwrap();
    body.write_u16::<LittleEndian>(xs.max().unwrap_or(0)).unwrap();
    body.write_u16::<LittleEndian>(ys.clone().min().unwrap_or(0))
        .unwrap();
    body.write_u16::<LittleEndian>(ys.max().unwrap_or(0)).unwrap();
    for ring in &polygon.rings {
        body.write_u16::<LittleEndian>(ring.len() as u16).unwrap();
        for &(x, y) in ring {
            body.write_u16::<LittleEndian>(x).unwrap();
            body.write_u16::<LittleEndian>(y).unwrap();
        }
    }

    packed.write_u16::<LittleEndian>(body.len() as u16).unwrap();
    packed.extend_from_slice(&body);
}
