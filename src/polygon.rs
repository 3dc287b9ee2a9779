//! Point-in-polygon containment over the on-disk polygon encoding.
//!
//! A polygon is `size:u16 | rings:u8 | bbox (4 x u16) | rings x ring`, with a
//! ring being `n:u16 | n x (x:u16, y:u16)`. All stored coordinates are
//! relative to the owning cell's origin; the ring is closed implicitly from
//! the last stored point back to the first. The first ring is the outer
//! boundary, subsequent rings are holes.
//!
//! The ray cast uses strict `>` comparisons on y plus the sign of the edge
//! cross product, so horizontal edges never divide and never double-count. A
//! point exactly on any edge is reported as on-edge and counts as a hit.

use crate::bytes::Cursor;
use crate::error::LookupResult;

/// Where a point sits relative to one ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRelation {
    /// Strictly inside the ring.
    Inside,
    /// Exactly on a ring edge (or vertex).
    OnEdge,
    /// Outside the ring.
    Outside,
}

/// Decode one polygon at the cursor and test whether it covers `point`.
///
/// `origin` is the current cell's `(x_min, y_min)` in scaled units; `point`
/// is the quantized query point in absolute scaled units. On return the
/// cursor sits at the next polygon regardless of the outcome.
///
/// On-edge contact with the outer ring or a hole ring is a hit; a point
/// strictly inside a hole is not covered.
pub fn polygon_contains(
    cur: &mut Cursor<'_>,
    origin: (i64, i64),
    point: (i64, i64),
) -> LookupResult<bool> {
    let start = cur.offset();
    let size = cur.take_u16()? as usize;
    let next = start + 2 + size;

    let rings = cur.take_u8()?;
    let x_min = cur.take_u16()? as i64 + origin.0;
    let x_max = cur.take_u16()? as i64 + origin.0;
    let y_min = cur.take_u16()? as i64 + origin.1;
    let y_max = cur.take_u16()? as i64 + origin.1;

    let (x, y) = point;
    if x < x_min || x > x_max || y < y_min || y > y_max || rings == 0 {
        cur.seek(next);
        return Ok(false);
    }

    let px = x - origin.0;
    let py = y - origin.1;

    let covered = match ring_relation(cur, px, py)? {
        RingRelation::Outside => false,
        RingRelation::OnEdge => true,
        RingRelation::Inside => {
            let mut covered = true;
            for _ in 1..rings {
                match ring_relation(cur, px, py)? {
                    RingRelation::Inside => {
                        covered = false;
                        break;
                    }
                    RingRelation::OnEdge => {
                        covered = true;
                        break;
                    }
                    RingRelation::Outside => {}
                }
            }
            covered
        }
    };
    cur.seek(next);
    Ok(covered)
}

/// Advance the cursor past one polygon without decoding its interior.
pub fn skip_polygon(cur: &mut Cursor<'_>) -> LookupResult<()> {
    let start = cur.offset();
    let size = cur.take_u16()? as usize;
    cur.seek(start + 2 + size);
    Ok(())
}

/// Ray-cast `(px, py)` (cell-relative scaled units) against the ring at the
/// cursor. Returns early on edge contact, which may leave the cursor inside
/// the ring; callers resynchronize via the polygon's `size` field.
fn ring_relation(cur: &mut Cursor<'_>, px: i64, py: i64) -> LookupResult<RingRelation> {
    let n = cur.take_u16()? as usize;
    if n == 0 {
        return Ok(RingRelation::Outside);
    }
    let first = take_point(cur)?;
    let mut prev = first;
    let mut inside = false;
    for i in 1..=n {
        // The closing edge runs from the last stored point back to the first.
        let curr = if i < n { take_point(cur)? } else { first };
        let (xp, yp) = prev;
        let (xc, yc) = curr;
        let dx = xc - xp;
        let dy = yc - yp;
        let cp = dx * (py - yp) - dy * (px - xp);
        if cp == 0
            && px >= xp.min(xc)
            && px <= xp.max(xc)
            && py >= yp.min(yc)
            && py <= yp.max(yc)
        {
            return Ok(RingRelation::OnEdge);
        }
        if (yc > py) != (yp > py) && (yc > yp) == (cp > 0) {
            inside = !inside;
        }
        prev = curr;
    }
    Ok(if inside {
        RingRelation::Inside
    } else {
        RingRelation::Outside
    })
}

fn take_point(cur: &mut Cursor<'_>) -> LookupResult<(i64, i64)> {
    let x = cur.take_u16()? as i64;
    let y = cur.take_u16()? as i64;
    Ok((x, y))
}
