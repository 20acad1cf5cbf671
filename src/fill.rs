use crate::buffer::PixelBuffer;
use crate::color::Color;
use thiserror::Error;

/// Errors that can occur when starting a flood fill
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// The seed coordinate lies outside the buffer
    #[error("Seed ({x}, {y}) is outside the {width}x{height} buffer")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Outcome of a completed flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillResult {
    /// Number of pixels recolored. Zero when the seed already had the
    /// fill color and the buffer was left untouched.
    pub pixels_changed: usize,
}

/// Replace the 4-connected region of pixels matching the seed's color with
/// `fill_color`, starting from `(seed_x, seed_y)`.
///
/// Color matching is exact per-channel, alpha included. The traversal is
/// iterative (explicit work stack) so stack depth stays bounded on large
/// canvases, and a visited grid guarantees each pixel is processed at most
/// once. Fails before touching the buffer if the seed is out of bounds;
/// once traversal starts it cannot fail, only terminate.
pub fn flood_fill(
    buffer: &mut PixelBuffer,
    seed_x: u32,
    seed_y: u32,
    fill_color: Color,
) -> Result<FillResult, FillError> {
    let (width, height) = (buffer.width(), buffer.height());
    let target_color = buffer.get(seed_x, seed_y).ok_or(FillError::OutOfBounds {
        x: seed_x,
        y: seed_y,
        width,
        height,
    })?;

    // Filling a region with its own color would match every pixel it just
    // painted; bail out before doing any work.
    if target_color == fill_color {
        return Ok(FillResult { pixels_changed: 0 });
    }

    let mut visited = vec![false; (width as usize) * (height as usize)];
    let mut stack: Vec<(u32, u32)> = vec![(seed_x, seed_y)];
    let mut pixels_changed = 0usize;

    // Every valid coordinate is written at most once, so the pixel count is
    // a hard ceiling on the number of writes. Enforcing it keeps the loop
    // finite even if the visited bookkeeping were corrupted.
    let max_writes = (width as usize) * (height as usize);

    while let Some((x, y)) = stack.pop() {
        // Neighbors are pushed unvalidated; all checks happen here, on pop.
        if !buffer.in_bounds(x, y) {
            continue;
        }
        let index = (y as usize) * (width as usize) + (x as usize);
        if visited[index] {
            continue;
        }
        match buffer.get(x, y) {
            Some(color) if color == target_color => {}
            _ => continue, // region boundary
        }

        // A valid pop past this point means a write. More writes than
        // pixels is impossible in correct operation, so treat hitting the
        // ceiling as corruption and halt instead of looping unboundedly.
        if pixels_changed >= max_writes {
            log::error!("Flood fill exceeded {max_writes} writes, aborting traversal");
            break;
        }

        buffer.set(x, y, fill_color);
        visited[index] = true;
        pixels_changed += 1;

        if x > 0 {
            stack.push((x - 1, y));
        }
        if y > 0 {
            stack.push((x, y - 1));
        }
        stack.push((x + 1, y));
        stack.push((x, y + 1));
    }

    log::debug!(
        "Flood fill from ({seed_x}, {seed_y}) recolored {pixels_changed} pixels"
    );
    Ok(FillResult { pixels_changed })
}
