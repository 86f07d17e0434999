//! Benchmark inputs for the lattice workspace.
//!
//! Deterministic text builders shared by the criterion benches: grid text
//! of a given shape, number lists, and keyword streams.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Render a `width` x `height` ASCII grid with a `#` marker every
/// `stride` cells and `.` elsewhere, one text line per row.
pub fn grid_text(width: usize, height: usize, stride: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity((width + 1) * height);
    for y in 0..height {
        for x in 0..width {
            let cell = if (y * width + x) % stride == 0 { b'#' } else { b'.' };
            out.push(cell);
        }
        out.push(b'\n');
    }
    out
}

/// Render `count` space-separated decimal numbers: `0 step 2*step ...`.
pub fn number_list(count: usize, step: u64) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..count as u64 {
        if i > 0 {
            out.push(b' ');
        }
        out.extend_from_slice((i * step).to_string().as_bytes());
    }
    out
}

/// Render `count` direction words, one per line, cycling through the four
/// cardinal names.
pub fn direction_list(count: usize) -> Vec<u8> {
    const NAMES: [&str; 4] = ["up", "down", "left", "right"];
    let mut out = Vec::new();
    for i in 0..count {
        out.extend_from_slice(NAMES[i % 4].as_bytes());
        out.push(b'\n');
    }
    out
}
