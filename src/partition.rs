use std::ops::Range;

/// Evenly spaced byte ranges over a buffer of `len` bytes, one per worker.
///
/// Cut points are `len / workers * i`, so integer-division remainder bytes
/// all land in the final range, which ends at `len`. Ranges are not aligned
/// to line boundaries here; the scanner realigns each worker's start and
/// lets a line begun before the end boundary run to completion.
pub fn ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    assert!(workers > 0);
    let chunk = len / workers;
    (0..workers)
        .map(|i| {
            let start = chunk * i;
            let end = if i + 1 == workers { len } else { chunk * (i + 1) };
            start..end
        })
        .collect()
}
