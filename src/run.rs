use crate::partition;
use crate::scan::LineScanner;
use crate::table::{self, KeyTable};

/// Scan one worker's byte range into a private table.
fn scan_range(buf: &[u8], range: std::ops::Range<usize>) -> KeyTable {
    let mut table = KeyTable::default();
    for (key, value) in LineScanner::new(buf, range) {
        table.insert(key, value);
    }
    table
}

/// Aggregate the whole buffer across `workers` threads.
///
/// The buffer is shared read-only; each worker scans its own range into its
/// own table, so the parallel phase takes no locks. All workers are joined
/// before the merge starts.
pub fn aggregate(buf: &[u8], workers: usize) -> KeyTable {
    let ranges = partition::ranges(buf.len(), workers);
    let tables = std::thread::scope(|scope| {
        ranges
            .into_iter()
            .map(|range| scope.spawn(move || scan_range(buf, range)))
            .collect::<Vec<_>>() // collect to eagerly spin up the threads
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });
    table::merge(tables)
}
