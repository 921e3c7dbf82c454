use std::fmt::Write;

use crate::table::{KeyTable, Record};

/// Mean in tenths, rounded half-up (ties toward positive infinity), in
/// integer arithmetic: floor((sum/count + 1/2)) over tenths.
fn mean_tenths(sum: i64, count: u64) -> i64 {
    let count = count as i64;
    (2 * sum + count).div_euclid(2 * count)
}

fn write_tenths(out: &mut String, tenths: i64) {
    if tenths < 0 {
        out.push('-');
    }
    let t = tenths.abs();
    write!(out, "{}.{}", t / 10, t % 10).unwrap();
}

/// Render the merged table as `{k1=min/mean/max, k2=...}` with keys in
/// ascending byte-lexicographic order and one fractional digit per field.
pub fn render(table: &KeyTable) -> String {
    let mut records: Vec<&Record> = table.records().collect();
    records.sort_unstable_by(|a, b| a.key.cmp(&b.key));

    let mut out = String::with_capacity(records.len() * 35 + 2);
    out.push('{');
    for (i, r) in records.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&String::from_utf8_lossy(&r.key));
        out.push('=');
        write_tenths(&mut out, r.min as i64);
        out.push('/');
        write_tenths(&mut out, mean_tenths(r.sum, r.count));
        out.push('/');
        write_tenths(&mut out, r.max as i64);
    }
    out.push('}');
    out
}
