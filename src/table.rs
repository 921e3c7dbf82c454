/// Bucket count; power of two so the hash reduces with a mask.
pub const TABLE_SIZE: usize = 16384;

const HASH_SEED: u64 = 5381;

/// Aggregate for one distinct key. The table owns the key bytes; input
/// buffer slices are never retained.
#[derive(Debug, PartialEq)]
pub struct Record {
    pub key: Box<[u8]>,
    pub min: i32,
    pub max: i32,
    pub sum: i64,
    pub count: u64,
}

impl Record {
    fn new(key: Box<[u8]>, value: i32) -> Self {
        Self {
            key,
            min: value,
            max: value,
            sum: value as i64,
            count: 1,
        }
    }

    fn observe(&mut self, value: i32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value as i64;
        self.count += 1;
    }

    fn combine(&mut self, other: &Record) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }
}

/// hash = hash * 33 + byte, seeded with a fixed non-zero constant. Fast and
/// low-collision for short ASCII keys; the constants only affect bucket
/// distribution, never correctness.
fn bucket_index(key: &[u8]) -> usize {
    let mut hash = HASH_SEED;
    for &b in key {
        hash = hash.wrapping_mul(33).wrapping_add(b as u64);
    }
    hash as usize & (TABLE_SIZE - 1)
}

/// Fixed-bucket hash table with insertion-ordered collision chains.
///
/// One table per worker during the scan phase, so all mutation is
/// single-threaded. Within a table no two records share a key: `insert`
/// updates in place on a byte-exact match and only allocates for a key it
/// has not seen.
pub struct KeyTable {
    buckets: Vec<Vec<Record>>,
    len: usize,
}

impl Default for KeyTable {
    fn default() -> Self {
        let mut buckets = Vec::with_capacity(TABLE_SIZE);
        buckets.resize_with(TABLE_SIZE, Vec::new);
        Self { buckets, len: 0 }
    }
}

impl KeyTable {
    /// Number of distinct keys in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn insert(&mut self, key: &[u8], value: i32) {
        let chain = &mut self.buckets[bucket_index(key)];
        if let Some(record) = chain.iter_mut().find(|r| &*r.key == key) {
            record.observe(value);
            return;
        }
        chain.push(Record::new(key.into(), value));
        self.len += 1;
    }

    /// Fold another table's record into this one. Takes the record by value:
    /// a new key moves its owned bytes into this table, a known key drops
    /// them with the record.
    pub fn merge_in(&mut self, record: Record) {
        let chain = &mut self.buckets[bucket_index(&record.key)];
        if let Some(existing) = chain.iter_mut().find(|r| r.key == record.key) {
            existing.combine(&record);
            return;
        }
        chain.push(record);
        self.len += 1;
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.buckets.iter().flatten()
    }

    fn into_records(self) -> impl Iterator<Item = Record> {
        self.buckets.into_iter().flatten()
    }
}

/// Combine the workers' private tables into one. Record combination is
/// commutative and associative, so worker order does not matter; output
/// order comes from the later sort, not from merge order. Source tables are
/// consumed, which frees their chains as their records move out.
pub fn merge(tables: Vec<KeyTable>) -> KeyTable {
    let mut merged = KeyTable::default();
    for table in tables {
        for record in table.into_records() {
            merged.merge_in(record);
        }
    }
    merged
}
