/// A memoized transformation of a single input string.
///
/// For a fixed `input` there is exactly one stored `output`; rows are created
/// on first miss and never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformRecord {
    pub input: String,
    pub output: String,
}

/// A cached interleaved result, addressed by the content digest of the
/// request that produced it.
///
/// `id` is a pure function of the ordered input lists, so identical requests
/// always resolve to the same record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadRecord {
    pub id: String,
    pub output: String,
}
