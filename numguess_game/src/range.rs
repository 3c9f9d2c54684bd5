pub const MIN_ANSWER: i64 = 1;
pub const MAX_ANSWER: i64 = 10;

/// Whether `value` is an acceptable guess (and a possible answer).
pub fn in_range(value: i64) -> bool {
    value >= MIN_ANSWER && value <= MAX_ANSWER
}
