use std::ops::Range;

/// A contiguous, non-overlapping slice of the input assigned to one
/// worker, tagged with its position in the original byte order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub index: usize,
    pub range: Range<usize>,
}

/// Split `len` bytes into at most `count` contiguous, order-preserving
/// partitions of equal size; the last partition absorbs the remainder.
/// When `len < count` the partition count shrinks to `len` so no
/// partition is empty. Zero length yields no partitions.
pub fn split(len: usize, count: usize) -> Vec<Partition> {
    if len == 0 {
        return Vec::new();
    }

    let count = count.clamp(1, len);
    let chunk = len / count;

    let mut partitions = Vec::with_capacity(count);
    for index in 0..count {
        let start = index * chunk;
        let end = if index == count - 1 { len } else { start + chunk };
        partitions.push(Partition {
            index,
            range: start..end,
        });
    }
    partitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(partitions: &[Partition], len: usize) {
        let mut expected_start = 0;
        for (i, part) in partitions.iter().enumerate() {
            assert_eq!(part.index, i);
            assert_eq!(part.range.start, expected_start);
            assert!(part.range.end > part.range.start, "empty partition {i}");
            expected_start = part.range.end;
        }
        assert_eq!(expected_start, len);
    }

    #[test]
    fn test_split_exact_fit() {
        let parts = split(100, 4);
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| p.range.len() == 25));
        assert_covers(&parts, 100);
    }

    #[test]
    fn test_split_last_absorbs_remainder() {
        let parts = split(10, 4);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].range.len(), 2);
        assert_eq!(parts[1].range.len(), 2);
        assert_eq!(parts[2].range.len(), 2);
        assert_eq!(parts[3].range.len(), 4);
        assert_covers(&parts, 10);
    }

    #[test]
    fn test_split_fewer_bytes_than_workers() {
        let parts = split(3, 8);
        assert_eq!(parts.len(), 3);
        assert_covers(&parts, 3);
    }

    #[test]
    fn test_split_single_partition() {
        let parts = split(1000, 1);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].range, 0..1000);
    }

    #[test]
    fn test_split_zero_length() {
        assert!(split(0, 4).is_empty());
    }

    #[test]
    fn test_split_zero_count_clamps_to_one() {
        let parts = split(10, 0);
        assert_eq!(parts.len(), 1);
        assert_covers(&parts, 10);
    }
}
