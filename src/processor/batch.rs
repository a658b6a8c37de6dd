//! Splits the ISO-639 records into part files of bounded size.

/// A contiguous run of formatted records destined for one part file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part<T> {
    /// 1-based, in source order.
    pub index: usize,
    pub records: Vec<T>,
}

/// Cut `records` into chunks of at most `size` (`size >= 1`).
/// Only the last chunk may be shorter; an empty input yields no parts.
pub fn chunk<T>(records: Vec<T>, size: usize) -> Vec<Part<T>> {
    assert!(size > 0, "chunk size must be positive");

    let mut parts = Vec::with_capacity(records.len().div_ceil(size));
    let mut iter = records.into_iter().peekable();
    while iter.peek().is_some() {
        parts.push(Part {
            index: parts.len() + 1,
            records: iter.by_ref().take(size).collect(),
        });
    }
    parts
}

/// Scala expression concatenating every part's `items` in index order.
pub fn aggregate<T>(parts: &[Part<T>]) -> String {
    if parts.is_empty() {
        return "Seq()".to_string();
    }
    parts
        .iter()
        .map(|p| format!("Iso639List_{}.items", p.index))
        .collect::<Vec<_>>()
        .join(" ++ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_chunk_at_boundary() {
        let parts = chunk((0..800).collect::<Vec<_>>(), 800);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].index, 1);
        assert_eq!(parts[0].records.len(), 800);
    }

    #[test]
    fn one_past_boundary_spills_into_second_chunk() {
        let parts = chunk((0..801).collect::<Vec<_>>(), 800);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].records.len(), 800);
        assert_eq!(parts[1].records, vec![800]);
        assert_eq!(parts[1].index, 2);
    }

    #[test]
    fn concatenating_chunks_restores_input() {
        let input: Vec<u32> = (0..2345).collect();
        let parts = chunk(input.clone(), 800);
        let rebuilt: Vec<u32> = parts.into_iter().flat_map(|p| p.records).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn empty_input_has_no_parts() {
        let parts = chunk(Vec::<u8>::new(), 800);
        assert!(parts.is_empty());
        assert_eq!(aggregate(&parts), "Seq()");
    }

    #[test]
    fn aggregate_references_parts_in_order() {
        let parts = chunk(vec!['a', 'b', 'c'], 1);
        assert_eq!(
            aggregate(&parts),
            "Iso639List_1.items ++ Iso639List_2.items ++ Iso639List_3.items"
        );
    }
}
