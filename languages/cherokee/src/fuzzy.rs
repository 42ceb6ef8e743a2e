use strsim::levenshtein;

/// Levenshtein distance over characters, unit cost per edit.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Pair each candidate with its distance to `target`, keeping input order.
pub fn rank_by_distance<'a, T, F>(target: &str, candidates: &[&'a T], key: F) -> Vec<(usize, &'a T)>
where
    F: Fn(&T) -> &str,
{
    candidates
        .iter()
        .map(|candidate| (edit_distance(target, key(candidate)), *candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("dadeega", "dadeega"), 0);
        assert_eq!(edit_distance("", "gaga"), 4);
        assert_eq!(edit_distance("gaga", ""), 4);
    }

    #[test]
    fn test_edit_distance_counts_combining_marks() {
        assert_eq!(edit_distance("dadeega", "dade\u{301}ega"), 1);
    }

    #[test]
    fn test_rank_keeps_input_order() {
        let stems = ["gaga", "dadeega", "dade"];
        let refs: Vec<&&str> = stems.iter().collect();
        let ranked = rank_by_distance("dadeega", &refs, |s| *s);
        let order: Vec<&str> = ranked.iter().map(|(_, s)| **s).collect();
        assert_eq!(order, vec!["gaga", "dadeega", "dade"]);
        assert_eq!(ranked[1].0, 0);
    }
}
