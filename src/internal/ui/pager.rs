/// Stories shown per list page, matching the upstream site.
pub const PAGE_SIZE: usize = 30;

/// Window of the ranked id list for a 1-based page number: pages map to
/// `[(p-1)*30, (p-1)*30+30)`. A page past the end of the list yields an
/// empty slice, never an error; forward pagination is unbounded.
pub fn page_slice(ids: &[u32], page: u32) -> &[u32] {
    let start = (page.max(1) as usize - 1).saturating_mul(PAGE_SIZE);
    if start >= ids.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(ids.len());
    &ids[start..end]
}

/// Parse a user-supplied page number, falling back to page 1 for anything
/// non-numeric, zero, or absent.
pub fn parse_page(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_first_thirty() {
        let ids: Vec<u32> = (0..100).collect();
        assert_eq!(page_slice(&ids, 1), &ids[0..30]);
    }

    #[test]
    fn third_page_starts_at_sixty() {
        let ids: Vec<u32> = (0..100).collect();
        assert_eq!(page_slice(&ids, 3), &ids[60..90]);
    }

    #[test]
    fn short_tail_page_is_partial() {
        let ids: Vec<u32> = (0..35).collect();
        assert_eq!(page_slice(&ids, 2), &ids[30..35]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let ids: Vec<u32> = (0..30).collect();
        assert!(page_slice(&ids, 2).is_empty());
        assert!(page_slice(&ids, 4000).is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let ids: Vec<u32> = (0..40).collect();
        assert_eq!(page_slice(&ids, 0), &ids[0..30]);
    }

    #[test]
    fn parse_page_falls_back_to_one() {
        assert_eq!(parse_page("3"), 3);
        assert_eq!(parse_page(" 12 "), 12);
        assert_eq!(parse_page("abc"), 1);
        assert_eq!(parse_page(""), 1);
        assert_eq!(parse_page("0"), 1);
        assert_eq!(parse_page("-2"), 1);
    }
}
