//! Batch lookups on the rayon pool.
//!
//! A finished tree is only ever read, so every worker borrows it directly.

use rayon::prelude::*;

use super::tree::{PrefixMatch, RadixTree};

impl RadixTree {
    /// Runs [`RadixTree::lookup_exact`] over `queries` in parallel.
    /// Results are in input order.
    pub fn par_lookup_exact<'q, Q>(&self, queries: &'q [Q]) -> Vec<Option<&'q [u8]>>
    where
        Q: AsRef<[u8]> + Sync,
    {
        queries.par_iter().map(|query| self.lookup_exact(query)).collect()
    }

    /// Runs [`RadixTree::lookup_prefix`] over `queries` in parallel.
    /// Results are in input order.
    pub fn par_lookup_prefix<'q, Q>(&self, queries: &'q [Q]) -> Vec<Option<PrefixMatch<'q>>>
    where
        Q: AsRef<[u8]> + Sync,
    {
        queries.par_iter().map(|query| self.lookup_prefix(query)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_par_lookups_match_sequential() {
        let tree = RadixTree::build(["help", "helo", "in", "input", "out", "output"]);
        let queries: Vec<String> = (0..500)
            .map(|i| match i % 5 {
                0 => format!("input-{i}"),
                1 => String::from("help"),
                2 => format!("out{i}"),
                3 => String::from("hel"),
                _ => format!("x{i}"),
            })
            .collect();

        let exact = tree.par_lookup_exact(&queries);
        let prefix = tree.par_lookup_prefix(&queries);
        for (i, query) in queries.iter().enumerate() {
            assert_eq!(exact[i], tree.lookup_exact(query));
            assert_eq!(prefix[i], tree.lookup_prefix(query));
        }
    }
}
