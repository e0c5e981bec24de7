//! Lazy enumeration of k-element index combinations.

/// Iterator over all size-k subsets of `0..n`, yielded as strictly
/// increasing index vectors in lexicographic order.
///
/// Every yielded vector is owned: the iterator never hands out views into a
/// shared buffer. Enumeration restarts from scratch with every fresh call to
/// [`combinations`]; there is no cursor state shared between instances.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    done: bool,
}

/// Enumerates the C(n, k) size-k subsets of `0..n`.
///
/// `k == 0` yields exactly one empty subset; `k > n` yields nothing.
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        k,
        indices: (0..k).collect(),
        done: k > n,
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance to the lexicographic successor: bump the rightmost index
        // with room to grow, then repack everything to its right.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - self.k + i {
                self.indices[i] += 1;
                for j in i + 1..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}
