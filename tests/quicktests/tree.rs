use datastructures::tree::Tree;

use std::collections::{BTreeSet, HashSet};

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn duplicates_do_not_change_len(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let len = tree.len();
        for x in &xs {
            tree.insert(*x);
        }

        let distinct: HashSet<_> = xs.iter().collect();
        tree.len() == len && len == distinct.len()
    }

    fn traverse_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut visited = Vec::new();
        tree.traverse(|x| visited.push(*x));

        let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        visited.windows(2).all(|w| w[0] < w[1])
            && visited == expected
            && tree.iter().copied().eq(visited.into_iter())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.iter().zip(tree.iter().skip(1)).all(|(a, b)| a < b)
    }

    fn deleting_everything_empties(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for x in &xs {
            tree.delete(x);
        }

        tree.is_empty() && tree.len() == 0 && tree.height() == 0
    }

    fn height_bounds(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let len = tree.len();
        let height = tree.height();

        // A tree can't be taller than its node count, or shorter than a
        // full tree holding the same number of nodes.
        let shortest = (len + 1).next_power_of_two().trailing_zeros() as usize;
        shortest <= height && height <= len
    }
}
