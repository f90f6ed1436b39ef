use threaded_bst::{EmptyTreeError, Node, Tag, Tree};

use crate::Op;

/// Walks the whole tree through `next` threads only.
fn walk_forward<T: Copy>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut node = tree.first();
    while let Some(n) = node {
        values.push(*n.value());
        node = n.next();
    }
    values
}

/// Walks the whole tree through `previous` threads only.
fn walk_backward<T: Copy>(tree: &Tree<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut node = tree.last();
    while let Some(n) = node {
        values.push(*n.value());
        node = n.previous();
    }
    values.reverse();
    values
}

fn sorted<T: Ord + Clone>(xs: &[T]) -> Vec<T> {
    let mut xs = xs.to_vec();
    xs.sort();
    xs
}

#[quickcheck]
fn fuzz_against_sorted_vec(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();
    let mut last_depth = 0;

    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x);
                let pos = model.partition_point(|&y| y <= x);
                model.insert(pos, x);

                if tree.depth() < last_depth || tree.depth() > tree.len() {
                    return false;
                }
                last_depth = tree.depth();
            }
            Op::Search(x) => {
                let expected = model.binary_search(&x).ok().map(|_| &x);
                if tree.search(&x) != expected || tree.search_recursive(&x) != expected {
                    return false;
                }
            }
        }
    }

    tree.len() == model.len() && walk_forward(&tree) == model
}

#[quickcheck]
fn threads_walk_in_order(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected = sorted(&xs);

    walk_forward(&tree) == expected
        && walk_backward(&tree) == expected
        && tree.iter().copied().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn traversal_agrees_with_threads(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut first = Vec::new();
    tree.traverse_in_order(|&x| first.push(x));
    let mut second = Vec::new();
    tree.traverse_in_order(|&x| second.push(x));

    first == second && first == walk_forward(&tree)
}

#[quickcheck]
fn orders_visit_everything(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let mut pre = Vec::new();
    tree.traverse_pre_order(|&x| pre.push(x));
    let mut post = Vec::new();
    tree.traverse_post_order(|&x| post.push(x));

    let expected = sorted(&xs);
    pre.first() == tree.root().map(Node::value)
        && post.last() == tree.root().map(Node::value)
        && sorted(&pre) == expected
        && sorted(&post) == expected
}

#[quickcheck]
fn min_max(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.minimum() == Ok(min) && tree.maximum() == Ok(max),
        _ => tree.minimum() == Err(EmptyTreeError) && tree.maximum() == Err(EmptyTreeError),
    }
}

#[quickcheck]
fn ends_thread_to_nothing(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    match (tree.first(), tree.last()) {
        (Some(first), Some(last)) => {
            first.left_tag() == Tag::Thread
                && first.previous().is_none()
                && last.right_tag() == Tag::Thread
                && last.next().is_none()
        }
        (None, None) => tree.is_empty(),
        _ => false,
    }
}

#[quickcheck]
fn thread_tags_match_children(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let mut nodes = tree.first();

    while let Some(node) = nodes {
        let left_ok = (node.left_tag() == Tag::Child) == node.left_child().is_some();
        let right_ok = (node.right_tag() == Tag::Child) == node.right_child().is_some();
        if !left_ok || !right_ok {
            return false;
        }
        nodes = node.next();
    }
    true
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i16>, more: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut clone = tree.clone();
    clone.extend(more.iter().copied());

    let mut all = xs.clone();
    all.extend(more);

    walk_forward(&tree) == sorted(&xs) && walk_forward(&clone) == sorted(&all)
}

#[test]
fn concrete_scenario() {
    let mut tree = Tree::new();
    for x in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(x);
    }

    assert_eq!(walk_forward(&tree), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.minimum(), Ok(&1));
    assert_eq!(tree.maximum(), Ok(&9));

    let four = tree.search_node(&4).expect("4 was inserted");
    assert_eq!(four.previous().map(Node::value), Some(&3));
    assert_eq!(four.next().map(Node::value), Some(&5));
}

#[test]
fn empty_tree() {
    let tree: Tree<String> = Tree::default();

    assert_eq!(tree.len(), 0);
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.search(&"anything".to_string()), None);
    assert_eq!(tree.minimum(), Err(EmptyTreeError));
    assert_eq!(tree.maximum(), Err(EmptyTreeError));
    assert!(tree.first().is_none());
}

#[test]
fn tree_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tree<String>>();

    let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    let handle = std::thread::spawn(move || tree.iter().copied().collect::<Vec<_>>());
    assert_eq!(handle.join().unwrap(), [1, 2, 3]);
}
