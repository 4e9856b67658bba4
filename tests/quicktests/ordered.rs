use datetree::ordered::{Order, OrderedTree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

const ORDERS: [Order; 3] = [Order::InOrder, Order::PreOrder, Order::PostOrder];

fn build<T: Ord + Clone>(xs: &[T]) -> OrderedTree<T> {
    let mut tree = OrderedTree::new();
    for x in xs {
        tree.insert(x.clone());
    }
    tree
}

fn collect<T: Clone>(tree: &OrderedTree<T>, order: Order) -> Vec<T> {
    let mut out = Vec::new();
    tree.traverse(order, |x| out.push(x.clone()));
    out
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking after
/// every step that the tree agrees with the set.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => tree.insert(x.clone()) == set.insert(x.clone()),
            Op::Search(x) => tree.search(x) == set.contains(x),
            Op::Clear => {
                tree.clear();
                set.clear();
                tree.is_empty()
            }
            Op::Iter => collect(tree, Order::InOrder) == set.iter().cloned().collect::<Vec<_>>(),
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && set.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn in_order_is_sorted_and_unique(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let in_order = collect(&tree, Order::InOrder);

    in_order.windows(2).all(|w| w[0] < w[1]) && in_order.len() == tree.len()
}

#[quickcheck]
fn every_order_visits_every_value_once(xs: Vec<i16>) -> bool {
    let tree = build(&xs);
    let expected: Vec<_> = xs.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();

    ORDERS.iter().all(|order| {
        let mut visited = collect(&tree, *order);
        visited.sort();
        visited == expected
    })
}

#[quickcheck]
fn insert_twice_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = build(&xs);
    tree.insert(x);
    let before: Vec<_> = ORDERS.iter().map(|o| collect(&tree, *o)).collect();
    let len = tree.len();

    let inserted_again = tree.insert(x);
    let after: Vec<_> = ORDERS.iter().map(|o| collect(&tree, *o)).collect();

    !inserted_again && before == after && tree.len() == len && tree.search(&x)
}

#[quickcheck]
fn root_is_first_in_pre_order_and_last_in_post_order(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    // Nothing ever rotates, so the first value inserted stays at the root.
    let root = xs.first();

    collect(&tree, Order::PreOrder).first() == root
        && collect(&tree, Order::PostOrder).last() == root
}

#[quickcheck]
fn pre_order_rebuilds_the_same_shape(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let pre_order = collect(&tree, Order::PreOrder);
    let rebuilt = build(&pre_order);

    ORDERS
        .iter()
        .all(|o| collect(&tree, *o) == collect(&rebuilt, *o))
        && tree.height() == rebuilt.height()
}

#[quickcheck]
fn clear_forgets_everything(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    tree.clear();

    tree.is_empty()
        && tree.len() == 0
        && tree.height() == 0
        && xs.iter().all(|x| !tree.search(x))
        && ORDERS.iter().all(|o| collect(&tree, *o).is_empty())
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let len = tree.len();

    // A tree of `len` nodes is at least as tall as a perfectly balanced one and at most a path.
    let min_height = (usize::BITS - len.leading_zeros()) as usize;
    tree.height() <= len && tree.height() >= min_height
}
