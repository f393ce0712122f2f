use minitree::prelude::*;
use minitree::decision_tree::{
    build_tree,
    find_best_split,
    gini,
    info_gain,
    par_find_best_split,
    partition,
};
use proptest::prelude::*;


/// Rows with `n_feature` integer features in `1..=5`
/// and one of three labels.
fn rows_strategy(n_feature: usize) -> impl Strategy<Value = Vec<Row>> {
    let row = (
        prop::collection::vec(1_i64..=5, n_feature),
        prop::sample::select(vec!["A", "B", "C"]),
    ).prop_map(|(features, label)| {
        let features = features.into_iter()
            .map(FeatureValue::from)
            .collect();
        Row::new(features, label)
    });
    prop::collection::vec(row, 1..40)
}


proptest! {
    /// Every row lands on exactly one side, in its original order.
    #[test]
    fn partition_keeps_every_row(
        rows in rows_strategy(3),
        column in 0_usize..3,
        threshold in 1_i64..=5,
    ) {
        let refs = rows.iter().collect::<Vec<_>>();
        let question = Question::new(column, threshold.into());
        prop_assert_eq!(question.column(), column);
        prop_assert_eq!(question.value().as_f64(), Some(threshold as f64));

        let (t, f) = partition(&refs, &question).unwrap();

        prop_assert_eq!(t.len() + f.len(), rows.len());
        for row in t.iter() {
            prop_assert!(question.matches(row.features()).unwrap());
        }
        for row in f.iter() {
            prop_assert!(!question.matches(row.features()).unwrap());
        }

        let order = |part: &[&Row]| -> Vec<usize> {
            part.iter()
                .map(|r| refs.iter().position(|s| std::ptr::eq(*s, *r)).unwrap())
                .collect()
        };
        let t_order = order(&t[..]);
        let f_order = order(&f[..]);
        prop_assert!(t_order.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(f_order.windows(2).all(|w| w[0] < w[1]));
    }


    /// The Gini impurity lies in `[0, 1)` and splitting never increases it.
    #[test]
    fn impurity_bounds(
        rows in rows_strategy(2),
        threshold in 1_i64..=5,
    ) {
        let refs = rows.iter().collect::<Vec<_>>();
        let current = gini(&refs).unwrap();
        prop_assert!((0.0..1.0).contains(&current));

        let question = Question::new(0, threshold.into());
        let (t, f) = partition(&refs, &question).unwrap();
        if !t.is_empty() && !f.is_empty() {
            let gain = info_gain(&t, &f, current).unwrap();
            prop_assert!(gain >= -1e-12);
        }
    }


    /// Any two-way split of a row set has a non-negative gain,
    /// not only the splits a question can make.
    #[test]
    fn info_gain_is_non_negative_for_any_split(
        rows in rows_strategy(1),
        mask in prop::collection::vec(any::<bool>(), 40),
    ) {
        let refs = rows.iter().collect::<Vec<_>>();
        let (left, right): (Vec<_>, Vec<_>) = refs.iter()
            .zip(mask.iter())
            .partition(|(_, &side)| side);
        let left = left.into_iter().map(|(&r, _)| r).collect::<Vec<_>>();
        let right = right.into_iter().map(|(&r, _)| r).collect::<Vec<_>>();
        prop_assume!(!left.is_empty() && !right.is_empty());

        let current = gini(&refs).unwrap();
        let gain = info_gain(&left, &right, current).unwrap();
        prop_assert!(gain >= -1e-12);
    }


    /// The parallel search finds the same question as the sequential one.
    #[test]
    fn parallel_search_agrees(rows in rows_strategy(4)) {
        let refs = rows.iter().collect::<Vec<_>>();
        let seq = find_best_split(&refs).unwrap();
        let par = par_find_best_split(&refs).unwrap();
        prop_assert_eq!(seq, par);
    }


    /// A tree classifies every training row into a leaf
    /// that counts the row's label.
    #[test]
    fn training_rows_reach_leaves_with_their_label(rows in rows_strategy(3)) {
        let refs = rows.iter().collect::<Vec<_>>();
        let root = build_tree(&refs).unwrap();
        for row in rows.iter() {
            let counts = root.classify(row.features()).unwrap();
            prop_assert!(counts.get(row.label()).copied().unwrap_or(0) > 0);
        }
    }
}


#[test]
fn pure_rows_have_no_impurity() {
    let rows = (0..5)
        .map(|i| Row::new(vec![FeatureValue::from(i)], "A"))
        .collect::<Vec<_>>();
    let refs = rows.iter().collect::<Vec<_>>();
    approx::assert_abs_diff_eq!(gini(&refs).unwrap(), 0.0);

    match build_tree(&refs).unwrap() {
        Node::Leaf(leaf) => assert_eq!(leaf.predictions()["A"], 5),
        Node::Branch(_) => panic!("pure rows must not be split"),
    }
}
