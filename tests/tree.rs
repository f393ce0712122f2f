use minitree::prelude::*;
use minitree::decision_tree::build_tree;

// Toy example (A/B are the labels)
//
//  5|  B           B
//   |
//   |
//  1|  A           A
//   |________________
//      1           5
//
// Only the second column separates the labels.
fn toy_rows() -> Vec<Row> {
    vec![
        Row::new(vec![1.into(), 1.into()], "A"),
        Row::new(vec![1.into(), 5.into()], "B"),
        Row::new(vec![5.into(), 5.into()], "B"),
        Row::new(vec![5.into(), 1.into()], "A"),
    ]
}


fn data_path() -> std::path::PathBuf {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/Data.csv");
    path
}


#[test]
fn toy_tree_splits_on_the_separating_column() {
    let rows = toy_rows();
    let refs = rows.iter().collect::<Vec<_>>();
    let root = build_tree(&refs).unwrap();

    let branch = match &root {
        Node::Branch(b) => b,
        Node::Leaf(_) => panic!("the toy rows must be split"),
    };
    assert_eq!(branch.question(), &Question::new(1, 5.into()));

    let counts = root.classify(&[5.into(), 1.into()]).unwrap();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts["A"], 2);

    let counts = root.classify(&[1.into(), 5.into()]).unwrap();
    assert_eq!(counts["B"], 2);
}


#[test]
fn toy_tree_text_form() {
    let sample = Sample::from_rows(toy_rows()).unwrap();
    let f = DecisionTreeBuilder::new()
        .build()
        .fit(&sample)
        .unwrap();

    let text = f.display(sample.header()).to_string();
    assert_eq!(
        text,
        "Is Feat. [2] >= 5?\n\
         --> True:\n  Predict {B: 2}\n\
         --> False:\n  Predict {A: 2}\n"
    );
}


#[test]
fn single_row_is_a_leaf() {
    let row = Row::new(vec![3.into(), 4.into()], "X");
    let root = build_tree(&[&row]).unwrap();
    match root {
        Node::Leaf(leaf) => assert_eq!(leaf.predictions()["X"], 1),
        Node::Branch(_) => panic!("a single row must become a leaf"),
    }
}


#[test]
fn rows_without_features_are_a_leaf() {
    let rows = vec![
        Row::new(Vec::new(), "A"),
        Row::new(Vec::new(), "B"),
        Row::new(Vec::new(), "A"),
    ];
    let refs = rows.iter().collect::<Vec<_>>();
    let root = build_tree(&refs).unwrap();

    let counts = root.classify(&[]).unwrap();
    assert_eq!(counts["A"], 2);
    assert_eq!(counts["B"], 1);
}


#[test]
fn equal_gains_keep_the_last_question() {
    // Both `Feat. [1] >= 2` and `Feat. [2] >= 2` separate the rows.
    let rows = vec![
        Row::new(vec![1.into(), 1.into()], "A"),
        Row::new(vec![2.into(), 2.into()], "B"),
    ];
    let refs = rows.iter().collect::<Vec<_>>();
    match build_tree(&refs).unwrap() {
        Node::Branch(b) => {
            assert_eq!(b.question(), &Question::new(1, 2.into()));
        },
        Node::Leaf(_) => panic!("the rows must be split"),
    }
}


#[test]
fn empty_rows_are_rejected() {
    assert!(build_tree(&[]).is_err());

    let sample = Sample::from_rows(Vec::new()).unwrap();
    let err = DecisionTreeBuilder::new().build().fit(&sample).unwrap_err();
    assert!(matches!(err, TreeError::EmptySample));
}


#[test]
fn categorical_columns_use_equality() {
    let rows = vec![
        Row::new(vec!["red".into(), 1.into()], "apple"),
        Row::new(vec!["yellow".into(), 1.into()], "banana"),
        Row::new(vec!["red".into(), 1.into()], "apple"),
    ];
    let sample = Sample::from_rows(rows).unwrap();
    let f = DecisionTreeBuilder::new().build().fit(&sample).unwrap();

    assert_eq!(f.predict(&["yellow".into(), 1.into()]).unwrap(), "banana");
    assert_eq!(f.predict(&["red".into(), 9.into()]).unwrap(), "apple");

    // A numeric value where the tree expects a categorical one.
    let err = f.predict(&[1.into(), 1.into()]).unwrap_err();
    assert!(matches!(err, TreeError::Schema(_)));
}


#[test]
fn short_feature_rows_are_rejected() {
    let sample = Sample::from_rows(toy_rows()).unwrap();
    let f = DecisionTreeBuilder::new().build().fit(&sample).unwrap();
    let err = f.classify(&[1.into()]).unwrap_err();
    assert!(matches!(err, TreeError::Schema(_)));
}


#[test]
fn rows_of_another_width_are_rejected_on_untested_columns() {
    // A pure sample grows a single leaf that tests no column.
    let rows = vec![
        Row::new(vec![1.into(), 2.into()], "A"),
        Row::new(vec![3.into(), 4.into()], "A"),
    ];
    let sample = Sample::from_rows(rows).unwrap();
    let f = DecisionTreeBuilder::new().build().fit(&sample).unwrap();
    assert_eq!(f.n_features(), 2);
    assert_eq!(f.n_leaves(), 1);

    let err = f.predict(&[]).unwrap_err();
    assert!(matches!(err, TreeError::Schema(_)));
    let err = f.predict(&[1.into(), 2.into(), 3.into()]).unwrap_err();
    assert!(matches!(err, TreeError::Schema(_)));
    assert_eq!(f.predict(&[9.into(), 9.into()]).unwrap(), "A");

    // Only the second column is tested by the toy tree.
    let sample = Sample::from_rows(toy_rows()).unwrap();
    let f = DecisionTreeBuilder::new().build().fit(&sample).unwrap();
    let err = f.classify(&[1.into(), 5.into(), 0.into()]).unwrap_err();
    assert!(matches!(err, TreeError::Schema(_)));
}


#[test]
fn growth_strategies_agree() {
    let sample = SampleReader::new()
        .file(data_path())
        .read()
        .unwrap();

    let recursive = DecisionTreeBuilder::new()
        .build()
        .fit(&sample)
        .unwrap();
    let stack = DecisionTreeBuilder::new()
        .growth(Growth::WorkStack)
        .build()
        .fit(&sample)
        .unwrap();
    let parallel = DecisionTreeBuilder::new()
        .parallel(true)
        .build()
        .fit(&sample)
        .unwrap();
    let both = DecisionTreeBuilder::new()
        .parallel(true)
        .growth(Growth::WorkStack)
        .build()
        .fit(&sample)
        .unwrap();

    assert_eq!(recursive, stack);
    assert_eq!(recursive, parallel);
    assert_eq!(recursive, both);
}


#[test]
fn growing_twice_gives_the_same_tree() {
    let sample = SampleReader::new()
        .file(data_path())
        .read()
        .unwrap();
    let tree = DecisionTreeBuilder::new().build();
    assert_eq!(tree.fit(&sample).unwrap(), tree.fit(&sample).unwrap());
}


#[test]
fn leaves_hold_every_training_row() {
    let sample = SampleReader::new()
        .file(data_path())
        .read()
        .unwrap();
    let f = DecisionTreeBuilder::new().build().fit(&sample).unwrap();

    fn total(node: &Node) -> usize {
        match node {
            Node::Leaf(leaf) => leaf.predictions().values().sum(),
            Node::Branch(b) => total(b.true_branch()) + total(b.false_branch()),
        }
    }
    assert_eq!(total(f.root()), sample.len());
    assert!(f.n_leaves() >= 2);

    let labels = sample.target();
    for p in f.predict_all(&sample).unwrap() {
        assert!(labels.contains(&p.as_str()));
    }
}


#[test]
fn dot_file_lists_every_node() {
    let sample = Sample::from_rows(toy_rows()).unwrap();
    let f = DecisionTreeBuilder::new().build().fit(&sample).unwrap();

    let mut path = std::env::temp_dir();
    path.push(format!("minitree-toy-{}.dot", std::process::id()));
    f.to_dot_file(&path, sample.header()).unwrap();

    let dot = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(dot.starts_with("graph DecisionTree {\n"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("node_0 [ label = \"Is Feat. [2] >= 5?\" ]"));
    assert!(dot.contains("node_0 -- node_1 [ label = \"Yes\" ]"));
    assert!(dot.contains("node_0 -- node_2 [ label = \"No\" ]"));
}
