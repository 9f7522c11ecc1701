use puzzle_toolkit::input;
use puzzle_toolkit::prelude::*;
use puzzle_toolkit::trees::BinaryTree;
use puzzle_toolkit::ParseError;

#[test]
fn dial_from_text() {
    let text = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";
    let turns = input::lines(text, true)
        .iter()
        .map(|line| line.parse::<Turn>())
        .collect::<Result<Vec<_>, ParseError>>()
        .unwrap();

    let mut dial = Dial::with_config(DialConfig::with_start(50));
    let mut landed_on_zero = 0;
    for turn in turns {
        dial.apply(turn);
        if dial.pointer() == 0 {
            landed_on_zero += 1;
        }
    }

    assert_eq!(dial.zero_endings(), landed_on_zero);
    assert_eq!(dial.zero_endings(), 3);
    assert_eq!(dial.zero_passes(), 3);
}

#[test]
fn dial_counts_every_click_on_zero() {
    // turning one step at a time makes every visit to zero an ending
    let mut stepwise = Dial::new(50);
    let mut dial = Dial::new(50);
    for (rotation, steps) in [
        (Rotation::Left, 250),
        (Rotation::Right, 7),
        (Rotation::Right, 143),
        (Rotation::Left, 1),
    ] {
        dial.rotate(rotation, steps);
        for _ in 0..steps {
            stepwise.rotate(rotation, 1);
        }
    }
    assert_eq!(dial.pointer(), stepwise.pointer());
    assert_eq!(
        dial.zero_passes() + dial.zero_endings(),
        stepwise.zero_endings()
    );
    assert_eq!(stepwise.zero_passes(), 0);
}

#[test]
fn fresh_ingredients() {
    let text = "3-5\n10-14\n16-20\n12-18\n\n1\n5\n8\n11\n17\n32\n";
    let sections = input::sections(text, "\n\n");
    assert_eq!(sections.len(), 2);

    let ranges = input::lines(&sections[0], true)
        .iter()
        .map(|line| line.parse::<Range>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let ids = input::integers(&sections[1], "\n").unwrap();

    let fresh = ids
        .iter()
        .filter(|&&id| ranges.iter().any(|r| r.contains(id)))
        .count();
    assert_eq!(fresh, 3);

    let merged = merge_ranges(ranges);
    assert_eq!(merged, vec![Range::new(3, 5), Range::new(10, 20)]);
    assert_eq!(merged.iter().map(Range::len).sum::<u64>(), 14);
}

#[test]
fn columns_of_a_worksheet() {
    let text = "123 328\n 45 64 \n  6 98 \n";
    let columns = input::columns(text);
    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0].trim(), "1");
    assert_eq!(columns[2], "356");
    assert_eq!(columns[3].trim(), "");
}

#[test]
fn grid_round_trip_through_display() {
    let text = "#..\n.#.\n..#";
    let grid = input::grid(text);
    assert_eq!(grid.to_string(), text);
    assert_eq!(
        grid.find_all(&'#'),
        vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
    );
}

#[test]
fn tree_from_sorted_values() {
    // insert the middle element first to get a balanced tree
    fn build(tree: &mut BinaryTree<i32>, parent: usize, values: &[i32], left: bool) {
        if values.is_empty() {
            return;
        }
        let mid = values.len() / 2;
        let id = if left {
            tree.insert_left(parent, values[mid])
        } else {
            tree.insert_right(parent, values[mid])
        };
        build(tree, id, &values[..mid], true);
        build(tree, id, &values[mid + 1..], false);
    }

    let values: Vec<i32> = (1..=15).collect();
    let mut tree = BinaryTree::with_root(values[7]);
    let root = tree.root().unwrap();
    build(&mut tree, root, &values[..7], true);
    build(&mut tree, root, &values[8..], false);

    assert_eq!(tree.len(), 15);
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.count_leaves(), 8);
    assert!(tree.is_balanced());
    assert_eq!(
        tree.inorder().into_iter().copied().collect::<Vec<_>>(),
        values
    );
}
