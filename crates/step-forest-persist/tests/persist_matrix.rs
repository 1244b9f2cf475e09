use step_forest::{AvlTree, BstTree};
use step_forest_persist::{
    decode, encode, restore, snapshot, PersistError, Record, StructureKind,
};

#[test]
fn encode_decode_round_trip() {
    let records = vec![
        Record {
            kind: StructureKind::Avl,
            keys: vec![20, 10, 30],
        },
        Record {
            kind: StructureKind::Stack,
            keys: vec![],
        },
        Record {
            kind: StructureKind::LinkedList,
            keys: vec![-5, 0, 7],
        },
    ];

    let text = encode(&records);
    assert_eq!(text, "avl:20,10,30\nstack\nlinked-list:-5,0,7\n");
    assert_eq!(decode(&text).unwrap(), records);
}

#[test]
fn decode_rejects_unknown_structure_tags() {
    assert_eq!(
        decode("treap:1,2,3"),
        Err(PersistError::UnknownStructure("treap".to_string()))
    );
}

#[test]
fn decode_rejects_tagless_lines() {
    assert_eq!(decode("avl:1\n:2,3"), Err(PersistError::MissingTag(2)));
}

#[test]
fn decode_ignores_blank_lines_and_skips_bad_tokens() {
    let records = decode("\navl: 1, x, 3 \n\nbst:2，4\n").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].keys, vec![1, 3]);
    assert_eq!(records[1].keys, vec![2, 4]);
}

#[test]
fn snapshot_restore_preserves_tree_shape() {
    let mut tree = AvlTree::new();
    tree.extend([50, 30, 70, 20, 40, 60, 80]);
    tree.delete(70).unwrap();

    let record = snapshot(&tree, StructureKind::Avl);
    let text = encode(&[record]);

    let decoded = decode(&text).unwrap();
    assert_eq!(decoded[0].kind, StructureKind::Avl);

    let restored: AvlTree = restore(&decoded[0]);
    assert_eq!(restored, tree);
}

#[test]
fn sibling_structures_share_the_record_shape() {
    let mut tree = BstTree::new();
    tree.extend([40, 20, 60, 10, 30]);

    let record = snapshot(&tree, StructureKind::Bst);
    let restored: BstTree = restore(&record);
    assert_eq!(restored, tree);
}
