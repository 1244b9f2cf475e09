use step_forest::{from_keys, BalancePolicy, Tree};

/// Structure kinds sharing the ordered key-list contract. Tags are the
/// stable on-disk names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StructureKind {
    Avl,
    Bst,
    BinaryTree,
    LinkedList,
    Stack,
    Huffman,
}

impl StructureKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            StructureKind::Avl => "avl",
            StructureKind::Bst => "bst",
            StructureKind::BinaryTree => "binary-tree",
            StructureKind::LinkedList => "linked-list",
            StructureKind::Stack => "stack",
            StructureKind::Huffman => "huffman",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "avl" => Some(StructureKind::Avl),
            "bst" => Some(StructureKind::Bst),
            "binary-tree" => Some(StructureKind::BinaryTree),
            "linked-list" => Some(StructureKind::LinkedList),
            "stack" => Some(StructureKind::Stack),
            "huffman" => Some(StructureKind::Huffman),
            _ => None,
        }
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// One persisted structure: its kind and its key sequence. For trees the
/// sequence is pre-order, so reloading reproduces the shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub kind: StructureKind,
    pub keys: Vec<i64>,
}

/// Capture a tree as a record. The key sequence is pre-order, the only
/// order whose reload reproduces the original parent/child shape.
pub fn snapshot<P: BalancePolicy>(tree: &Tree<P>, kind: StructureKind) -> Record {
    Record {
        kind,
        keys: tree.pre_order_keys(),
    }
}

/// Rebuild a tree from a record by repeated insertion in record order.
pub fn restore<P: BalancePolicy>(record: &Record) -> Tree<P> {
    from_keys(&record.keys)
}
