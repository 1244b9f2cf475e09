use crate::node::Node;

/// Debug printer for subtrees, one node per line with cached height and
/// balance factor.
pub fn print(node: Option<&Node>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let left = print(n.left.as_deref(), &format!("{tab}  "));
            let right = print(n.right.as_deref(), &format!("{tab}  "));
            format!(
                "{} [h={} bf={}]\n{tab}L={left}\n{tab}R={right}",
                n.key,
                n.height,
                n.balance_factor()
            )
        }
    }
}
