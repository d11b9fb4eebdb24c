use std::fmt::Display;

use colored::*;

use crate::avltree::AvlTree;
use crate::node::Node;

impl<T: Display> AvlTree<T> {
    /// Draws the tree one node per line, left child first, with each node's
    /// height and balance factor. A missing child next to a present one is
    /// drawn as `∅`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self.root() {
            Some(root) => render_node(root, "", &mut out),
            None => out.push_str(&"∅".dimmed().to_string()),
        }
        out
    }
}

fn label<T: Display>(node: &Node<T>) -> String {
    let balance = node.balance();
    let bf = format!("bf={balance}");
    let bf = if balance == 0 { bf.green() } else { bf.yellow() };
    format!(
        "{} {} {}",
        node.value().to_string().bold(),
        format!("h={}", node.height()).dimmed(),
        bf
    )
}

fn render_node<T: Display>(node: &Node<T>, tab: &str, out: &mut String) {
    out.push_str(&label(node));
    if node.is_leaf() {
        return;
    }

    let children = [node.left(), node.right()];
    for (i, child) in children.into_iter().enumerate() {
        let is_last = i == children.len() - 1;
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        match child {
            Some(child) => {
                let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
                render_node(child, &child_tab, out);
            }
            None => out.push_str(&"∅".dimmed().to_string()),
        }
    }
}
