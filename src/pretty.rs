//! Sideways text drawing of a tree, produced by [`Tree::pretty`][crate::Tree::pretty].
//!
//! Larger values are drawn above their parent and smaller ones below, so the
//! output reads top to bottom in descending order:
//!
//! ```text
//!     ┌───9
//! ┌───8
//! │   └───7
//! 5
//! │   ┌───4
//! └───3
//!     └───1
//! ```

use std::fmt;
use std::rc::Rc;

use crate::node::Node;

const BLANK: &str = "    ";
const PIPE: &str = "│   ";

/// How a node hangs off its parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Connector {
    Root,
    Right,
    Left,
}

impl Connector {
    fn as_str(self) -> &'static str {
        match self {
            Self::Root => "",
            Self::Right => "┌───",
            Self::Left => "└───",
        }
    }
}

/// One column of indentation. Columns are shared between siblings so a deep
/// tree doesn't copy its whole indentation for every node.
struct Column {
    parent: Option<Rc<Column>>,
    text: &'static str,
}

type Indent = Option<Rc<Column>>;

/// The indentation for a child of a node drawn with `indent`.
///
/// A node's own column keeps its pipe only for the child facing back towards
/// the node's parent. A child on the same side the node hangs from gets a
/// blank column instead.
fn child_indent(indent: &Indent, blank_last: bool) -> Indent {
    let base = match indent {
        Some(last) if blank_last => Some(Rc::new(Column {
            parent: last.parent.as_ref().map(Rc::clone),
            text: BLANK,
        })),
        _ => indent.as_ref().map(Rc::clone),
    };
    Some(Rc::new(Column {
        parent: base,
        text: PIPE,
    }))
}

enum Frame<'a, T> {
    Visit(&'a Node<T>, Indent, Connector),
    Line(&'a Node<T>, Indent, Connector),
}

/// A [`Display`][fmt::Display] adapter drawing a tree one value per line.
pub struct Pretty<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> Pretty<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
}

impl<'a, T> fmt::Display for Pretty<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<_> = self
            .root
            .map(|root| Frame::Visit(root, None, Connector::Root))
            .into_iter()
            .collect();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit(node, indent, connector) => {
                    if let Some(left) = node.left_child() {
                        let left_indent = child_indent(&indent, connector == Connector::Left);
                        stack.push(Frame::Visit(left, left_indent, Connector::Left));
                    }
                    let right = node
                        .right_child()
                        .map(|right| (right, child_indent(&indent, connector == Connector::Right)));
                    stack.push(Frame::Line(node, indent, connector));
                    if let Some((right, right_indent)) = right {
                        stack.push(Frame::Visit(right, right_indent, Connector::Right));
                    }
                }
                Frame::Line(node, indent, connector) => {
                    // The last column is where the connector goes.
                    let mut columns = Vec::new();
                    let mut column = indent.as_ref().and_then(|last| last.parent.as_ref());
                    while let Some(current) = column {
                        columns.push(current.text);
                        column = current.parent.as_ref();
                    }
                    for text in columns.iter().rev() {
                        f.write_str(text)?;
                    }
                    f.write_str(connector.as_str())?;
                    writeln!(f, "{}", node.value())?;
                }
            }
        }

        Ok(())
    }
}
