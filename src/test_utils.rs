use std::fmt::{Display, Write};

use proptest::prelude::*;

use crate::node::Node;

const ELEMENT_MAX: u8 = 50;

/// Generate arbitrary elements from [0..[`ELEMENT_MAX`]).
///
/// A small value domain encourages multiple operations to act on the same
/// value.
pub(crate) fn arbitrary_element() -> impl Strategy<Value = u8> {
    0..ELEMENT_MAX
}

/// Render the subtree rooted at `n` as a Graphviz dot digraph.
pub(crate) fn print_dot<T>(n: &Node<T>) -> String
where
    T: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    recurse(n, &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<T, W>(n: &Node<T>, buf: &mut W)
where
    W: std::fmt::Write,
    T: Display,
{
    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(buf, "{} -> {};", n.element(), v.element()).unwrap();
                recurse(v, buf);
            }
            None => {
                writeln!(buf, "null_{} [shape=point,style=invis];", n.element()).unwrap();
                writeln!(buf, "{} -> null_{} [style=invis];", n.element(), n.element()).unwrap();
            }
        };
    }
}
