use core::fmt;

use heapless::Vec;

use super::Parser;
use crate::error::Error;

/// A handle, identifying a node in a parser tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item of a parser tree: the node plus its links to children and siblings.
#[derive(Debug)]
struct Item<'a> {
    parser: Parser<'a>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

/// Fixed capacity arena of parser nodes.
///
/// Nodes are only ever appended, either as a new root or as the last child of
/// an existing node, so every node has at most one parent and the tree can
/// not contain cycles. Output slots bound to the nodes are borrowed for `'a`.
#[derive(Debug)]
pub struct ParserTree<'a, const N: usize> {
    items: Vec<Item<'a>, N>,
}

impl<'a, const N: usize> Default for ParserTree<'a, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> ParserTree<'a, N> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a node without a parent, and return its handle.
    pub fn add(&mut self, parser: Parser<'a>) -> Result<NodeId, Error> {
        let handle = NodeId(self.items.len());
        self.items
            .push(Item {
                parser,
                first_child: None,
                last_child: None,
                next_sibling: None,
            })
            .map_err(|_| Error::TreeFull)?;
        Ok(handle)
    }

    /// Append `parser` as the last child of `parent`, and return its handle.
    pub fn add_child(&mut self, parent: NodeId, parser: Parser<'a>) -> Result<NodeId, Error> {
        if parent.0 >= self.items.len() {
            return Err(Error::InvalidNode);
        }

        let handle = self.add(parser)?;
        match self.items[parent.0].last_child.replace(handle) {
            Some(prev) => self.items[prev.0].next_sibling = Some(handle),
            None => self.items[parent.0].first_child = Some(handle),
        }
        Ok(handle)
    }

    pub fn get(&self, handle: NodeId) -> Option<&Parser<'a>> {
        self.items.get(handle.0).map(|item| &item.parser)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the children of `handle`, in the order they were added.
    pub fn children(&self, handle: NodeId) -> Children<'_, 'a, N> {
        Children {
            tree: self,
            next: self.items.get(handle.0).and_then(|item| item.first_child),
        }
    }

    /// Run the node `handle` on `response`.
    ///
    /// The node isolates its field, then either converts it into its bound
    /// output or runs each child on the field. The first failing child aborts
    /// the parse; outputs written by earlier children keep their new values.
    pub fn parse(&self, handle: NodeId, response: &str) -> Result<(), Error> {
        let item = self.items.get(handle.0).ok_or(Error::InvalidNode)?;
        let field = item.parser.extract(response)?;
        trace!("Node {} extracted {}", handle.0, field);

        let output = item.parser.output();
        if output.is_bound() {
            return output.write(field);
        }

        if item.first_child.is_none() {
            warn!("Node {} has neither an output nor children", handle.0);
        }
        for child in self.children(handle) {
            self.parse(child, field)?;
        }
        Ok(())
    }
}

/// Iterator over the children of a node.
pub struct Children<'t, 'a, const N: usize> {
    tree: &'t ParserTree<'a, N>,
    next: Option<NodeId>,
}

impl<'t, 'a, const N: usize> Iterator for Children<'t, 'a, N> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.next?;
        self.next = self.tree.items[handle.0].next_sibling;
        Some(handle)
    }
}
