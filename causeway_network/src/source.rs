// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-tree abstraction consumed by the document parser.

/// A read-only element in an XML-like document tree.
///
/// Implementors are cheap handles into a tree owned elsewhere, so traversal takes `self` by
/// value.
///
/// The parser only needs element names, raw attribute text and child elements in document
/// order. Typed attribute access with default substitution is layered on top by
/// [`DocumentParser`](crate::DocumentParser).
pub trait SourceNode: Copy {
    /// Local tag name of the element, without any namespace prefix.
    fn element_name(&self) -> &str;

    /// Raw text of an attribute, if present.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Child elements in document order. Text, comments and processing instructions are skipped.
    fn child_elements(self) -> impl Iterator<Item = Self>;

    /// Child elements with the given tag name, in document order.
    fn children_named(self, tag: &str) -> impl Iterator<Item = Self> {
        self.child_elements()
            .filter(move |child| child.element_name() == tag)
    }
}

impl<'a, 'input: 'a> SourceNode for roxmltree::Node<'a, 'input> {
    fn element_name(&self) -> &str {
        self.tag_name().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attribute(name)
    }

    fn child_elements(self) -> impl Iterator<Item = Self> {
        self.children().filter(roxmltree::Node::is_element)
    }
}
