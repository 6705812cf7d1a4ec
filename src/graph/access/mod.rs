//! Traversal scratch state shared by every algorithm. Crate-internal.

pub(crate) mod visited;

pub(crate) use visited::VisitedSet;
