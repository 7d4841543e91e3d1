//! Depth-first traversal over any tree.
//!
//! The walker visits nodes in pre-order, calling back once per node with its
//! path and whether it is a leaf. Maps, lists and records are all reached
//! through [`Container`], so callers never match on the backing type.
//!
//! The callback controls the walk through its return value:
//!
//! - `Ok(Visit::Continue)` descends into the node's children
//! - `Ok(Visit::SkipDescendants)` prunes this subtree and carries on with its
//!   siblings
//! - `Err(e)` stops the whole walk and `e` is returned unchanged
//!
//! `Null` values are absent: they are never visited.

use std::convert::Infallible;

use crate::{Engine, PathBuf, Value, container::Container};

/// What the walker should do after visiting a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visit {
    /// Descend into the node's children
    #[default]
    Continue,
    /// Treat the node as fully visited without descending
    SkipDescendants,
}

impl Engine {
    /// Walks `tree` depth-first, calling `visit(node, path, is_leaf)` for
    /// every node including the root.
    ///
    /// Map children are visited in unspecified order, list children in index
    /// order and record fields in declaration order (promoted fields of
    /// embedded records in place of the embedding field). A scalar root is a
    /// single leaf visit with an empty path.
    ///
    /// Containers nested deeper than [`Config::max_depth`](crate::Config::max_depth)
    /// are still visited but not descended.
    ///
    /// ```
    /// use arbor::{Engine, Map, Value, Visit};
    /// use std::convert::Infallible;
    ///
    /// let tree = Value::Map(Map::new().with("a", 1).with("b", Map::new().with("c", 2)));
    /// let mut leaves = Vec::new();
    ///
    /// Engine::default()
    ///     .walk(&tree, |_, path, is_leaf| {
    ///         if is_leaf {
    ///             leaves.push(path.join("."));
    ///         }
    ///         Ok::<_, Infallible>(Visit::Continue)
    ///     })
    ///     .unwrap();
    ///
    /// leaves.sort();
    /// assert_eq!(leaves, vec!["a", "b.c"]);
    /// ```
    pub fn walk<E, F>(&self, tree: &Value, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&Value, &PathBuf, bool) -> Result<Visit, E>,
    {
        let mut path = PathBuf::new();
        self.walk_node(tree, &mut path, &mut visit)
    }

    /// Calls `f` for every leaf of `tree`.
    pub(crate) fn for_each_leaf(&self, tree: &Value, mut f: impl FnMut(&PathBuf, &Value)) {
        let walked = self.walk(tree, |node, path, is_leaf| {
            if is_leaf {
                f(path, node);
            }
            Ok::<_, Infallible>(Visit::Continue)
        });
        if let Err(never) = walked {
            match never {}
        }
    }

    fn walk_node<E, F>(&self, node: &Value, path: &mut PathBuf, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&Value, &PathBuf, bool) -> Result<Visit, E>,
    {
        if node.is_null() {
            return Ok(());
        }

        let Some(container) = Container::of(node, self.config()) else {
            visit(node, path, true)?;
            return Ok(());
        };

        if visit(node, path, false)? == Visit::SkipDescendants {
            return Ok(());
        }

        if path.len() >= self.config().max_depth {
            tracing::warn!(
                path = %path,
                max_depth = self.config().max_depth,
                kind = container.kind(),
                "Not descending past the depth limit"
            );
            return Ok(());
        }

        for (segment, child) in container.entries() {
            path.push_mut(segment);
            let result = self.walk_node(&child, path, visit);
            path.pop();
            result?;
        }
        Ok(())
    }
}
