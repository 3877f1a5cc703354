// src/models.rs

//! Data types shared by the navigator, the plugin registry and menu templates.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

// --- ACTIONS ---

/// The future produced by a leaf action.
pub type ActionFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>>;

/// An asynchronous, side-effecting operation attached to a leaf menu item.
///
/// Actions are shared (`Arc`) so that a level can be cloned onto the navigation
/// history without duplicating the closures it holds.
pub type Action = Arc<dyn Fn() -> ActionFuture + Send + Sync + 'static>;

/// Wraps an async closure into an [`Action`].
pub fn action<F, Fut>(f: F) -> Action
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(move || Box::pin(f()) as ActionFuture)
}

// --- MENU ITEMS ---

/// One menu level: an immutable, ordered list of items.
///
/// Levels are reference counted so that descending into a branch pushes a
/// pointer onto the history instead of a copy.
pub type MenuLevel = Arc<[MenuItem]>;

/// What happens when an item is selected.
#[derive(Clone)]
pub enum MenuItemKind {
    /// Opens a nested menu level.
    Branch(MenuLevel),
    /// Runs an action, then asks whether to return to the menu.
    Leaf(Action),
    /// Does nothing when selected.
    Inert,
}

impl fmt::Debug for MenuItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch(children) => f.debug_tuple("Branch").field(&children.len()).finish(),
            Self::Leaf(_) => f.write_str("Leaf(<action>)"),
            Self::Inert => f.write_str("Inert"),
        }
    }
}

/// A single selectable entry in a menu level.
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// Identifier, expected to be unique among siblings (not enforced).
    pub value: String,
    /// Human readable display text.
    pub label: String,
    /// Short hint shown alongside the label.
    pub description: Option<String>,
    /// Branch, leaf or inert.
    pub kind: MenuItemKind,
}

impl MenuItem {
    /// Creates an item that opens `children` as a nested menu.
    pub fn branch(
        value: impl Into<String>,
        label: impl Into<String>,
        children: impl Into<Vec<MenuItem>>,
    ) -> Self {
        let children: Vec<MenuItem> = children.into();
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            kind: MenuItemKind::Branch(children.into()),
        }
    }

    /// Creates an item that runs `action` when selected.
    pub fn leaf(value: impl Into<String>, label: impl Into<String>, action: Action) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            kind: MenuItemKind::Leaf(action),
        }
    }

    /// Creates an item that does nothing when selected.
    pub fn inert(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            kind: MenuItemKind::Inert,
        }
    }

    /// Attaches a hint to the item.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True for items that open a submenu.
    pub fn is_branch(&self) -> bool {
        matches!(self.kind, MenuItemKind::Branch(_))
    }

    /// True for items that run an action.
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, MenuItemKind::Leaf(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_kind_and_description() {
        let leaf = MenuItem::leaf("a", "A", action(|| async { Ok(()) })).with_description("hint");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.description.as_deref(), Some("hint"));

        let branch = MenuItem::branch("b", "B", vec![leaf.clone()]);
        assert!(branch.is_branch());
        match &branch.kind {
            MenuItemKind::Branch(children) => assert_eq!(children.len(), 1),
            other => panic!("expected branch, got {:?}", other),
        }

        let inert = MenuItem::inert("c", "C");
        assert!(!inert.is_branch() && !inert.is_leaf());
    }

    #[tokio::test]
    async fn test_action_wrapper_runs_closure() {
        let hits = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let counter = hits.clone();
        let act = action(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                Ok(())
            }
        });

        act().await.unwrap();
        act().await.unwrap();
        assert_eq!(hits.load(std::sync::atomic::Ordering::SeqCst), 2);
    }
}
