//! Component scopes and the cart provider.
//!
//! A [`Scope`] is a node in the component tree carrying typed context
//! values. Lookups walk from a scope up to the root, so anything provided in
//! an ancestor is visible to every descendant and nothing leaks sideways.
//!
//! ```
//! use shopfront_commerce::context::{use_cart, CartProvider, Scope};
//! use shopfront_commerce::money::Currency;
//!
//! let root = Scope::root();
//! assert!(use_cart(&root).is_err());
//!
//! let app = CartProvider::new(Currency::USD).mount(&root);
//! let header = app.child();
//! let cart = use_cart(&header).unwrap();
//! assert_eq!(cart.total_items(), 0);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::cart::CartStore;
use crate::error::CommerceError;
use crate::money::Currency;

/// A node in the component tree.
#[derive(Clone, Default)]
pub struct Scope {
    inner: Rc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    parent: Option<Scope>,
    contexts: RefCell<HashMap<TypeId, Box<dyn Any>>>,
}

impl Scope {
    /// A scope with no parent and no contexts.
    pub fn root() -> Self {
        Self::default()
    }

    /// A new scope nested under this one.
    pub fn child(&self) -> Self {
        Self {
            inner: Rc::new(ScopeInner {
                parent: Some(self.clone()),
                contexts: RefCell::default(),
            }),
        }
    }

    /// Make `value` available to this scope and its descendants.
    ///
    /// Replaces any value of the same type provided directly on this scope.
    pub fn provide_context<T: Clone + 'static>(&self, value: T) {
        self.inner
            .contexts
            .borrow_mut()
            .insert(TypeId::of::<T>(), Box::new(value));
    }

    /// The nearest value of type `T` provided on this scope or an ancestor.
    pub fn use_context<T: Clone + 'static>(&self) -> Option<T> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            let found = current
                .inner
                .contexts
                .borrow()
                .get(&TypeId::of::<T>())
                .and_then(|value| value.downcast_ref::<T>())
                .cloned();
            if found.is_some() {
                return found;
            }
            scope = current.inner.parent.as_ref();
        }
        None
    }

    /// Number of ancestors above this scope.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope = self.inner.parent.as_ref();
        while let Some(parent) = scope {
            depth += 1;
            scope = parent.inner.parent.as_ref();
        }
        depth
    }
}

/// Establishes the lifetime of one cart for a subtree of components.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartProvider {
    currency: Currency,
}

impl CartProvider {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Create a fresh cart and return the child scope it is reachable from.
    pub fn mount(&self, parent: &Scope) -> Scope {
        let scope = parent.child();
        scope.provide_context(CartStore::new(self.currency));
        tracing::debug!(currency = %self.currency, depth = scope.depth(), "cart provider mounted");
        scope
    }
}

/// The cart store provided to `scope` or one of its ancestors.
///
/// Fails with [`CommerceError::StoreNotInitialized`] when no
/// [`CartProvider`] covers `scope`.
pub fn use_cart(scope: &Scope) -> Result<CartStore, CommerceError> {
    scope
        .use_context::<CartStore>()
        .ok_or(CommerceError::StoreNotInitialized)
}
