//! Scoped ownership of in-progress [`ErrorContext`] state.
//!
//! A nested operation that needs its own diagnostic state must not clobber
//! the state an ancestor is still building. [`ContextStack`] models this
//! explicitly: [`store`](ContextStack::store) pushes a fresh context that
//! remembers the caller's one as `previous`, [`recall`](ContextStack::recall)
//! pops back to it.
//!
//! Prefer the scoped forms, which release on every exit path including
//! unwinding:
//!
//! - [`ContextStack::scoped`] returns a [`StackGuard`] that recalls on drop;
//! - [`ContextStack::with_stored`] runs a closure inside a stored frame.
//!
//! For code that cannot thread a stack through its calls, a thread-scoped
//! stack is available through [`instance`], [`with_current`], [`store`],
//! [`recall`], [`scoped`] and [`remove`]. Each thread owns an independent
//! stack. None of these hold the stack borrowed while user code runs, so
//! they can be called from inside one another.
//!
//! # Examples
//!
//! ```
//! use tristate_rail::context::ContextStack;
//! use tristate_rail::definition::{ErrorDefinition, StdError};
//!
//! let mut stack = ContextStack::new();
//! stack.current_mut().mark(&StdError::InternalServerError).set_reason("outer");
//!
//! let inner = stack.with_stored(|ctx| {
//!     ctx.set_reason("inner");
//!     ctx.clone()
//! });
//!
//! assert_eq!(inner.reason(), Some("inner"));
//! assert_eq!(stack.current().reason(), Some("outer"));
//! assert_eq!(stack.depth(), 0);
//! ```
use crate::types::ErrorContext;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};

/// An owned stack of contexts; the top is the "current" one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContextStack {
    current: ErrorContext,
}

impl ContextStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current (innermost) context.
    #[inline]
    pub fn current(&self) -> &ErrorContext {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut ErrorContext {
        &mut self.current
    }

    /// Number of stored frames above the root context.
    pub fn depth(&self) -> usize {
        self.current.chain().count() - 1
    }

    /// Pushes a fresh context, keeping the current one as its `previous`.
    ///
    /// Every `store` must be paired with a [`recall`](Self::recall); prefer
    /// [`scoped`](Self::scoped) which pairs them automatically.
    pub fn store(&mut self) -> &mut ErrorContext {
        let caller = mem::take(&mut self.current);
        self.current.set_previous(Some(Box::new(caller)));
        crate::rail_event!(debug, depth = self.depth(), "stored error context");
        &mut self.current
    }

    /// Reinstalls the `previous` context as current.
    ///
    /// Returns the detached context that was current, or `None` (leaving the
    /// stack untouched) when there is no `previous` to return to.
    pub fn recall(&mut self) -> Option<ErrorContext> {
        let previous = self.current.take_previous()?;
        let detached = mem::replace(&mut self.current, *previous);
        crate::rail_event!(debug, depth = self.depth(), "recalled error context");
        Some(detached)
    }

    /// Stores a fresh context and returns a guard that recalls it on drop.
    pub fn scoped(&mut self) -> StackGuard<'_> {
        self.store();
        let level = self.depth();
        StackGuard { stack: self, level, released: false }
    }

    /// Runs `f` against a freshly stored context, recalling afterwards.
    pub fn with_stored<R>(&mut self, f: impl FnOnce(&mut ErrorContext) -> R) -> R {
        let mut guard = self.scoped();
        f(&mut guard)
    }

    /// The frame stored at `level`, counting the root as 0.
    fn frame_mut(&mut self, level: usize) -> Option<&mut ErrorContext> {
        let depth = self.depth();
        if level > depth {
            return None;
        }
        let mut frame = &mut self.current;
        for _ in level..depth {
            frame = frame.previous_mut()?;
        }
        Some(frame)
    }

    /// Pops frames until the stack is back below `level`, returning the
    /// context that was at `level`.
    fn unwind_to(&mut self, level: usize) -> Option<ErrorContext> {
        let mut detached = None;
        while self.depth() >= level {
            match self.recall() {
                Some(ctx) => detached = Some(ctx),
                None => break,
            }
        }
        detached
    }
}

/// Scoped frame of a [`ContextStack`]; dereferences to the frame's context.
///
/// Dropping the guard recalls every frame stored at or above its level,
/// so frames left unbalanced by nested code are released as well.
#[must_use = "dropping the guard immediately recalls the stored context"]
pub struct StackGuard<'a> {
    stack: &'a mut ContextStack,
    level: usize,
    released: bool,
}

impl StackGuard<'_> {
    /// The stack the frame belongs to, e.g. for nesting further frames.
    #[inline]
    pub fn stack(&mut self) -> &mut ContextStack {
        self.stack
    }

    /// Recalls the frame now and returns its context.
    pub fn finish(mut self) -> ErrorContext {
        self.released = true;
        self.stack.unwind_to(self.level).unwrap_or_default()
    }
}

impl Deref for StackGuard<'_> {
    type Target = ErrorContext;

    #[inline]
    fn deref(&self) -> &ErrorContext {
        self.stack.current()
    }
}

impl DerefMut for StackGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut ErrorContext {
        self.stack.current_mut()
    }
}

impl Drop for StackGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            self.stack.unwind_to(self.level);
        }
    }
}

/// The thread's stack plus the bookkeeping that lets closures edit a frame
/// without holding a borrow while user code runs.
#[derive(Debug)]
struct ThreadStack {
    stack: ContextStack,
    /// Frame ids, indexed by level; `ids.len() == stack.depth() + 1`.
    ids: Vec<u64>,
    /// Ids of frames checked out by running [`with_current`] calls.
    editing: Vec<u64>,
    next_id: u64,
}

impl ThreadStack {
    fn new() -> Self {
        Self { stack: ContextStack::new(), ids: vec![0], editing: Vec::new(), next_id: 1 }
    }

    fn store(&mut self) -> usize {
        self.stack.store();
        self.ids.push(self.next_id);
        self.next_id += 1;
        self.stack.depth()
    }

    fn recall(&mut self) -> Option<ErrorContext> {
        let detached = self.stack.recall()?;
        self.ids.pop();
        Some(detached)
    }

    fn unwind_to(&mut self, level: usize) -> Option<ErrorContext> {
        let detached = self.stack.unwind_to(level);
        self.ids.truncate(self.stack.depth() + 1);
        detached
    }

    fn remove(&mut self) {
        self.stack = ContextStack::new();
        // ids stay unique so edits of discarded frames are not committed
        self.ids = vec![self.next_id];
        self.next_id += 1;
    }

    /// Copies the top frame out for editing, or `None` when a running
    /// [`with_current`] already has it.
    fn checkout(&mut self) -> Option<Edit> {
        let id = *self.ids.last()?;
        if self.editing.contains(&id) {
            return None;
        }
        self.editing.push(id);
        Some(Edit { id, level: self.stack.depth(), ctx: self.stack.current().clone() })
    }

    /// Writes an edited copy back, unless its frame was recalled meanwhile.
    fn commit(&mut self, id: u64, level: usize, mut ctx: ErrorContext) {
        self.editing.retain(|editing| *editing != id);
        if self.ids.get(level) != Some(&id) {
            crate::rail_event!(debug, depth = level, "dropped edit of a recalled error context");
            return;
        }
        if let Some(frame) = self.stack.frame_mut(level) {
            ctx.set_previous(frame.take_previous());
            *frame = ctx;
        }
    }
}

/// A checked-out copy of a thread frame; committed back on drop.
struct Edit {
    id: u64,
    level: usize,
    ctx: ErrorContext,
}

impl Drop for Edit {
    fn drop(&mut self) {
        let ctx = mem::take(&mut self.ctx);
        let _ = LOCAL.try_with(|stack| stack.borrow_mut().commit(self.id, self.level, ctx));
    }
}

thread_local! {
    static LOCAL: RefCell<ThreadStack> = RefCell::new(ThreadStack::new());
}

/// Snapshot of the calling thread's current context.
///
/// Inside a [`with_current`] closure editing the same frame, the snapshot
/// shows the frame as it was when that closure started.
#[inline]
pub fn instance() -> ErrorContext {
    LOCAL.with(|stack| stack.borrow().stack.current().clone())
}

/// Runs `f` against the calling thread's current context.
///
/// `f` edits a copy of the frame that is written back when it returns or
/// unwinds, so every thread-scoped call may be used from inside `f`. A
/// nested `with_current` on a frame that is already being edited runs in a
/// freshly [`store`]d frame instead, leaving the outer edit intact. Edits to
/// a frame that `f` recalls are discarded.
pub fn with_current<R>(f: impl FnOnce(&mut ErrorContext) -> R) -> R {
    match LOCAL.with(|stack| stack.borrow_mut().checkout()) {
        Some(mut edit) => f(&mut edit.ctx),
        None => scoped(|| with_current(f)),
    }
}

/// Depth of the calling thread's stack.
#[inline]
pub fn depth() -> usize {
    LOCAL.with(|stack| stack.borrow().stack.depth())
}

/// Stores a fresh context on the calling thread's stack.
///
/// The returned guard recalls it when dropped; the guard cannot leave the
/// thread.
pub fn store() -> StoredContext {
    let level = LOCAL.with(|stack| stack.borrow_mut().store());
    StoredContext { level, _not_send: PhantomData }
}

/// Manually recalls the calling thread's current frame.
///
/// Returns the detached context, or `None` when nothing was stored.
pub fn recall() -> Option<ErrorContext> {
    LOCAL.with(|stack| stack.borrow_mut().recall())
}

/// Runs `f` inside a stored frame of the calling thread's stack.
pub fn scoped<R>(f: impl FnOnce() -> R) -> R {
    let _frame = store();
    f()
}

/// Discards the calling thread's stack.
pub fn remove() {
    LOCAL.with(|stack| stack.borrow_mut().remove());
}

/// Guard for a frame of the thread-scoped stack; recalls on drop.
#[must_use = "dropping the guard immediately recalls the stored context"]
#[derive(Debug)]
pub struct StoredContext {
    level: usize,
    _not_send: PhantomData<*const ()>,
}

impl StoredContext {
    /// Runs `f` against the thread's current context.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&mut ErrorContext) -> R) -> R {
        with_current(f)
    }

    /// Recalls the frame now and returns its context.
    pub fn finish(self) -> ErrorContext {
        let ctx = LOCAL.with(|stack| stack.borrow_mut().unwind_to(self.level));
        mem::forget(self);
        ctx.unwrap_or_default()
    }
}

impl Drop for StoredContext {
    fn drop(&mut self) {
        // the thread-local may already be gone during thread teardown
        let _ = LOCAL.try_with(|stack| stack.borrow_mut().unwind_to(self.level));
    }
}
