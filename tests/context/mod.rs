use std::panic;
use std::thread;
use tristate_rail::context::{self, ContextStack};
use tristate_rail::definition::{ErrorDefinition, StdError};
use tristate_rail::ErrorContext;

#[test]
fn store_then_recall_restores_prior_context() {
    let mut stack = ContextStack::new();
    stack.current_mut().mark(&StdError::ResultMap).set_reason("outer");
    let before = stack.current().clone();

    stack.store().set_reason("inner");
    assert_eq!(stack.depth(), 1);
    assert_eq!(stack.current().previous(), Some(&before));

    let detached = stack.recall().unwrap();
    assert_eq!(detached.reason(), Some("inner"));
    assert!(detached.previous().is_none());
    assert_eq!(stack.current(), &before);
    assert_eq!(stack.depth(), 0);
}

#[test]
fn stored_context_starts_blank() {
    let mut stack = ContextStack::new();
    stack.current_mut().set_reason("outer");
    assert!(stack.store().is_blank());
}

#[test]
fn nested_guards_release_in_order() {
    let mut stack = ContextStack::new();
    stack.current_mut().set_reason("root");
    {
        let mut first = stack.scoped();
        first.set_reason("first");
        {
            let mut second = first.stack().scoped();
            second.set_reason("second");
            assert_eq!(second.reason(), Some("second"));
        }
        assert_eq!(first.reason(), Some("first"));
    }
    assert_eq!(stack.current().reason(), Some("root"));
    assert_eq!(stack.depth(), 0);
}

#[test]
fn guard_finish_returns_the_frame() {
    let mut stack = ContextStack::new();
    let mut guard = stack.scoped();
    guard.mark(&StdError::NullResult);
    let frame = guard.finish();
    assert_eq!(frame, StdError::NullResult.as_context());
    assert_eq!(stack.depth(), 0);
}

#[test]
fn with_stored_releases_on_panic() {
    let mut stack = ContextStack::new();
    stack.current_mut().set_reason("root");
    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        stack.with_stored(|ctx| {
            ctx.set_reason("doomed");
            panic!("boom");
        })
    }));
    assert!(result.is_err());
    assert_eq!(stack.current().reason(), Some("root"));
    assert_eq!(stack.depth(), 0);
}

#[test]
fn thread_scoped_store_and_recall() {
    context::remove();
    context::with_current(|ctx| {
        ctx.set_reason("thread root");
    });
    {
        let frame = context::store();
        assert_eq!(context::depth(), 1);
        frame.with(|ctx| {
            ctx.set_reason("nested");
        });
        assert_eq!(ErrorContext::instance().reason(), Some("nested"));
    }
    assert_eq!(context::depth(), 0);
    assert_eq!(ErrorContext::instance().reason(), Some("thread root"));
    context::remove();
}

#[test]
fn thread_scoped_manual_recall() {
    context::remove();
    assert!(context::recall().is_none());
    let frame = context::store();
    context::with_current(|ctx| {
        ctx.set_reason("frame");
    });
    let finished = frame.finish();
    assert_eq!(finished.reason(), Some("frame"));
    assert_eq!(context::depth(), 0);
}

#[test]
fn scoped_runs_inside_a_frame() {
    context::remove();
    let depth_inside = context::scoped(context::depth);
    assert_eq!(depth_inside, 1);
    assert_eq!(context::depth(), 0);
}

#[test]
fn threads_do_not_share_contexts() {
    context::remove();
    context::with_current(|ctx| {
        ctx.set_reason("main");
    });

    let seen = thread::spawn(|| {
        let initially_blank = ErrorContext::instance().is_blank();
        context::with_current(|ctx| {
            ctx.set_reason("worker");
        });
        (initially_blank, ErrorContext::instance().reason().map(str::to_owned))
    })
    .join()
    .unwrap();

    assert_eq!(seen, (true, Some("worker".to_owned())));
    assert_eq!(ErrorContext::instance().reason(), Some("main"));
    ErrorContext::remove();
    assert!(ErrorContext::instance().is_blank());
}

#[test]
fn scoped_and_instance_inside_with_current() {
    context::remove();
    let (seen_outer, nested) = context::with_current(|ctx| {
        ctx.set_reason("outer");
        let seen_outer = ErrorContext::instance();
        let nested = context::scoped(|| {
            assert_eq!(context::depth(), 1);
            context::with_current(|inner| {
                inner.set_reason("inner");
            });
            ErrorContext::instance()
        });
        assert_eq!(ctx.reason(), Some("outer"));
        (seen_outer, nested)
    });

    assert!(seen_outer.is_blank());
    assert_eq!(nested.reason(), Some("inner"));
    assert_eq!(context::depth(), 0);
    assert_eq!(ErrorContext::instance().reason(), Some("outer"));
    context::remove();
}

#[test]
fn nested_edit_of_the_same_frame_gets_its_own_frame() {
    context::remove();
    context::with_current(|outer| {
        outer.set_reason("outer");
        let inner_depth = context::with_current(|inner| {
            assert!(inner.is_blank());
            inner.set_reason("inner");
            context::depth()
        });
        assert_eq!(inner_depth, 1);
    });
    assert_eq!(context::depth(), 0);
    assert_eq!(ErrorContext::instance().reason(), Some("outer"));
    context::remove();
}

#[test]
fn stored_frame_dropped_inside_with_current_is_released() {
    context::remove();
    context::with_current(|ctx| {
        ctx.set_reason("root");
        {
            let frame = context::store();
            frame.with(|inner| {
                inner.set_reason("frame");
            });
            assert_eq!(context::depth(), 1);
        }
        assert_eq!(context::depth(), 0);
        assert!(context::recall().is_none());
    });
    assert_eq!(ErrorContext::instance().reason(), Some("root"));
    context::remove();
}

#[test]
fn edit_of_a_recalled_frame_is_discarded() {
    context::remove();
    context::with_current(|ctx| {
        ctx.set_reason("root");
    });
    let frame = context::store();
    context::with_current(|ctx| {
        ctx.set_reason("doomed");
        assert_eq!(context::recall().and_then(|c| c.reason().map(str::to_owned)), None);
    });
    drop(frame);
    assert_eq!(context::depth(), 0);
    assert_eq!(ErrorContext::instance().reason(), Some("root"));
    context::remove();
}

#[test]
fn with_current_commits_on_panic() {
    context::remove();
    let result = panic::catch_unwind(|| {
        context::with_current(|ctx| {
            ctx.set_reason("before panic");
            panic!("boom");
        })
    });
    assert!(result.is_err());
    assert_eq!(ErrorContext::instance().reason(), Some("before panic"));
    assert_eq!(context::depth(), 0);
    context::remove();
}
