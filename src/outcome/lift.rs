//! Lifting plain functions into functions over [`Outcome`]s.
//!
//! The lifted function applies the original only when every argument is a
//! success. Otherwise the first non-success argument, scanning left to right,
//! decides the result: a failure propagates its context, an empty propagates
//! as empty.
//!
//! ```
//! use tristate_rail::outcome::lift2;
//! use tristate_rail::Outcome;
//!
//! let add = lift2(|a: i32, b: i32| a + b);
//! assert_eq!(add(Outcome::success(2), Outcome::success(3)), Outcome::success(5));
//! assert!(add(Outcome::Empty, Outcome::success(3)).is_empty());
//! ```
use super::Outcome;

/// Lifts a unary function.
pub fn lift<A, R, F>(f: F) -> impl Fn(Outcome<A>) -> Outcome<R>
where
    F: Fn(A) -> R,
{
    move |a| a.map(&f)
}

/// Lifts a binary function.
pub fn lift2<A, B, R, F>(f: F) -> impl Fn(Outcome<A>, Outcome<B>) -> Outcome<R>
where
    F: Fn(A, B) -> R,
{
    move |a, b| map2(a, b, &f)
}

/// Lifts a ternary function.
pub fn lift3<A, B, C, R, F>(f: F) -> impl Fn(Outcome<A>, Outcome<B>, Outcome<C>) -> Outcome<R>
where
    F: Fn(A, B, C) -> R,
{
    move |a, b, c| a.flat_map(|a| b.flat_map(|b| c.map(|c| f(a, b, c))))
}

/// Combines two outcomes with `f`.
#[inline]
pub fn map2<A, B, R, F>(a: Outcome<A>, b: Outcome<B>, f: F) -> Outcome<R>
where
    F: FnOnce(A, B) -> R,
{
    a.flat_map(|a| b.map(|b| f(a, b)))
}

/// Combines two lazily produced outcomes.
///
/// The second supplier runs only when the first one yields a success.
pub fn map2_with<A, B, R, SA, SB, F>(a: SA, b: SB, f: F) -> Outcome<R>
where
    SA: FnOnce() -> Outcome<A>,
    SB: FnOnce() -> Outcome<B>,
    F: FnOnce(A, B) -> R,
{
    a().flat_map(|a| b().map(|b| f(a, b)))
}

/// Combines three lazily produced outcomes, short-circuiting left to right.
pub fn map3_with<A, B, C, R, SA, SB, SC, F>(a: SA, b: SB, c: SC, f: F) -> Outcome<R>
where
    SA: FnOnce() -> Outcome<A>,
    SB: FnOnce() -> Outcome<B>,
    SC: FnOnce() -> Outcome<C>,
    F: FnOnce(A, B, C) -> R,
{
    a().flat_map(|a| b().flat_map(|b| c().map(|c| f(a, b, c))))
}
