//! Predicates of zero to four arguments

/// A boolean test over an argument tuple.
///
/// Implemented for every closure `Fn(..) -> bool` taking up to four
/// arguments, with the arguments packed into a tuple:
///
/// ```
/// use safecall_core::functional::Predicate;
///
/// let between = |x: i32, lo: i32, hi: i32| lo <= x && x <= hi;
/// assert!(between.test((5, 1, 10)));
/// assert!(between.negate().test((11, 1, 10)));
/// ```
pub trait Predicate<Args> {
    fn test(&self, args: Args) -> bool;

    /// The logical negation of this predicate
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }

    /// Short-circuiting conjunction
    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: Predicate<Args>,
    {
        And(self, other)
    }

    /// Short-circuiting disjunction
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Predicate<Args>,
    {
        Or(self, other)
    }
}

impl<F> Predicate<()> for F
where
    F: Fn() -> bool,
{
    fn test(&self, _: ()) -> bool {
        self()
    }
}

macro_rules! impl_predicate_for_fn {
    ($($arg:ident),+) => {
        impl<F, $($arg),+> Predicate<($($arg,)+)> for F
        where
            F: Fn($($arg),+) -> bool,
        {
            #[allow(non_snake_case)]
            fn test(&self, ($($arg,)+): ($($arg,)+)) -> bool {
                self($($arg),+)
            }
        }
    };
}

impl_predicate_for_fn!(A);
impl_predicate_for_fn!(A, B);
impl_predicate_for_fn!(A, B, C);
impl_predicate_for_fn!(A, B, C, D);

/// See [`Predicate::negate`]
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(P);

impl<Args, P> Predicate<Args> for Not<P>
where
    P: Predicate<Args>,
{
    fn test(&self, args: Args) -> bool {
        !self.0.test(args)
    }
}

/// See [`Predicate::and`]
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q>(P, Q);

impl<Args, P, Q> Predicate<Args> for And<P, Q>
where
    Args: Clone,
    P: Predicate<Args>,
    Q: Predicate<Args>,
{
    fn test(&self, args: Args) -> bool {
        self.0.test(args.clone()) && self.1.test(args)
    }
}

/// See [`Predicate::or`]
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q>(P, Q);

impl<Args, P, Q> Predicate<Args> for Or<P, Q>
where
    Args: Clone,
    P: Predicate<Args>,
    Q: Predicate<Args>,
{
    fn test(&self, args: Args) -> bool {
        self.0.test(args.clone()) || self.1.test(args)
    }
}
