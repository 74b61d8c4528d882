use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Scope},
            function::{builtin, log, min_max, sqrt},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length has
/// already been checked against its arity.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the builtin is variadic with at least `n` arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function. These can not be assigned to.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"  => { arity: Arity::Exact(1), func: sqrt::sqrt },
    "abs"   => { arity: Arity::Exact(1), func: builtin::abs },
    "ceil"  => { arity: Arity::Exact(1), func: |args| builtin::unary_round("ceil", args) },
    "floor" => { arity: Arity::Exact(1), func: |args| builtin::unary_round("floor", args) },
    "round" => { arity: Arity::OneOf(&[1, 2]), func: builtin::round },
    "min"   => { arity: Arity::AtLeast(1), func: |args| min_max::min_max("min", args) },
    "max"   => { arity: Arity::AtLeast(1), func: |args| min_max::min_max("max", args) },
    "log"   => { arity: Arity::OneOf(&[1, 2]), func: log::log },
    "log10" => { arity: Arity::Exact(1), func: log::log10 },
    "log2"  => { arity: Arity::Exact(1), func: log::log2 },
    "exp"   => { arity: Arity::Exact(1), func: builtin::exp },
    "sin"   => { arity: Arity::Exact(1), func: builtin::sin },
    "cos"   => { arity: Arity::Exact(1), func: builtin::cos },
    "tan"   => { arity: Arity::Exact(1), func: builtin::tan },
    "asin"  => { arity: Arity::Exact(1), func: builtin::asin },
    "acos"  => { arity: Arity::Exact(1), func: builtin::acos },
    "atan"  => { arity: Arity::Exact(1), func: builtin::atan },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

impl Scope {
    /// Evaluates a builtin function call.
    ///
    /// The name is looked up in the builtin table, the argument count is
    /// verified and the builtin is executed.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: Evaluated argument values.
    ///
    /// # Returns
    /// The function result or an error if lookup or arity fails.
    ///
    /// # Example
    /// ```
    /// use calcpad::interpreter::{evaluator::core::Scope, value::core::Value};
    ///
    /// let v = Scope::eval_function("max", &[Value::from(2), Value::from(9), Value::from(4)]);
    /// assert_eq!(v.unwrap(), Value::from(9));
    ///
    /// assert!(Scope::eval_function("sqrt", &[]).is_err());
    /// assert!(Scope::eval_function("nope", &[Value::from(1)]).is_err());
    /// ```
    pub fn eval_function(name: &str, args: &[Value]) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name:
                                                                                      name.to_string() })?;

        if !builtin.arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name:  name.to_string(),
                                                             found: args.len(), });
        }

        (builtin.func)(args)
    }
}
