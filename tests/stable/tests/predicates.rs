use va_iter::is_empty;
use va_iter::narg;
use va_iter::not;
use va_iter::not_empty;

macro_rules! indirect {
    ($x:expr) => { $x };
}

// === not! ===

#[test]
fn not_of_zero_is_one() {
    assert_eq!(not!(0), 1);
}

#[test]
fn not_of_one_is_zero() {
    assert_eq!(not!(1), 0);
}

#[test]
fn not_of_greater_than_one_is_zero() {
    assert_eq!(not!(9), 0);
}

#[test]
fn not_of_indirect_values() {
    assert_eq!(not!(indirect!(0)), 1);
    assert_eq!(not!(indirect!(1)), 0);
    assert_eq!(not!(indirect!(9)), 0);
}

#[test]
fn not_of_counted_arguments() {
    assert_eq!(not!(narg!()), 1);
    assert_eq!(not!(narg!(1, 2, 3)), 0);
    assert_eq!(not!(not!(0)), 0);
}

#[test]
fn not_of_qualified_calls() {
    const EMPTY: u8 = not!(va_iter::narg!());
    assert_eq!(EMPTY, 1);
    assert_eq!(not!(va_iter::not_empty!(a, b)), 0);
    assert_eq!(not!(::va_iter::is_empty!()), 0);
}

#[test]
fn not_of_forwarded_fragments() {
    macro_rules! is_zero {
        ($e:expr) => { not!($e) };
    }
    const ZERO: u8 = 0;
    assert_eq!(is_zero!(0), 1);
    assert_eq!(is_zero!(7), 0);
    assert_eq!(is_zero!(ZERO), 1);
}

#[test]
fn not_is_a_constant() {
    const TRUE: u8 = not!(0);
    const FROM_CONST: u8 = not!(indirect!(3));
    assert_eq!(TRUE, 1);
    assert_eq!(FROM_CONST, 0);
}

mod shadowed {
    use va_iter::not;

    macro_rules! not_empty {
        ($($t:tt)*) => { 0 };
    }

    #[test]
    fn not_tests_the_macro_in_scope() {
        assert_eq!(not_empty!(x), 0);
        assert_eq!(not!(not_empty!(x)), 1);
        assert_eq!(not!(va_iter::not_empty!(x)), 0);
    }
}

// === not_empty! ===

#[test]
fn not_empty_of_no_args_is_zero() {
    assert_eq!(not_empty!(), 0);
}

#[test]
fn not_empty_of_one_arg_is_one() {
    assert_eq!(not_empty!(3), 1);
}

#[test]
fn not_empty_of_multiple_args_is_one() {
    assert_eq!(not_empty!(3, b, 4), 1);
}

#[test]
fn not_empty_of_quoted_arg_is_one() {
    assert_eq!(not_empty!('a'), 1);
    assert_eq!(not_empty!(""), 1);
}

// === is_empty! ===

#[test]
fn is_empty_of_no_args_is_one() {
    assert_eq!(is_empty!(), 1);
}

#[test]
fn is_empty_of_one_arg_is_zero() {
    assert_eq!(is_empty!(3), 0);
}

#[test]
fn is_empty_of_multiple_args_is_zero() {
    assert_eq!(is_empty!(3, b, 4), 0);
}

#[test]
fn is_empty_of_quoted_arg_is_zero() {
    assert_eq!(is_empty!('a'), 0);
}

#[test]
fn emptiness_predicates_are_complements() {
    assert_eq!(is_empty!() + not_empty!(), 1);
    assert_eq!(is_empty!(a, b) + not_empty!(a, b), 1);
}
