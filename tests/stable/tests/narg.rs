use va_iter::narg;

#[test]
fn counts_no_arguments() {
    assert_eq!(narg!(), 0);
}

#[test]
fn counts_non_zero_arguments() {
    assert_eq!(13, narg!(1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13));
    assert_eq!(narg!('a'), 1);
    assert_eq!(narg!("a, b"), 1);
    assert_eq!(narg!(tested.arg, 3 * 2, f(x, y)), 3);
}

#[test]
fn counts_maximum_arguments() {
    let count = narg!(
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16
    );
    assert_eq!(count, 64);
}

#[test]
fn ignores_a_trailing_comma() {
    assert_eq!(narg!(a, b, c,), 3);
}

#[test]
fn is_usable_in_const_context() {
    const FIELDS: usize = narg!(name, last_name, birthdate);
    let names: [&str; narg!(x, y)] = ["x", "y"];
    assert_eq!(FIELDS, 3);
    assert_eq!(names.len(), 2);
}

#[test]
fn counts_arguments_forwarded_by_macro_rules() {
    macro_rules! count_exprs {
        ($($e:expr),*) => { narg!($($e),*) };
    }
    assert_eq!(count_exprs!(), 0);
    assert_eq!(count_exprs!(1 + 1, (2, 3), [4]), 3);
}
