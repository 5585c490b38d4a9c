use va_iter::par1_each_idx;
use va_iter::par2_each_idx;
use va_iter::par_each_idx;
use va_iter_test_stable::Outer;
use va_iter_test_stable::TestStruct;

#[test]
fn tuple_of_fixed_parameters() {
    let tested = TestStruct(6, 4, 2);
    let mut checks = 0;
    macro_rules! check_scaled {
        ($factor:expr, $base:ident, $value:expr, $idx:tt) => {
            assert_eq!($value * $factor, $base.$idx);
            checks += 1;
        };
    }
    par_each_idx!(check_scaled, (2, tested), 3, 2, 1);
    assert_eq!(checks, 3);
}

#[test]
fn scalar_fixed_parameter() {
    let tested = TestStruct(6, 4, 2);
    let mut checks = 0;
    macro_rules! check {
        ($base:ident, $value:expr, $idx:tt) => {
            assert_eq!($value, $base.$idx);
            checks += 1;
        };
    }
    par_each_idx!(check, tested, 6, 4, 2);
    assert_eq!(checks, 3);
}

#[test]
fn redundant_parentheses_denote_a_single_parameter() {
    let tested = TestStruct(6, 4, 2);
    let mut checks = 0;
    macro_rules! check {
        ($base:ident, $value:expr, $idx:tt) => {
            assert_eq!($value, $base.$idx);
            checks += 1;
        };
    }
    par_each_idx!(check, (tested), 6, 4, 2);
    assert_eq!(checks, 3);
}

#[test]
fn multi_token_fixed_parameter() {
    let outer = Outer { inner: TestStruct(1, 2, 3) };
    let mut checks = 0;
    macro_rules! check {
        ($base:expr, $value:expr, $idx:tt) => {
            assert_eq!($value, $base.$idx);
            checks += 1;
        };
    }
    par_each_idx!(check, outer.inner, 1, 2, 3);
    assert_eq!(checks, 3);
}

#[test]
fn doubly_parenthesized_parameter_is_passed_as_a_tuple() {
    let mut sums = Vec::new();
    macro_rules! add_pair {
        (($a:expr, $b:expr), $value:expr, $idx:tt) => { sums.push($a + $b + $value + $idx); };
    }
    par_each_idx!(add_pair, ((1, 2)), 10, 20);
    assert_eq!(sums, [13, 24]);
}

#[test]
fn empty_fixed_parameters() {
    let mut chars = ['-'; 2];
    macro_rules! cache {
        ($c:expr, $idx:tt) => { chars[$idx] = $c; };
    }
    par_each_idx!(cache, (), 'x', 'y');
    assert_eq!(chars, ['x', 'y']);
}

#[test]
fn no_arguments_make_no_calls() {
    let calls = 0;
    #[allow(unused_macros)]
    macro_rules! count {
        ($a:expr, $b:expr, $value:expr, $idx:tt) => { calls += 1; };
    }
    par_each_idx!(count, (1, 2));
    assert_eq!(calls, 0);
}

#[test]
fn positional_wrappers() {
    let tested = TestStruct(6, 4, 2);
    let mut checks = 0;

    macro_rules! check_one {
        ($base:ident, $value:expr, $idx:tt) => {
            assert_eq!($value, $base.$idx);
            checks += 1;
        };
    }
    par1_each_idx!(check_one, tested, 6, 4, 2);

    macro_rules! check_two {
        ($factor:expr, $base:ident, $value:expr, $idx:tt) => {
            assert_eq!($value * $factor, $base.$idx);
            checks += 1;
        };
    }
    par2_each_idx!(check_two, 2, tested, 3, 2, 1);
    assert_eq!(checks, 6);

    let mut pairs = Vec::new();
    macro_rules! keep_pair {
        ($pair:expr, $value:expr, $idx:tt) => { pairs.push(($pair.0 + $value, $idx)); };
    }
    par1_each_idx!(keep_pair, (10, 0), 1, 2);
    assert_eq!(pairs, [(11, 0), (12, 1)]);
}
