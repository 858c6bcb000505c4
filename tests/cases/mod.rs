// Helper macro to distinguish between patterns and expressions
macro_rules! assert_case {
    // Guard patterns - patterns with if conditions
    ($result:expr, { $pattern:pat if $guard:expr }) => {
        match $result {
            $pattern if $guard => {},
            other => panic!("Expected {} if {} but got {:?}", stringify!($pattern), stringify!($guard), other),
        }
    };

    ($result:expr, { Ok($($pattern:tt)*) }) => {
        match $result {
            Ok($($pattern)*) => {},
            other => panic!("Expected Ok({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    ($result:expr, { Err($($pattern:tt)*) }) => {
        match $result {
            Err($($pattern)*) => {},
            other => panic!("Expected Err({}) but got {:#?}", stringify!($($pattern)*), other),
        }
    };

    // Wildcard pattern
    ($result:expr, { _ }) => {
        let _ = $result;
    };

    // Default case - treat as expression for equality comparison
    ($result:expr, { $expected:expr }) => {
        match $result {
            Ok(actual) => {
                pretty_assertions::assert_eq!($expected, actual, "Expected {:#?} but got {:#?}\n\n< expected / got >", $expected, actual);
            },
            other => panic!("Expected Ok(...) but got {:?}", other),
        }
    };
}

// Helper macro to generate test functions based on field names
macro_rules! handle_case {
    ([$($attrs:meta)*] map, { $f:expr => $expected:tt }) => {
        $(#[$attrs])*
        #[test]
        fn validate_map() {
            let result = seqxform::map(&input(), $f);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] try_map, { $f:expr => $expected:tt }) => {
        $(#[$attrs])*
        #[test]
        fn validate_try_map() {
            let result = seqxform::try_map(&input(), $f);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] filter, { $f:expr => $expected:tt }) => {
        $(#[$attrs])*
        #[test]
        fn validate_filter() {
            let result = seqxform::filter(&input(), $f);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] try_filter, { $f:expr => $expected:tt }) => {
        $(#[$attrs])*
        #[test]
        fn validate_try_filter() {
            let result = seqxform::try_filter(&input(), $f);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] par_map, { $f:expr => $expected:tt }) => {
        $(#[$attrs])*
        #[cfg(feature = "parallel")]
        #[test]
        fn validate_par_map() {
            let result = seqxform::par_map(&input(), $f);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] par_filter, { $f:expr => $expected:tt }) => {
        $(#[$attrs])*
        #[cfg(feature = "parallel")]
        #[test]
        fn validate_par_filter() {
            let result = seqxform::par_filter(&input(), $f);
            assert_case!(result, $expected);
        }
    };

    ([$($attrs:meta)*] rendered, { $f:expr => $expected:tt }) => {
        $(#[$attrs])*
        #[test]
        fn validate_rendered() {
            // Normalize by stripping trailing whitespace from each line
            fn normalize(s: &str) -> String {
                s.lines()
                    .map(|line| line.trim_end())
                    .collect::<Vec<_>>()
                    .join("\n")
                    + "\n"
            }

            let items = input();
            let err = match seqxform::try_map(&items, $f) {
                Err(e) => e,
                Ok(_) => panic!("Expected the transform to fail, but it succeeded"),
            };
            let mut buf = Vec::new();
            let config = seqxform::RenderConfig { color: false, ..Default::default() };
            seqxform::render_error_to(&err, &items, &mut buf, &config).unwrap();
            let rendered = normalize(&String::from_utf8_lossy(&buf));

            let result: Result<&str, ()> = Ok(rendered.as_str());
            assert_case!(result, $expected);
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        parse_assertions! {@parse [
            $($test_functions)*
            handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, then any order for assertions
macro_rules! test_case {
    (
        name: $name:ident,
        input: $ty:ty = $input:expr,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;

            // Make `$input` available to all test functions
            fn input() -> $ty {
                $input
            }

            // Generate all test functions
            parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };
}
