/// Shorthand for creating a fraction in tests.
#[macro_export]
macro_rules! FR {
    ($value:expr) => {
        $crate::data::number_types::rational::Fraction::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Fraction::new($numer, $denom)
    };
}
