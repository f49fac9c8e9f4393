/// Call a check function with an error formatted from the remaining arguments
///
/// ```
/// use relay::{Relay, trip};
///
/// let relay = Relay::with_handler(|err| assert_eq!(err.to_string(), "port 70000 is out of range"));
/// let (check, filter) = relay.fns();
///
/// filter(std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
///     trip!(check, "port {} is out of range", 70_000);
/// })));
/// ```
#[macro_export]
macro_rules! trip {
    ($check:expr, $($arg:tt)+) => {
        ($check)(::core::result::Result::<(), $crate::anyhow::Error>::Err(
            $crate::anyhow::anyhow!($($arg)+),
        ))
    };
}

/// Call a coded check function with an exit code and a formatted error
#[macro_export]
macro_rules! coded_trip {
    ($coded_check:expr, $code:expr, $($arg:tt)+) => {
        ($coded_check)(
            $code,
            ::core::result::Result::<(), $crate::anyhow::Error>::Err($crate::anyhow::anyhow!($($arg)+)),
        )
    };
}
