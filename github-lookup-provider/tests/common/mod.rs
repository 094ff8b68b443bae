//! Shared helpers for the live API tests.

#![allow(dead_code)]

use github_lookup_provider::{ClientConfig, QueryService};

/// Skip the test when the network tests were not requested explicitly.
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var("GITHUB_LOOKUP_LIVE").is_err() {
            eprintln!("skipping: set GITHUB_LOOKUP_LIVE=1 to hit api.github.com");
            return;
        }
    };
}

/// Assert a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Query service against the real API, authenticated when `GITHUB_TOKEN` is set.
pub fn live_service() -> Option<QueryService> {
    let config = ClientConfig::default().with_token(std::env::var("GITHUB_TOKEN").ok());
    QueryService::from_config(config).ok()
}
