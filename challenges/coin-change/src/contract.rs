//! The JSON request/response contract around the solver.
//!
//! One object in, one object out. Every way the request can be wrong —
//! unparsable input, wrong top-level type, missing or mistyped fields —
//! collapses into the same `{"minCoins":-1}` payload the infeasible case
//! produces, and a panic barrier in `run` folds any unexpected fault into
//! that same payload. The only error that can leave `run` is the physical
//! write of the response.

use std::io::{Read, Write};
use std::panic::{self, AssertUnwindSafe};

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::solver;

/// Sentinel shared by "invalid request" and "no solution exists".
const FAILURE: i64 = -1;

/// Response payload. Exactly one key, serialized compactly.
#[derive(Debug, Serialize)]
struct Response {
    #[serde(rename = "minCoins")]
    min_coins: i64,
}

/// Validate the parsed request and delegate to the solver.
///
/// `coins` must be a JSON array of integers and `amount` a strict JSON
/// integer (a float or boolean fails the check). Anything else is a
/// contract violation and resolves to the sentinel without building a
/// table.
fn evaluate(request: &Value) -> i64 {
    let Some(object) = request.as_object() else {
        debug!("top-level value is not an object");
        return FAILURE;
    };

    let Some(coin_values) = object.get("coins").and_then(Value::as_array) else {
        debug!("missing or non-array `coins`");
        return FAILURE;
    };
    let Some(amount) = object.get("amount").and_then(Value::as_i64) else {
        debug!("missing or non-integer `amount`");
        return FAILURE;
    };

    let mut coins = Vec::with_capacity(coin_values.len());
    for value in coin_values {
        match value.as_i64() {
            Some(coin) => coins.push(coin),
            None => {
                debug!("non-integer denomination in `coins`");
                return FAILURE;
            }
        }
    }

    solver::min_coins(&coins, amount)
}

/// Perform the full exchange: read one JSON value from `input`, write
/// exactly one response line to `out`.
///
/// The returned error covers only the write to `out`; every request-side
/// failure has already been folded into the payload by then.
pub fn run(input: impl Read, mut out: impl Write) -> std::io::Result<()> {
    // Outer barrier: a panic anywhere on the request path still becomes
    // the sentinel payload.
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        match serde_json::from_reader::<_, Value>(input) {
            Ok(request) => evaluate(&request),
            Err(err) => {
                debug!("request is not valid JSON: {err}");
                FAILURE
            }
        }
    }))
    .unwrap_or(FAILURE);

    // serde_json cannot fail on a one-field integer struct, but the
    // contract forbids letting any fault surface past this point.
    let mut body = serde_json::to_string(&Response { min_coins: result })
        .unwrap_or_else(|_| format!("{{\"minCoins\":{FAILURE}}}"));
    body.push('\n');

    // Single write: the response is never emitted partially.
    out.write_all(body.as_bytes())?;
    out.flush()
}
