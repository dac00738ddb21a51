//! Fuzz target for the JSON entrypoint.
//!
//! The first input line is the mode, the rest are the arguments. Whatever
//! arrives, the response must be a JSON envelope with a boolean `ok` and
//! exactly one of `data` or `error`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use xmlpack_core::ffi::run_json;

const MAX_INPUT_SIZE: usize = 32 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (mode, args) = input.split_once('\n').unwrap_or((input, "{}"));

    let response = run_json(mode, args);
    let envelope: Value =
        serde_json::from_str(&response).unwrap_or_else(|err| panic!("not JSON ({err}): {response}"));
    let ok = envelope["ok"].as_bool().expect("`ok` must be a boolean");
    assert_eq!(envelope.get("data").is_some(), ok);
    assert_eq!(envelope.get("error").is_some(), !ok);
});
