//! Fuzz target for loading store documents.
//!
//! Goal: deserializing and checking a store should **never panic**, and a
//! document that loads must survive a write/read cycle unchanged.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_store_document
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use lostfound_repo::StoreDocument;

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = serde_json::from_slice::<StoreDocument>(data) else {
        return;
    };
    if doc.check().is_err() {
        return;
    }
    let text = serde_json::to_string(&doc).expect("serialize loaded store");
    let again: StoreDocument = serde_json::from_str(&text).expect("reload written store");
    assert_eq!(doc, again);
});
