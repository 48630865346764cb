//! Shared provider for unit tests, built once from the UCD excerpt in
//! `testdata/ucd`.

use std::sync::OnceLock;

use crate::provider::{UnicodeDataBuilder, UnicodeDataProvider};

pub(crate) const UCD_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ucd");

pub(crate) fn provider() -> &'static UnicodeDataProvider {
    static PROVIDER: OnceLock<UnicodeDataProvider> = OnceLock::new();
    PROVIDER.get_or_init(|| {
        UnicodeDataBuilder::from_ucd_dir(UCD_DIR)
            .and_then(UnicodeDataBuilder::build)
            .expect("test UCD excerpt should build")
    })
}
