//! Provider built once from the UCD excerpt shipped with `blitz-unicode`.

use std::sync::OnceLock;

use blitz_unicode::{UnicodeDataBuilder, UnicodeDataProvider};

const UCD_DIR: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../packages/blitz-unicode/testdata/ucd"
);

pub(crate) fn provider() -> &'static UnicodeDataProvider {
    static PROVIDER: OnceLock<UnicodeDataProvider> = OnceLock::new();
    PROVIDER.get_or_init(|| {
        UnicodeDataBuilder::from_ucd_dir(UCD_DIR)
            .and_then(UnicodeDataBuilder::build)
            .expect("test UCD excerpt should build")
    })
}
