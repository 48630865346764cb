use std::sync::OnceLock;

use blitz_unicode::{UnicodeDataBuilder, UnicodeDataProvider};

pub const UCD_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/ucd");

pub fn provider() -> &'static UnicodeDataProvider {
    static PROVIDER: OnceLock<UnicodeDataProvider> = OnceLock::new();
    PROVIDER.get_or_init(|| {
        let _ = env_logger::builder().is_test(true).try_init();
        UnicodeDataBuilder::from_ucd_dir(UCD_DIR)
            .and_then(UnicodeDataBuilder::build)
            .expect("UCD excerpt should build")
    })
}
