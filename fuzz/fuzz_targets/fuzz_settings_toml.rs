#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<create_service_push::config::FileConfig>(content) {
            let _ = config.poll.to_policy().intervals().take(64).count();
        }
    }
});
