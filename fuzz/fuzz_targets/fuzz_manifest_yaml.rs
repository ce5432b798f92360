#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Manifest parsing must never panic; every accepted service has its fields set
    if let Ok(manifest) = create_service_push::parse_manifest(data) {
        for spec in &manifest {
            assert!(!spec.name().is_empty());
            assert!(!spec.broker().is_empty());
            assert!(!spec.plan().is_empty());
        }
    }
});
