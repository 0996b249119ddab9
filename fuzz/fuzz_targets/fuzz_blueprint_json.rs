#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz blueprint template parsing - this should never panic
        let _ = serde_json::from_str::<task_master_planner::Blueprint>(content);
    }
});
