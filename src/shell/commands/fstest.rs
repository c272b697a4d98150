use alloc::format;
use alloc::string::String;
use core::sync::atomic::Ordering;

use crate::fs::error::FsError;
use crate::fs::namespace::ROOT_INDEX;

/// fstest — automated namespace self-test suite.
/// Output goes to both VGA (println) and serial (log_info).
pub fn run(_args: &str) {
    macro_rules! test_log {
        ($($arg:tt)*) => {
            crate::println!($($arg)*);
            crate::log_info!($($arg)*);
        }
    }

    test_log!("=== Namespace Test Suite ===");

    let mut pass = 0u32;
    let mut fail = 0u32;

    // The namespace is append-only, so suffix the scratch directory with
    // the tick counter to keep reruns from colliding
    let ticks = super::uptime::TICKS.load(Ordering::Relaxed);
    let base = format!("/selftest_{}", ticks);

    // Test 1: mkdir
    {
        let mut ns = crate::fs::NAMESPACE.lock();
        match ns.mkdir(&base) {
            Ok(_) => { test_log!("[PASS] mkdir {}", base); pass += 1; }
            Err(e) => { test_log!("[FAIL] mkdir {}: {}", base, e); fail += 1; }
        }
    }

    // Test 2: cd + pwd round trip
    {
        let mut ns = crate::fs::NAMESPACE.lock();
        let previous = String::from(ns.pwd());
        if ns.chdir(&base).is_ok() && ns.pwd() == base {
            test_log!("[PASS] cd {} -> pwd matches", base);
            pass += 1;
        } else {
            test_log!("[FAIL] cd {}: pwd is {}", base, ns.pwd());
            fail += 1;
        }
        let _ = ns.chdir(&previous);
    }

    // Test 3: nested mkdir under the scratch directory
    {
        let mut ns = crate::fs::NAMESPACE.lock();
        let nested = format!("{}/inner", base);
        match ns.mkdir(&nested) {
            Ok(_) => { test_log!("[PASS] mkdir {}", nested); pass += 1; }
            Err(e) => { test_log!("[FAIL] mkdir {}: {}", nested, e); fail += 1; }
        }
    }

    // Test 4: listing shows the nested child
    {
        let ns = crate::fs::NAMESPACE.lock();
        match ns.list(Some(base.as_str())) {
            Ok(entries) if entries.len() == 1 && entries[0].name == "inner" => {
                test_log!("[PASS] ls {}: found inner", base);
                pass += 1;
            }
            Ok(entries) => {
                test_log!("[FAIL] ls {}: unexpected entries ({})", base, entries.len());
                fail += 1;
            }
            Err(e) => { test_log!("[FAIL] ls {}: {}", base, e); fail += 1; }
        }
    }

    // Test 5: duplicate mkdir is rejected
    {
        let mut ns = crate::fs::NAMESPACE.lock();
        match ns.mkdir(&base) {
            Err(FsError::AlreadyExists) => {
                test_log!("[PASS] duplicate mkdir -> AlreadyExists");
                pass += 1;
            }
            other => {
                test_log!("[FAIL] duplicate mkdir: {:?}", other);
                fail += 1;
            }
        }
    }

    // Test 6: mkdir under a missing parent is rejected
    {
        let mut ns = crate::fs::NAMESPACE.lock();
        match ns.mkdir("/no_such_parent/child") {
            Err(FsError::ParentNotFound) => {
                test_log!("[PASS] mkdir under missing parent -> ParentNotFound");
                pass += 1;
            }
            other => {
                test_log!("[FAIL] mkdir under missing parent: {:?}", other);
                fail += 1;
            }
        }
    }

    // Test 7: "/" resolves to the root from anywhere
    {
        let ns = crate::fs::NAMESPACE.lock();
        match ns.resolve("/", ns.cwd()) {
            Ok(ROOT_INDEX) => { test_log!("[PASS] resolve / -> root"); pass += 1; }
            other => { test_log!("[FAIL] resolve /: {:?}", other); fail += 1; }
        }
    }

    // Test 8: failed cd leaves the cursor alone
    {
        let mut ns = crate::fs::NAMESPACE.lock();
        let before = String::from(ns.pwd());
        match ns.chdir("/definitely_missing") {
            Err(FsError::NotFound) if ns.pwd() == before => {
                test_log!("[PASS] cd to missing dir -> NotFound, cursor kept");
                pass += 1;
            }
            other => {
                test_log!("[FAIL] cd to missing dir: {:?} (pwd {})", other, ns.pwd());
                fail += 1;
            }
        }
    }

    test_log!("=== Results: {}/{} passed ===", pass, pass + fail);
    if fail != 0 {
        test_log!("{} test(s) FAILED.", fail);
    }
}
