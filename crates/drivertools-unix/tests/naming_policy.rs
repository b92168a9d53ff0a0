//! Unix naming conventions, exercised through the `Toolchain` port.

use drivertools_core::{Environment, LinkOutputType, Sanitizer, Toolchain, Triple};
use drivertools_unix::GenericUnixToolchain;

fn toolchain() -> Box<dyn Toolchain> {
    Box::new(
        GenericUnixToolchain::builder(Environment::new())
            .executable_dir("/opt/driver/bin")
            .current_dir("/")
            .without_fallback()
            .build(),
    )
}

#[test]
fn test_linker_output_names() {
    let tc = toolchain();
    assert_eq!(
        tc.make_linker_output_filename("Foo", LinkOutputType::Executable),
        "Foo"
    );
    assert_eq!(
        tc.make_linker_output_filename("Foo", LinkOutputType::DynamicLibrary),
        "libFoo.so"
    );
    assert_eq!(
        tc.make_linker_output_filename("Foo", LinkOutputType::StaticLibrary),
        "libFoo.a"
    );
}

#[test]
fn test_sanitizer_runtime_names() {
    let tc = toolchain();
    let x86 = Triple::new("x86_64-unknown-linux-gnu");
    let arm = Triple::new("aarch64-unknown-linux-android");

    assert_eq!(
        tc.runtime_library_name(Sanitizer::Address, &x86, true),
        "libclang_rt.asan-x86_64.a"
    );
    assert_eq!(
        tc.runtime_library_name(Sanitizer::Address, &x86, false),
        "libclang_rt.asan-x86_64.a"
    );
    assert_eq!(
        tc.runtime_library_name(Sanitizer::Thread, &arm, false),
        "libclang_rt.tsan-aarch64.a"
    );
    assert_eq!(
        tc.runtime_library_name("fuzzer".parse().unwrap(), &arm, true),
        "libclang_rt.fuzzer-aarch64.a"
    );
}

#[test]
fn test_no_sdk_and_no_debug_info_invocation() {
    let tc = toolchain();
    assert_eq!(tc.default_sdk_path(), None);
    assert!(!tc.should_store_invocation_in_debug_info());
}
