#![no_main]
use libfuzzer_sys::fuzz_target;

use rill_ast::parse;

fuzz_target!(|data: &[u8]| {
    // The fuzzer gives us raw bytes.
    // We only care about inputs that are valid UTF-8.
    if let Ok(s) = std::str::from_utf8(data) {
        // We are looking for panics, and for spans that escape the source.
        if let Ok(program) = parse(s) {
            program.root().visit(&mut |node| {
                let span = node.span();
                assert!(span.start <= span.end);
                assert!(span.end < s.len());
            });
        }
    }
});
