//! Basic Classification Example
//!
//! This example runs a handful of inputs through every validation kind.
//!
//! Run with:
//! ```bash
//! cargo run -p fieldcheck --example basic_validation
//! ```

use fieldcheck::{is_valid, ValidationKind};

fn main() {
    let samples = [
        "user@example.com",
        "abc12345",
        "4532015112830366",
        "10000000146",
        "Mary Jane",
        "https://example.com/path",
        "555-123-4567",
        "K1A 0B1",
        "192.168.1.1",
        "123456789X",
        "definitely not valid",
    ];

    for input in samples {
        println!("{input:?}");
        for kind in ValidationKind::ALL {
            if is_valid(input, kind) {
                println!("  matches {kind}");
            }
        }
        println!();
    }
}
