mod core;
#[cfg(test)]
mod utils;

use crate::core::{flag, vuln};

fn main() {
    println!("=== Buffer Overflow Challenge ===");
    println!("Can you get the flag?");
    println!();

    // Never called from here. The flag routine exists as the hijack target,
    // so keep its address alive or the linker strips it.
    let _ = std::hint::black_box(flag::print_flag as usize);

    vuln::vulnerable_function();

    println!("\nBye!");
}
